use super::*;
use serde_json::json;

#[test]
fn resize_parses_from_tagged_json() {
    let a: Action = serde_json::from_value(json!({
        "type": "resize-canvas",
        "value": { "width": 800, "height": 600 }
    }))
    .unwrap();
    assert_eq!(
        a,
        Action::ResizeCanvas {
            width: 800,
            height: 600
        }
    );
}

#[test]
fn ring_update_accepts_camel_case_payload() {
    let a: Action = serde_json::from_value(json!({
        "type": "gradient-ring",
        "value": {
            "enabled": true,
            "colorStops": [{ "step": 0, "color": "#FFF" }, { "step": 1, "color": "#000" }],
            "shine": 3, "x": 1, "y": 2, "radius": -4, "strokeWidth": 12.5
        }
    }))
    .unwrap();
    let Action::SetRing(u) = a else {
        panic!("expected SetRing");
    };
    assert_eq!(u.radius, -4);
    assert_eq!(u.stroke_width, 12.5);
    assert_eq!(u.color_stops.len(), 2);
}

#[test]
fn reset_needs_no_value() {
    let a: Action = serde_json::from_value(json!({ "type": "reset" })).unwrap();
    assert_eq!(a, Action::Reset);
}

#[test]
fn unrecognised_type_becomes_unknown() {
    let a: Action = serde_json::from_value(json!({ "type": "spin-the-dial" })).unwrap();
    assert_eq!(a, Action::Unknown);
    assert_eq!(a.kind(), "unknown");
}

#[test]
fn whole_state_uses_storage_state_key() {
    let snapshot = SceneState::default();
    let a = Action::ReplaceWholeState {
        snapshot: Box::new(snapshot.clone()),
    };
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["type"], json!("save-whole-state"));
    assert!(v["value"].get("storageState").is_some());
    let back: Action = serde_json::from_value(v).unwrap();
    assert_eq!(back, a);
}

#[test]
fn preset_lookup_builds_resize() {
    assert_eq!(
        Action::resize_to_preset("8"),
        Some(Action::ResizeCanvas {
            width: 300,
            height: 300
        })
    );
    assert_eq!(Action::resize_to_preset("missing"), None);
}

#[test]
fn unrecognised_type_ignores_its_payload() {
    let a: Action = serde_json::from_value(json!({
        "type": "spin-the-dial",
        "value": { "degrees": 90 }
    }))
    .unwrap();
    assert_eq!(a, Action::Unknown);
}

#[test]
fn known_type_with_bad_payload_is_an_error() {
    let r: Result<Action, _> = serde_json::from_value(json!({
        "type": "resize-canvas",
        "value": { "width": "wide" }
    }));
    assert!(r.is_err());
}
