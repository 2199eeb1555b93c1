use super::*;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::DialpaperError;

fn small_scene() -> SceneState {
    let mut scene = SceneState {
        width: 48,
        height: 64,
        ..SceneState::default()
    };
    scene.ring.scale_x = 48;
    scene.ring.scale_y = 64;
    scene
}

#[test]
fn upright_at_moves_origin_without_rotating_axes() {
    let a = std::f64::consts::FRAC_PI_2;
    let m = upright_at(a, 10.0);
    let p = m * Point::ORIGIN;
    assert!((p.x - 10.0).abs() < 1e-9 && p.y.abs() < 1e-9);
    // Linear part is the identity.
    let c = m.as_coeffs();
    assert!((c[0] - 1.0).abs() < 1e-9 && c[1].abs() < 1e-9);
    assert!(c[2].abs() < 1e-9 && (c[3] - 1.0).abs() < 1e-9);
}

#[test]
fn place_around_restores_transform_between_items() {
    let mut s = Surface::new(crate::foundation::core::Canvas::new(8, 8).unwrap()).unwrap();
    let mut ctx = DrawContext::new(&mut s).unwrap();
    ctx.translate(Vec2::new(4.0, 4.0));
    let before = ctx.transform();
    let mut seen = Vec::new();
    place_around(
        &mut ctx,
        [(0.0, 'a'), (std::f64::consts::PI, 'b')],
        2.0,
        |ctx, tag| {
            seen.push((tag, ctx.transform() * Point::ORIGIN));
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(ctx.transform(), before);
    assert_eq!(seen[0].0, 'a');
    assert!((seen[0].1 - Point::new(4.0, 2.0)).hypot() < 1e-9);
    assert!((seen[1].1 - Point::new(4.0, 6.0)).hypot() < 1e-9);
}

#[test]
fn background_layer_is_opaque() {
    let scene = small_scene();
    let mut s = Surface::new(scene.canvas().unwrap()).unwrap();
    let mut text = TextLayoutEngine::new();
    paint_layer(LayerKind::Background, &scene, &mut s, &mut text).unwrap();
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn disabled_layers_leave_a_cleared_surface() {
    let mut scene = small_scene();
    scene.ring.enabled = false;
    scene.clock_face.enabled = false;
    let mut text = TextLayoutEngine::new();
    for kind in [LayerKind::Ring, LayerKind::Clock] {
        let mut s = Surface::new(scene.canvas().unwrap()).unwrap();
        s.fill(crate::foundation::core::Rgba8Premul::from_straight_rgba(
            1, 2, 3, 255,
        ));
        paint_layer(kind, &scene, &mut s, &mut text).unwrap();
        assert!(s.is_transparent(), "{kind} should be cleared");
    }
}

#[test]
fn ring_layer_paints_only_the_outline() {
    let scene = small_scene();
    let mut s = Surface::new(scene.canvas().unwrap()).unwrap();
    let mut text = TextLayoutEngine::new();
    paint_layer(LayerKind::Ring, &scene, &mut s, &mut text).unwrap();
    // Center (24, 32), radius 24.
    assert_eq!(s.pixel(24, 32).unwrap().a, 0);
    assert_eq!(s.pixel(24, 8).unwrap().a, 255);
}

#[test]
fn clock_layer_without_font_fails() {
    let scene = small_scene();
    let mut s = Surface::new(scene.canvas().unwrap()).unwrap();
    let mut text = TextLayoutEngine::new();
    let err = paint_layer(LayerKind::Clock, &scene, &mut s, &mut text).unwrap_err();
    assert!(matches!(err, DialpaperError::MissingFont));
}
