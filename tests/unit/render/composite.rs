use super::*;
use crate::foundation::core::{Canvas, Rgba8Premul};

fn filled(w: u32, h: u32, c: Option<Rgba8Premul>) -> Surface {
    let mut s = Surface::new(Canvas::new(w, h).unwrap()).unwrap();
    if let Some(c) = c {
        s.fill(c);
    }
    s
}

#[test]
fn over_transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn over_opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn over_half_alpha_blends() {
    // 50% white over opaque black.
    let out = over([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out, [128, 128, 128, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn layers_paint_back_to_front() {
    let red = Rgba8Premul::from_straight_rgba(255, 0, 0, 255);
    let blue = Rgba8Premul::from_straight_rgba(0, 0, 255, 255);
    let bg = filled(4, 4, Some(red));
    let ring = filled(4, 4, None);
    let mut clock = filled(4, 4, None);
    clock.data_mut()[..4].copy_from_slice(&blue.to_array());

    let mut out = filled(4, 4, Some(Rgba8Premul::from_straight_rgba(9, 9, 9, 255)));
    composite(
        &mut out,
        LayerSurfaces {
            background: Some(&bg),
            ring: Some(&ring),
            clock: Some(&clock),
        },
    )
    .unwrap();
    assert_eq!(out.pixel(0, 0), Some(blue));
    assert_eq!(out.pixel(3, 3), Some(red));
}

#[test]
fn missing_surface_is_reported_and_output_untouched() {
    let bg = filled(2, 2, Some(Rgba8Premul::from_straight_rgba(255, 0, 0, 255)));
    let ring = filled(2, 2, None);
    let keep = Rgba8Premul::from_straight_rgba(1, 2, 3, 255);
    let mut out = filled(2, 2, Some(keep));
    let err = composite(
        &mut out,
        LayerSurfaces {
            background: Some(&bg),
            ring: Some(&ring),
            clock: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, DialpaperError::MissingSurface(LayerKind::Clock)));
    assert_eq!(out.pixel(1, 1), Some(keep));
}

#[test]
fn size_mismatch_is_an_error() {
    let bg = filled(2, 2, None);
    let ring = filled(3, 2, None);
    let clock = filled(2, 2, None);
    let mut out = filled(2, 2, None);
    let err = composite(
        &mut out,
        LayerSurfaces {
            background: Some(&bg),
            ring: Some(&ring),
            clock: Some(&clock),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("ring surface is 3x2"));
}
