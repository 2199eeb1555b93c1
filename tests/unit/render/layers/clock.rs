use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::error::DialpaperError;
use crate::render::surface::Surface;

#[test]
fn hour_angles_step_by_thirty_degrees() {
    for (i, a) in HOUR_ANGLES.iter().enumerate() {
        assert!((a - (i as f64 + 1.0) * PI / 6.0).abs() < 1e-12);
    }
    assert!((HOUR_ANGLES[11] - 2.0 * PI).abs() < 1e-12);
}

#[test]
fn geometry_from_radius_and_width() {
    let cfg = ClockConfig {
        radius: 100.0,
        width: 300,
        height: 400,
        x: 1,
        y: -2,
        ..ClockConfig::default()
    };
    assert_eq!(cfg.translation(), 150.0);
    assert_eq!(cfg.origin(), Point::new(155.0, 190.0));
    assert_eq!(cfg.label_style().size_px, 25.0);
}

fn eights(radius: f64) -> ClockConfig {
    ClockConfig {
        radius,
        width: 300,
        height: 300,
        font_size: 30.0,
        labels: std::array::from_fn(|_| "8".to_string()),
        ..ClockConfig::default()
    }
}

#[test]
fn draw_restores_transform_and_save_depth() {
    let cfg = eights(60.0);
    let mut s = Surface::new(Canvas::new(300, 300).unwrap()).unwrap();
    let mut ctx = DrawContext::new(&mut s).unwrap();
    ctx.rotate(0.25);
    ctx.save();
    let before = ctx.transform();
    let mut text = crate::test_support::font_engine();
    draw(&mut ctx, &cfg, &mut text).unwrap();
    assert_eq!(ctx.transform(), before);
    assert_eq!(ctx.save_depth(), 1);
}

#[test]
fn label_ink_is_centered_on_the_circle() {
    let cfg = eights(60.0);
    let mut s = Surface::new(Canvas::new(300, 300).unwrap()).unwrap();
    let mut ctx = DrawContext::new(&mut s).unwrap();
    let mut text = crate::test_support::font_engine();
    draw(&mut ctx, &cfg, &mut text).unwrap();
    ctx.finish();

    assert_eq!(cfg.translation(), 90.0);
    let origin = cfg.origin();
    for (i, a) in HOUR_ANGLES.iter().enumerate() {
        let cx = origin.x + 90.0 * a.sin();
        let cy = origin.y - 90.0 * a.cos();
        let (x0, y0) = ((cx - 18.0) as u32, (cy - 18.0) as u32);
        let (mx, my) = crate::test_support::ink_centroid(&s, x0, y0, x0 + 36, y0 + 36)
            .unwrap_or_else(|| panic!("no ink for label {i} near ({cx}, {cy})"));
        assert!(
            (mx - cx).abs() < 3.0 && (my - cy).abs() < 3.0,
            "label {i}: ink at ({mx:.1}, {my:.1}), expected ({cx:.1}, {cy:.1})"
        );
    }
    // Nothing is drawn at the dial center.
    assert!(crate::test_support::ink_centroid(&s, 130, 130, 170, 170).is_none());
}

#[test]
fn missing_font_leaves_transform_untouched() {
    let cfg = ClockConfig::default();
    let mut s = Surface::new(Canvas::new(16, 16).unwrap()).unwrap();
    let mut ctx = DrawContext::new(&mut s).unwrap();
    ctx.translate((3.0, 3.0).into());
    let before = ctx.transform();
    let mut text = TextLayoutEngine::new();
    let err = draw(&mut ctx, &cfg, &mut text).unwrap_err();
    assert!(matches!(err, DialpaperError::MissingFont));
    assert_eq!(ctx.transform(), before);
    assert_eq!(ctx.save_depth(), 0);
}
