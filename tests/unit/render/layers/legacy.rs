use super::*;
use crate::foundation::core::Canvas;
use crate::render::surface::Surface;

#[test]
fn radial_geometry_uses_fixed_circles() {
    let GradientGeometry::Radial {
        inner_center,
        inner_radius,
        outer_center,
        outer_radius,
    } = radial_geometry()
    else {
        panic!("expected radial geometry");
    };
    assert_eq!(inner_center, Point::new(150.0, 150.0));
    assert_eq!(inner_radius, 100.0);
    assert_eq!(outer_center, Point::new(100.0, 100.0));
    assert_eq!(outer_radius, 220.0);
}

#[test]
fn default_stops_match_legacy_palette() {
    let stops = RadialBackgroundConfig::default().color_stops;
    let hex: Vec<String> = stops.stops().iter().map(|s| s.color.to_hex()).collect();
    assert_eq!(hex, ["#00DD99", "#AA0000", "#000066"]);
}

#[test]
fn circle_keeps_caller_paint_and_draws_outline() {
    let mut s = Surface::new(Canvas::new(40, 40).unwrap()).unwrap();
    {
        let mut ctx = DrawContext::new(&mut s).unwrap();
        ctx.set_line_width(4.0);
        draw_circle(&mut ctx, ColorValue::rgb(0, 0, 255), Point::new(20.0, 20.0), 10.0).unwrap();
        assert!(matches!(ctx.paint(), Paint::Solid(c) if *c == ColorValue::BLACK));
        ctx.finish();
    }
    assert_eq!(s.pixel(20, 20).unwrap().a, 0);
    let edge = s.pixel(30, 20).unwrap();
    assert_eq!((edge.b, edge.a), (255, 255));
}

#[test]
fn radial_background_fills_the_canvas() {
    let mut s = Surface::new(Canvas::new(300, 300).unwrap()).unwrap();
    {
        let mut ctx = DrawContext::new(&mut s).unwrap();
        draw_radial_gradient(&mut ctx, &RadialBackgroundConfig::default()).unwrap();
        ctx.finish();
    }
    // Inside the inner circle the first stop is padded.
    let c = s.pixel(150, 150).unwrap();
    assert_eq!((c.r, c.g, c.b, c.a), (0x00, 0xDD, 0x99, 255));
}
