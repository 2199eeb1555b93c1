//! Fixed-geometry primitives from the first wallpaper layouts.

use crate::assets::color::ColorValue;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::DialpaperResult;
use crate::gradient::{ColorStop, Gradient, GradientGeometry, GradientSpec};
use crate::render::context::{DrawContext, Paint};

/// Stroke a solid circle. Paint and line width are left as they were.
pub fn draw_circle(
    ctx: &mut DrawContext<'_>,
    color: ColorValue,
    center: Point,
    radius: f64,
) -> DialpaperResult<()> {
    ctx.with_saved(|ctx| {
        ctx.set_paint(Paint::Solid(color));
        ctx.stroke_circle(center, radius)
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialBackgroundConfig {
    pub width: u32,
    pub height: u32,
    pub color_stops: GradientSpec,
}

impl Default for RadialBackgroundConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            color_stops: GradientSpec::new(vec![
                ColorStop::new(0.0, ColorValue::rgb(0x00, 0xDD, 0x99)),
                ColorStop::new(0.5, ColorValue::rgb(0xAA, 0x00, 0x00)),
                ColorStop::new(1.0, ColorValue::rgb(0x00, 0x00, 0x66)),
            ]),
        }
    }
}

pub fn radial_geometry() -> GradientGeometry {
    GradientGeometry::Radial {
        inner_center: Point::new(150.0, 150.0),
        inner_radius: 100.0,
        outer_center: Point::new(100.0, 100.0),
        outer_radius: 220.0,
    }
}

/// Fill the canvas with the two-circle radial gradient.
pub fn draw_radial_gradient(
    ctx: &mut DrawContext<'_>,
    cfg: &RadialBackgroundConfig,
) -> DialpaperResult<()> {
    let gradient = Gradient::build(radial_geometry(), cfg.color_stops.stops())?;
    ctx.with_saved(|ctx| {
        ctx.set_paint(Paint::Gradient(gradient));
        ctx.fill_rect(Rect::new(
            0.0,
            0.0,
            f64::from(cfg.width),
            f64::from(cfg.height),
        ))
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/render/layers/legacy.rs"]
mod tests;
