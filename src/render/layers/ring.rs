use crate::foundation::core::Point;
use crate::foundation::error::DialpaperResult;
use crate::gradient::{Gradient, GradientGeometry, GradientSpec};
use crate::render::context::{DrawContext, Paint};
use crate::scene::model::SceneState;

/// A gradient-stroked circle. Only the outline is painted, so the result is an annulus.
#[derive(Debug, Clone, PartialEq)]
pub struct RingConfig {
    pub color_stops: GradientSpec,
    /// Center nudge in steps of 25/2 px.
    pub x: i32,
    pub y: i32,
    /// Radius nudge in steps of 7/2 px.
    pub radius: i32,
    /// Tracks the canvas size; see `ResizeCanvas`.
    pub scale_x: i32,
    pub scale_y: i32,
    /// Seam rotation in quarter radians.
    pub shine: i32,
    pub stroke_width: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            color_stops: GradientSpec::rainbow(),
            x: 0,
            y: 0,
            radius: 0,
            scale_x: 300,
            scale_y: 300,
            shine: 0,
            stroke_width: 5.0,
        }
    }
}

impl RingConfig {
    pub fn from_scene(scene: &SceneState) -> Self {
        let r = &scene.ring;
        Self {
            color_stops: r.color_stops.clone(),
            x: r.x,
            y: r.y,
            radius: r.radius,
            scale_x: r.scale_x,
            scale_y: r.scale_y,
            shine: r.shine,
            stroke_width: r.stroke_width,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            (f64::from(self.scale_x) + f64::from(self.x) * 25.0) / 2.0,
            (f64::from(self.scale_y) + f64::from(self.y) * 25.0) / 2.0,
        )
    }

    /// Diameter-like control value; never below 1.
    pub fn r_value(&self) -> f64 {
        let v = f64::from(self.scale_x) + f64::from(self.radius) * 7.0;
        if v > 0.0 { v } else { 1.0 }
    }

    pub fn r_scale(&self) -> f64 {
        self.r_value() / 2.0
    }

    pub fn gradient_geometry(&self) -> GradientGeometry {
        GradientGeometry::conical_full_turn(self.center(), f64::from(self.shine) / 4.0)
    }
}

pub fn draw(ctx: &mut DrawContext<'_>, cfg: &RingConfig) -> DialpaperResult<()> {
    let gradient = Gradient::build(cfg.gradient_geometry(), cfg.color_stops.stops())?;
    ctx.set_paint(Paint::Gradient(gradient));
    ctx.set_line_width(cfg.stroke_width);
    ctx.stroke_circle(cfg.center(), cfg.r_scale())
}

#[cfg(test)]
#[path = "../../../tests/unit/render/layers/ring.rs"]
mod tests;
