use crate::foundation::core::{Point, Rect};
use crate::foundation::error::DialpaperResult;
use crate::gradient::{Gradient, GradientGeometry, GradientSpec};
use crate::render::context::{DrawContext, Paint};
use crate::scene::model::SceneState;

/// Full-canvas conical gradient, the bottom layer of every scene.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundConfig {
    pub width: u32,
    pub height: u32,
    /// Defaults to [`GradientSpec::rainbow`].
    pub color_stops: GradientSpec,
    /// Center offset in steps of 5px.
    pub x_offset: i32,
    pub y_offset: i32,
    /// Seam rotation in steps of 1/8.2 rad.
    pub shine: i32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            width: SceneState::DEFAULT_WIDTH,
            height: SceneState::DEFAULT_HEIGHT,
            color_stops: GradientSpec::rainbow(),
            x_offset: 0,
            y_offset: 0,
            shine: 0,
        }
    }
}

impl BackgroundConfig {
    pub fn from_scene(scene: &SceneState) -> Self {
        let bg = &scene.background_gradient;
        Self {
            width: scene.width,
            height: scene.height,
            color_stops: bg.color_stops.clone(),
            x_offset: bg.x_offset,
            y_offset: bg.y_offset,
            shine: bg.shine,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            f64::from(self.width) / 2.0 + f64::from(self.x_offset) * 5.0,
            f64::from(self.height) / 2.0 + f64::from(self.y_offset) * 5.0,
        )
    }

    pub fn gradient_geometry(&self) -> GradientGeometry {
        GradientGeometry::conical_full_turn(self.center(), f64::from(self.shine) / 8.2)
    }
}

pub fn draw(ctx: &mut DrawContext<'_>, cfg: &BackgroundConfig) -> DialpaperResult<()> {
    let gradient = Gradient::build(cfg.gradient_geometry(), cfg.color_stops.stops())?;
    ctx.set_paint(Paint::Gradient(gradient));
    ctx.fill_rect(Rect::new(
        0.0,
        0.0,
        f64::from(cfg.width),
        f64::from(cfg.height),
    ))
}

#[cfg(test)]
#[path = "../../../tests/unit/render/layers/background.rs"]
mod tests;
