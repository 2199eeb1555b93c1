use std::f64::consts::PI;

use crate::assets::color::ColorValue;
use crate::assets::text::{LabelStyle, TextLayoutEngine};
use crate::foundation::core::Point;
use crate::foundation::error::DialpaperResult;
use crate::render::context::DrawContext;
use crate::render::layers::place_around;
use crate::scene::model::{HOUR_COUNT, SceneState, arabic_labels};

/// Angle of each hour label, clockwise from 12 o'clock. Index 0 is 1 o'clock.
pub const HOUR_ANGLES: [f64; HOUR_COUNT] = [
    PI / 6.0,
    2.0 * PI / 6.0,
    3.0 * PI / 6.0,
    4.0 * PI / 6.0,
    5.0 * PI / 6.0,
    6.0 * PI / 6.0,
    7.0 * PI / 6.0,
    8.0 * PI / 6.0,
    9.0 * PI / 6.0,
    10.0 * PI / 6.0,
    11.0 * PI / 6.0,
    12.0 * PI / 6.0,
];

/// Twelve hour labels on a circle around the (offset) canvas center.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// Percent of the canvas width used as the label circle's diameter.
    pub radius: f64,
    /// Center offset in steps of 5px.
    pub x: i32,
    pub y: i32,
    /// Labels are drawn at `font_size + 10` px.
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub width: u32,
    pub height: u32,
    pub color: ColorValue,
    pub labels: [String; HOUR_COUNT],
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            radius: 85.0,
            x: 0,
            y: 0,
            font_size: 15.0,
            bold: false,
            italic: false,
            width: SceneState::DEFAULT_WIDTH,
            height: SceneState::DEFAULT_HEIGHT,
            color: ColorValue::rgb(0x00, 0x55, 0xFF),
            labels: arabic_labels(),
        }
    }
}

impl ClockConfig {
    pub fn from_scene(scene: &SceneState) -> Self {
        let c = &scene.clock_face;
        Self {
            radius: c.radius,
            x: c.x,
            y: c.y,
            font_size: c.font_size,
            bold: c.bold,
            italic: c.italic,
            width: scene.width,
            height: scene.height,
            color: c.color,
            labels: c.labels.clone(),
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(
            f64::from(self.width) / 2.0 + f64::from(self.x) * 5.0,
            f64::from(self.height) / 2.0 + f64::from(self.y) * 5.0,
        )
    }

    /// Distance from the origin to each label center.
    pub fn translation(&self) -> f64 {
        (self.radius / 100.0 * f64::from(self.width)) / 2.0
    }

    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            size_px: (self.font_size + 10.0) as f32,
            bold: self.bold,
            italic: self.italic,
            color: self.color,
        }
    }
}

/// Labels are shaped up front; the placement pass runs inside a saved state.
pub fn draw(
    ctx: &mut DrawContext<'_>,
    cfg: &ClockConfig,
    text: &mut TextLayoutEngine,
) -> DialpaperResult<()> {
    let style = cfg.label_style();
    let labels = cfg
        .labels
        .iter()
        .map(|l| text.layout_label(l, &style))
        .collect::<DialpaperResult<Vec<_>>>()?;

    let origin = cfg.origin().to_vec2();
    let distance = cfg.translation();
    ctx.with_saved(|ctx| {
        ctx.translate(origin);
        place_around(
            ctx,
            HOUR_ANGLES.into_iter().zip(&labels),
            distance,
            |ctx, label| {
                ctx.fill_label(label);
                Ok(())
            },
        )
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/render/layers/clock.rs"]
mod tests;
