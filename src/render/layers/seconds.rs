use std::f64::consts::PI;

use crate::assets::color::ColorValue;
use crate::assets::text::{LabelStyle, TextLayoutEngine};
use crate::foundation::core::Point;
use crate::foundation::error::DialpaperResult;
use crate::render::context::DrawContext;
use crate::render::layers::place_around;

/// Dots at every second position that doesn't coincide with an hour.
///
/// Not part of the default scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondsConfig {
    pub radius: f64,
    pub center: Point,
    pub color: ColorValue,
    pub font_size: f32,
}

impl Default for SecondsConfig {
    fn default() -> Self {
        Self {
            radius: 150.0,
            center: Point::new(150.0, 150.0),
            color: ColorValue::BLACK,
            font_size: 25.0,
        }
    }
}

/// Angles of the 48 second ticks (`n·π/30`, skipping multiples of 5).
pub fn tick_angles() -> impl Iterator<Item = f64> {
    (1..=60u32)
        .filter(|n| n % 5 != 0)
        .map(|n| f64::from(n) * PI / 30.0)
}

pub fn draw(
    ctx: &mut DrawContext<'_>,
    cfg: &SecondsConfig,
    text: &mut TextLayoutEngine,
) -> DialpaperResult<()> {
    let dot = text.layout_label(
        ".",
        &LabelStyle {
            size_px: cfg.font_size,
            bold: false,
            italic: false,
            color: cfg.color,
        },
    )?;
    let center = cfg.center.to_vec2();
    ctx.with_saved(|ctx| {
        ctx.translate(center);
        place_around(
            ctx,
            tick_angles().map(|a| (a, &dot)),
            cfg.radius * 0.9,
            |ctx, dot| {
                ctx.fill_label(dot);
                Ok(())
            },
        )
    })
}
