//! Layer renderers. Each renderer reads one config struct and draws into a [`DrawContext`].

pub(crate) mod background;
pub(crate) mod clock;
pub(crate) mod legacy;
pub(crate) mod ring;
pub(crate) mod seconds;

use crate::assets::text::TextLayoutEngine;
use crate::foundation::core::Affine;
use crate::foundation::error::DialpaperResult;
use crate::render::context::DrawContext;
use crate::render::surface::Surface;
use crate::scene::model::SceneState;
use crate::scene::slice::LayerKind;

/// Local transform that moves the origin `distance` out along `angle` (clockwise from 12 o'clock)
/// while keeping the axes upright: rotate, translate, rotate back.
pub fn upright_at(angle: f64, distance: f64) -> Affine {
    Affine::rotate(angle) * Affine::translate((0.0, -distance)) * Affine::rotate(-angle)
}

/// Call `draw` once per `(angle, item)` with the origin moved to that position on a circle of
/// radius `distance`. The context transform is restored after every item.
pub fn place_around<T>(
    ctx: &mut DrawContext<'_>,
    items: impl IntoIterator<Item = (f64, T)>,
    distance: f64,
    mut draw: impl FnMut(&mut DrawContext<'_>, T) -> DialpaperResult<()>,
) -> DialpaperResult<()> {
    for (angle, item) in items {
        ctx.with_transform(upright_at(angle, distance), |ctx| draw(ctx, item))?;
    }
    Ok(())
}

/// Clear `surface` and draw `kind` for `scene` onto it.
///
/// Disabled layers leave the surface cleared.
#[tracing::instrument(level = "debug", skip_all, fields(layer = %kind))]
pub fn paint_layer(
    kind: LayerKind,
    scene: &SceneState,
    surface: &mut Surface,
    text: &mut TextLayoutEngine,
) -> DialpaperResult<()> {
    surface.clear();
    let mut ctx = DrawContext::new(surface)?;
    match kind {
        LayerKind::Background => {
            background::draw(&mut ctx, &background::BackgroundConfig::from_scene(scene))?;
        }
        LayerKind::Ring => {
            if scene.ring.enabled {
                ring::draw(&mut ctx, &ring::RingConfig::from_scene(scene))?;
            }
        }
        LayerKind::Clock => {
            if scene.clock_face.enabled {
                clock::draw(&mut ctx, &clock::ClockConfig::from_scene(scene), text)?;
            }
        }
    }
    ctx.finish();
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
