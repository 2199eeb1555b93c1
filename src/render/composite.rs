use crate::foundation::error::{DialpaperError, DialpaperResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::surface::Surface;
use crate::scene::slice::LayerKind;

pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> DialpaperResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(DialpaperError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// The per-layer surfaces a composite pass reads. `None` means the layer has no surface yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayerSurfaces<'a> {
    pub background: Option<&'a Surface>,
    pub ring: Option<&'a Surface>,
    pub clock: Option<&'a Surface>,
}

impl<'a> LayerSurfaces<'a> {
    pub fn get(&self, kind: LayerKind) -> Option<&'a Surface> {
        match kind {
            LayerKind::Background => self.background,
            LayerKind::Ring => self.ring,
            LayerKind::Clock => self.clock,
        }
    }
}

/// Clear `output`, then paint background, ring and clock onto it at (0, 0) in that order.
///
/// Every input is checked before `output` is touched, so a failed pass leaves the previous
/// composite in place.
#[tracing::instrument(level = "debug", skip_all, fields(width = output.width(), height = output.height()))]
pub fn composite(output: &mut Surface, layers: LayerSurfaces<'_>) -> DialpaperResult<()> {
    let mut ordered = Vec::with_capacity(LayerKind::ALL.len());
    for kind in LayerKind::ALL {
        let surface = layers.get(kind).ok_or(DialpaperError::MissingSurface(kind))?;
        if surface.canvas() != output.canvas() {
            return Err(DialpaperError::render(format!(
                "{kind} surface is {}x{}, output is {}x{}",
                surface.width(),
                surface.height(),
                output.width(),
                output.height()
            )));
        }
        ordered.push(surface);
    }

    output.clear();
    for surface in ordered {
        over_in_place(output.data_mut(), surface.data())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
