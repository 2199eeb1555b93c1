use crate::foundation::error::{DialpaperError, DialpaperResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Pixel dimensions shared by every surface of a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Surfaces are backed by `vello_cpu` pixmaps, which address at most `u16::MAX` pixels per side.
    pub const MAX_SIDE: u32 = u16::MAX as u32;
    /// Total pixel budget per canvas: 8K UHD, about 133 MB per RGBA8 surface.
    pub const MAX_PIXELS: u64 = 7680 * 4320;

    pub fn new(width: u32, height: u32) -> DialpaperResult<Self> {
        if width == 0 || height == 0 {
            return Err(DialpaperError::validation(
                "canvas width and height must be > 0",
            ));
        }
        if width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(DialpaperError::validation(format!(
                "canvas {width}x{height} exceeds {} pixels per side",
                Self::MAX_SIDE
            )));
        }
        if u64::from(width) * u64::from(height) > Self::MAX_PIXELS {
            return Err(DialpaperError::validation(format!(
                "canvas {width}x{height} exceeds {} pixels",
                Self::MAX_PIXELS
            )));
        }
        Ok(Self { width, height })
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub(crate) fn as_u16(self) -> DialpaperResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| DialpaperError::render("surface width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| DialpaperError::render("surface height exceeds u16"))?;
        Ok((w, h))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
