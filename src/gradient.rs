//! Color-stop gradients: the one paint primitive every layer is built from.
//!
//! A [`Gradient`] is built from a [`GradientGeometry`] and an ordered list of [`ColorStop`]s.
//! Stops are validated and recorded in the order given; evaluation then works on a stable-sorted
//! copy, which is what a 2D canvas does with out-of-order `addColorStop` calls.

use std::f64::consts::PI;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assets::color::ColorValue;
use crate::foundation::core::{Point, Rgba8Premul};
use crate::foundation::error::{DialpaperError, DialpaperResult};
use crate::foundation::math::{canvas_angle, lerp_u8, wrap_angle};

/// One interpolation anchor. Serialized as `{ "step": .., "color": "#RRGGBB" }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    #[serde(rename = "step")]
    pub position: f64,
    pub color: ColorValue,
}

impl ColorStop {
    pub const fn new(position: f64, color: ColorValue) -> Self {
        Self { position, color }
    }
}

/// Ordered stop list as edited by the user. Ordering is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradientSpec(pub Vec<ColorStop>);

impl GradientSpec {
    /// Fewest colors the stop-count control offers.
    pub const MIN_COLORS: usize = 2;
    /// Most colors the stop-count control offers.
    pub const MAX_COLORS: usize = 8;

    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self(stops)
    }

    /// Six evenly spaced saturated hues, wrapping back to red.
    pub fn rainbow() -> Self {
        Self(vec![
            ColorStop::new(0.0, ColorValue::rgb(255, 0, 0)),
            ColorStop::new(0.2, ColorValue::rgb(0, 0, 255)),
            ColorStop::new(0.4, ColorValue::rgb(0, 255, 255)),
            ColorStop::new(0.6, ColorValue::rgb(255, 0, 255)),
            ColorStop::new(0.8, ColorValue::rgb(255, 255, 0)),
            ColorStop::new(1.0, ColorValue::rgb(255, 0, 0)),
        ])
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuild as `count` evenly spaced stops, keeping existing colors by index and filling new
    /// slots with black. `count` is clamped to `[MIN_COLORS, MAX_COLORS]`.
    pub fn with_color_count(&self, count: usize) -> Self {
        let count = count.clamp(Self::MIN_COLORS, Self::MAX_COLORS);
        let last = (count - 1) as f64;
        let stops = (0..count)
            .map(|i| {
                let color = self.0.get(i).map_or(ColorValue::BLACK, |s| s.color);
                ColorStop::new(i as f64 / last, color)
            })
            .collect();
        Self(stops)
    }

    /// Replace the color of every stop sitting exactly at `step`.
    pub fn set_color_at_step(&self, step: f64, color: ColorValue) -> Self {
        let stops = self
            .0
            .iter()
            .map(|s| {
                if s.position == step {
                    ColorStop::new(step, color)
                } else {
                    *s
                }
            })
            .collect();
        Self(stops)
    }
}

impl From<Vec<ColorStop>> for GradientSpec {
    fn from(stops: Vec<ColorStop>) -> Self {
        Self(stops)
    }
}

/// Where a gradient's parameter `t` comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientGeometry {
    /// Two-circle radial gradient (canvas `createRadialGradient`).
    Radial {
        inner_center: Point,
        inner_radius: f64,
        outer_center: Point,
        outer_radius: f64,
    },
    /// Angular gradient around `center`; `t` sweeps clockwise from `start_angle` to `end_angle`.
    Conical {
        center: Point,
        start_angle: f64,
        end_angle: f64,
    },
}

impl GradientGeometry {
    pub fn conical(center: Point, start_angle: f64, end_angle: f64) -> Self {
        Self::Conical {
            center,
            start_angle,
            end_angle,
        }
    }

    /// Full-turn conical gradient whose seam is rotated by `bias` radians.
    pub fn conical_full_turn(center: Point, bias: f64) -> Self {
        Self::conical(center, -PI + bias, PI + bias)
    }
}

/// A built gradient: geometry plus validated stops.
///
/// Cheap to clone; the evaluation table is shared.
#[derive(Debug, Clone)]
pub struct Gradient {
    geometry: GradientGeometry,
    stops: Vec<ColorStop>,
    sorted: Arc<[ColorStop]>,
}

impl Gradient {
    /// Create the gradient, then add `stops` one by one in list order.
    ///
    /// Fails with [`DialpaperError::OutOfRangeStop`] at the first position outside `[0, 1]`.
    pub fn build(geometry: GradientGeometry, stops: &[ColorStop]) -> DialpaperResult<Self> {
        let mut gradient = Self {
            geometry,
            stops: Vec::with_capacity(stops.len()),
            sorted: Arc::from(Vec::new()),
        };
        for (index, stop) in stops.iter().enumerate() {
            gradient.add_color_stop(index, *stop)?;
        }
        let mut sorted = gradient.stops.clone();
        // Stable: stops sharing a position keep insertion order, producing a hard edge.
        sorted.sort_by(|a, b| a.position.total_cmp(&b.position));
        gradient.sorted = Arc::from(sorted);
        Ok(gradient)
    }

    fn add_color_stop(&mut self, index: usize, stop: ColorStop) -> DialpaperResult<()> {
        if !stop.position.is_finite() || !(0.0..=1.0).contains(&stop.position) {
            return Err(DialpaperError::OutOfRangeStop {
                index,
                position: stop.position,
            });
        }
        self.stops.push(stop);
        Ok(())
    }

    pub fn geometry(&self) -> GradientGeometry {
        self.geometry
    }

    /// The stops exactly as supplied.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Straight-alpha color at parameter `t`.
    pub fn color_at(&self, t: f64) -> ColorValue {
        let stops = &*self.sorted;
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return ColorValue::rgba(0, 0, 0, 0);
        };
        if t.is_nan() || t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }
        // First stop strictly past `t`; its predecessor is at or before `t`.
        let hi = stops.partition_point(|s| s.position <= t);
        let (a, b) = (stops[hi - 1], stops[hi]);
        let span = b.position - a.position;
        if span <= 0.0 {
            return b.color;
        }
        let u = (t - a.position) / span;
        ColorValue::rgba(
            lerp_u8(a.color.r, b.color.r, u),
            lerp_u8(a.color.g, b.color.g, u),
            lerp_u8(a.color.b, b.color.b, u),
            lerp_u8(a.color.a, b.color.a, u),
        )
    }

    /// Gradient parameter for the pixel center `p`, or `None` where the gradient paints nothing.
    pub fn t_at(&self, p: Point) -> Option<f64> {
        match self.geometry {
            GradientGeometry::Conical {
                center,
                start_angle,
                end_angle,
            } => {
                let span = end_angle - start_angle;
                if !span.is_finite() || span == 0.0 {
                    return Some(0.0);
                }
                let theta = canvas_angle(p.x - center.x, p.y - center.y);
                Some((wrap_angle(theta - start_angle) / span).clamp(0.0, 1.0))
            }
            GradientGeometry::Radial {
                inner_center,
                inner_radius,
                outer_center,
                outer_radius,
            } => radial_t(p, inner_center, inner_radius, outer_center, outer_radius),
        }
    }

    /// Premultiplied color for the pixel center `p`.
    pub fn sample(&self, p: Point) -> Rgba8Premul {
        match self.t_at(p) {
            Some(t) => self.color_at(t).to_rgba8_premul(),
            None => Rgba8Premul::transparent(),
        }
    }

    /// Evaluate over a `width x height` pixel grid into premultiplied RGBA8 bytes.
    pub fn rasterize_premul(&self, width: u32, height: u32) -> Vec<u8> {
        let mut bytes = vec![0u8; (width as usize) * (height as usize) * 4];
        for (y, row) in bytes
            .chunks_exact_mut((width as usize).max(1) * 4)
            .enumerate()
        {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let c = self.sample(Point::new(x as f64 + 0.5, y as f64 + 0.5));
                px.copy_from_slice(&c.to_array());
            }
        }
        bytes
    }
}

/// Solve for the largest `ω` with `|p - c(ω)| = r(ω)` and `r(ω) >= 0`, where `c` and `r`
/// interpolate linearly from the inner to the outer circle.
fn radial_t(p: Point, c0: Point, r0: f64, c1: Point, r1: f64) -> Option<f64> {
    let (cdx, cdy, dr) = (c1.x - c0.x, c1.y - c0.y, r1 - r0);
    let (pdx, pdy) = (p.x - c0.x, p.y - c0.y);

    let a = cdx * cdx + cdy * cdy - dr * dr;
    let b = pdx * cdx + pdy * cdy + r0 * dr;
    let c = pdx * pdx + pdy * pdy - r0 * r0;

    let valid = |w: f64| r0 + w * dr >= 0.0;
    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return None;
        }
        let w = c / (2.0 * b);
        return valid(w).then_some(w.clamp(0.0, 1.0));
    }

    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let (w1, w2) = ((b + sq) / a, (b - sq) / a);
    let (hi, lo) = if w1 >= w2 { (w1, w2) } else { (w2, w1) };
    if valid(hi) {
        Some(hi.clamp(0.0, 1.0))
    } else if valid(lo) {
        Some(lo.clamp(0.0, 1.0))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/gradient.rs"]
mod tests;
