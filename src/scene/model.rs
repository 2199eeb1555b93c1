use serde::{Deserialize, Serialize};

use crate::assets::color::ColorValue;
use crate::foundation::core::Canvas;
use crate::foundation::error::{DialpaperError, DialpaperResult};
use crate::gradient::GradientSpec;

/// Number of hour positions on the dial.
pub const HOUR_COUNT: usize = 12;

/// Declarative description of the whole wallpaper. Persisted as JSON under the `state` key.
///
/// Versions are never mutated in place: the reducer builds a new value for every action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneState {
    pub width: u32,
    pub height: u32,
    #[serde(alias = "conicGradient")]
    pub background_gradient: BackgroundGradient,
    #[serde(alias = "gradientRing")]
    pub ring: Ring,
    #[serde(alias = "hours")]
    pub clock_face: ClockFace,
}

/// Full-canvas conical gradient; always painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundGradient {
    #[serde(alias = "colorList")]
    pub color_stops: GradientSpec,
    pub x_offset: i32,
    pub y_offset: i32,
    pub shine: i32,
}

/// Gradient-stroked circle. `scale_x`/`scale_y` track the canvas size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ring {
    pub enabled: bool,
    #[serde(alias = "colorList")]
    pub color_stops: GradientSpec,
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub scale_x: i32,
    pub scale_y: i32,
    pub shine: i32,
    pub stroke_width: f64,
}

/// Twelve hour labels laid out on a circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockFace {
    pub enabled: bool,
    /// Dial radius as a percentage of half the canvas width.
    pub radius: f64,
    pub x: i32,
    pub y: i32,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: ColorValue,
    /// Index 0 is the 1 o'clock position, index 11 is 12 o'clock.
    #[serde(alias = "timeFormat")]
    pub labels: [String; HOUR_COUNT],
}

impl SceneState {
    pub const DEFAULT_WIDTH: u32 = 1080;
    pub const DEFAULT_HEIGHT: u32 = 1920;

    pub fn canvas(&self) -> DialpaperResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Check the invariants renderers rely on.
    pub fn validate(&self) -> DialpaperResult<()> {
        self.canvas()?;
        if self.background_gradient.color_stops.is_empty() {
            return Err(DialpaperError::validation(
                "backgroundGradient.colorStops must not be empty",
            ));
        }
        if self.ring.color_stops.is_empty() {
            return Err(DialpaperError::validation(
                "ring.colorStops must not be empty",
            ));
        }
        if !self.ring.stroke_width.is_finite() || self.ring.stroke_width < 0.0 {
            return Err(DialpaperError::validation(
                "ring.strokeWidth must be finite and >= 0",
            ));
        }
        if !self.clock_face.radius.is_finite() || !self.clock_face.font_size.is_finite() {
            return Err(DialpaperError::validation(
                "clockFace.radius and clockFace.fontSize must be finite",
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> DialpaperResult<Self> {
        let state: Self = serde_json::from_str(json)
            .map_err(|e| DialpaperError::serde(format!("parse scene state JSON: {e}")))?;
        state.validate()?;
        Ok(state)
    }

    pub fn to_json(&self) -> DialpaperResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DialpaperError::serde(format!("serialize scene state: {e}")))
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            background_gradient: BackgroundGradient::default(),
            ring: Ring {
                scale_x: Self::DEFAULT_WIDTH as i32,
                scale_y: Self::DEFAULT_HEIGHT as i32,
                ..Ring::default()
            },
            clock_face: ClockFace::default(),
        }
    }
}

impl Default for BackgroundGradient {
    fn default() -> Self {
        Self {
            color_stops: GradientSpec::rainbow(),
            x_offset: 0,
            y_offset: 0,
            shine: 0,
        }
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            enabled: true,
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

impl Default for ClockFace {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 85.0,
            x: 0,
            y: 0,
            font_size: 15.0,
            bold: false,
            italic: false,
            color: ColorValue::rgb(0x00, 0x55, 0xFF),
            labels: arabic_labels(),
        }
    }
}

/// `"1"` through `"12"`.
pub fn arabic_labels() -> [String; HOUR_COUNT] {
    std::array::from_fn(|i| (i + 1).to_string())
}

/// `"I"` through `"XII"`.
pub fn roman_labels() -> [String; HOUR_COUNT] {
    const ROMAN: [&str; HOUR_COUNT] = [
        "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
    ];
    ROMAN.map(str::to_owned)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
