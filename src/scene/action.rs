use serde::{Deserialize, Serialize};

use crate::gradient::GradientSpec;
use crate::scene::model::{BackgroundGradient, ClockFace, SceneState};
use crate::scene::presets::find_resolution;

/// Ring controls the user edits directly. Canvas-derived `scaleX`/`scaleY` are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingUpdate {
    pub enabled: bool,
    #[serde(alias = "colorList")]
    pub color_stops: GradientSpec,
    pub shine: i32,
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub stroke_width: f64,
}

/// Every scene mutation. Serialized as `{ "type": "...", "value": { ... } }`.
///
/// Any unrecognised `type` deserializes to [`Action::Unknown`], whatever its `value`; the
/// reducer ignores it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Action {
    #[serde(rename = "resize-canvas")]
    ResizeCanvas { width: u32, height: u32 },

    /// Replaces the whole background subtree.
    #[serde(rename = "conical-gradient")]
    SetBackgroundGradient(BackgroundGradient),

    /// Merged into the ring subtree.
    #[serde(rename = "gradient-ring")]
    SetRing(RingUpdate),

    /// Merged into the clock-face subtree.
    #[serde(rename = "hours")]
    SetClockFace(ClockFace),

    /// Adopt background, ring and clock face from a snapshot; canvas size is kept.
    #[serde(rename = "save-whole-state")]
    ReplaceWholeState {
        #[serde(rename = "storageState", alias = "snapshot")]
        snapshot: Box<SceneState>,
    },

    #[serde(rename = "reset")]
    Reset,

    #[serde(rename = "unknown")]
    Unknown,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            value: serde_json::Value,
        }

        #[derive(Deserialize)]
        struct Resize {
            width: u32,
            height: u32,
        }

        #[derive(Deserialize)]
        struct WholeState {
            #[serde(rename = "storageState", alias = "snapshot")]
            snapshot: Box<SceneState>,
        }

        fn payload<T, E>(value: serde_json::Value) -> Result<T, E>
        where
            T: serde::de::DeserializeOwned,
            E: serde::de::Error,
        {
            serde_json::from_value(value).map_err(E::custom)
        }

        let Envelope { kind, value } = Envelope::deserialize(deserializer)?;
        match kind.as_str() {
            "resize-canvas" => {
                let Resize { width, height } = payload(value)?;
                Ok(Self::ResizeCanvas { width, height })
            }
            "conical-gradient" => Ok(Self::SetBackgroundGradient(payload(value)?)),
            "gradient-ring" => Ok(Self::SetRing(payload(value)?)),
            "hours" => Ok(Self::SetClockFace(payload(value)?)),
            "save-whole-state" => {
                let WholeState { snapshot } = payload(value)?;
                Ok(Self::ReplaceWholeState { snapshot })
            }
            "reset" => Ok(Self::Reset),
            _ => Ok(Self::Unknown),
        }
    }
}

impl Action {
    /// `ResizeCanvas` for a preset key, or `None` when the key is not in the table.
    pub fn resize_to_preset(key: &str) -> Option<Self> {
        find_resolution(key).map(|r| Self::ResizeCanvas {
            width: r.width,
            height: r.height,
        })
    }

    /// Stable short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ResizeCanvas { .. } => "resize-canvas",
            Self::SetBackgroundGradient(_) => "conical-gradient",
            Self::SetRing(_) => "gradient-ring",
            Self::SetClockFace(_) => "hours",
            Self::ReplaceWholeState { .. } => "save-whole-state",
            Self::Reset => "reset",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/action.rs"]
mod tests;
