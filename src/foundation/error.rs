use crate::scene::slice::LayerKind;

pub type DialpaperResult<T> = Result<T, DialpaperError>;

/// Every failure the library reports. None of them is fatal to a [`crate::Studio`]: errors are
/// scoped to the render pass or storage call that produced them.
#[derive(thiserror::Error, Debug)]
pub enum DialpaperError {
    #[error("validation error: {0}")]
    Validation(String),

    /// A gradient stop position was outside `[0, 1]` (or not finite).
    #[error("gradient stop {index} has position {position} outside [0, 1]")]
    OutOfRangeStop { index: usize, position: f64 },

    /// Compositing was attempted before the layer's surface existed.
    #[error("surface for layer '{0}' is missing")]
    MissingSurface(LayerKind),

    #[error("no font loaded for text rendering")]
    MissingFont,

    #[error("render error: {0}")]
    Render(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DialpaperError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
