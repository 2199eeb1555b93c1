use std::fmt;

use crate::scene::model::SceneState;

/// A region of [`SceneState`] a renderer can depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneSlice {
    /// `width` and `height`.
    Canvas,
    BackgroundGradient,
    Ring,
    ClockFace,
}

impl SceneSlice {
    pub fn changed(self, prev: &SceneState, next: &SceneState) -> bool {
        match self {
            Self::Canvas => prev.width != next.width || prev.height != next.height,
            Self::BackgroundGradient => prev.background_gradient != next.background_gradient,
            Self::Ring => prev.ring != next.ring,
            Self::ClockFace => prev.clock_face != next.clock_face,
        }
    }
}

/// The independently rendered layers of a scene, in z-order (bottom first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    Background,
    Ring,
    Clock,
}

impl LayerKind {
    pub const ALL: [LayerKind; 3] = [Self::Background, Self::Ring, Self::Clock];

    /// Slices this layer's renderer reads. Nothing else triggers a repaint.
    pub fn reads(self) -> &'static [SceneSlice] {
        match self {
            Self::Background => &[SceneSlice::Canvas, SceneSlice::BackgroundGradient],
            Self::Ring => &[SceneSlice::Canvas, SceneSlice::Ring],
            Self::Clock => &[SceneSlice::Canvas, SceneSlice::ClockFace],
        }
    }

    pub fn is_affected(self, prev: &SceneState, next: &SceneState) -> bool {
        self.reads().iter().any(|s| s.changed(prev, next))
    }

    /// Layers whose inputs differ between `prev` and `next`, in z-order.
    pub fn affected(prev: &SceneState, next: &SceneState) -> Vec<LayerKind> {
        Self::ALL
            .into_iter()
            .filter(|l| l.is_affected(prev, next))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Ring => "ring",
            Self::Clock => "clock",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
