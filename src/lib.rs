//! Dialpaper composes clock-face wallpapers from three independently rendered layers.
//!
//! - A full-canvas conical gradient background
//! - A gradient-stroked ring
//! - Twelve hour labels placed around a circle
//!
//! A [`Studio`] owns the current [`SceneState`], applies [`Action`]s through the pure
//! [`reduce`] transition, repaints only the layers whose inputs changed, composites them
//! back to front and persists the scene through a [`StateStorage`].
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod encode;
pub(crate) mod gradient;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{DialpaperError, DialpaperResult};

pub use crate::assets::color::ColorValue;
pub use crate::assets::text::{LabelLayout, LabelStyle, TextLayoutEngine};
pub use crate::encode::png::{DEFAULT_FILE_NAME, encode_png, write_png};
pub use crate::gradient::{ColorStop, Gradient, GradientGeometry, GradientSpec};
pub use crate::render::composite::{LayerSurfaces, PremulRgba8, composite, over, over_in_place};
pub use crate::render::context::{DrawContext, Paint};
pub use crate::render::layers::background::{BackgroundConfig, draw as draw_background};
pub use crate::render::layers::clock::{ClockConfig, HOUR_ANGLES, draw as draw_clock};
pub use crate::render::layers::legacy::{
    RadialBackgroundConfig, draw_circle, draw_radial_gradient, radial_geometry,
};
pub use crate::render::layers::ring::{RingConfig, draw as draw_ring};
pub use crate::render::layers::seconds::{SecondsConfig, draw as draw_seconds, tick_angles};
pub use crate::render::layers::{paint_layer, place_around, upright_at};
pub use crate::render::surface::Surface;
pub use crate::scene::action::{Action, RingUpdate};
pub use crate::scene::model::{
    BackgroundGradient, ClockFace, HOUR_COUNT, Ring, SceneState, arabic_labels, roman_labels,
};
pub use crate::scene::presets::{RESOLUTIONS, Resolution, find_resolution};
pub use crate::scene::reducer::reduce;
pub use crate::scene::slice::{LayerKind, SceneSlice};
pub use crate::session::storage::{FileStorage, MemoryStorage, STATE_KEY, StateStorage};
pub use crate::session::studio::{DispatchReport, LayerFailure, Studio, StudioOpts};
