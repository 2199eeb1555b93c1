//! The stateful editing session: current scene, per-layer surfaces, composited output.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::text::TextLayoutEngine;
use crate::encode::png::{encode_png, write_png};
use crate::foundation::core::Canvas;
use crate::foundation::error::{DialpaperError, DialpaperResult};
use crate::render::composite::{LayerSurfaces, composite};
use crate::render::layers::paint_layer;
use crate::render::surface::Surface;
use crate::scene::action::Action;
use crate::scene::model::SceneState;
use crate::scene::reducer::reduce;
use crate::scene::slice::LayerKind;
use crate::session::storage::StateStorage;

#[derive(Clone, Debug, Default)]
pub struct StudioOpts {
    /// TTF/OTF used for the clock labels. Without it the clock layer cannot render.
    pub font_bytes: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerFailure {
    pub layer: LayerKind,
    pub message: String,
}

/// What one [`Studio::dispatch`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchReport {
    /// The new version differs from the previous one.
    pub changed: bool,
    /// The reducer produced a state that failed validation; nothing else happened.
    pub rejected: Option<String>,
    pub repainted: Vec<LayerKind>,
    pub failed: Vec<LayerFailure>,
    pub composited: bool,
    pub composite_error: Option<String>,
    pub save_error: Option<String>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_none()
            && self.failed.is_empty()
            && self.composite_error.is_none()
            && self.save_error.is_none()
    }
}

#[derive(Default)]
struct LayerSet {
    background: Option<Surface>,
    ring: Option<Surface>,
    clock: Option<Surface>,
}

impl LayerSet {
    fn slot(&mut self, kind: LayerKind) -> &mut Option<Surface> {
        match kind {
            LayerKind::Background => &mut self.background,
            LayerKind::Ring => &mut self.ring,
            LayerKind::Clock => &mut self.clock,
        }
    }

    fn surfaces(&self) -> LayerSurfaces<'_> {
        LayerSurfaces {
            background: self.background.as_ref(),
            ring: self.ring.as_ref(),
            clock: self.clock.as_ref(),
        }
    }
}

pub struct Studio<S: StateStorage> {
    storage: S,
    state: Arc<SceneState>,
    layers: LayerSet,
    /// Layers whose last repaint failed; retried on every dispatch.
    stale: Vec<LayerKind>,
    output: Surface,
    text: TextLayoutEngine,
}

impl<S: StateStorage> Studio<S> {
    /// Load the stored scene (or the default) and render every layer once.
    ///
    /// Individual layer failures are logged; the layer starts out transparent.
    pub fn new(storage: S, opts: StudioOpts) -> DialpaperResult<Self> {
        let text = match opts.font_bytes {
            Some(bytes) => TextLayoutEngine::with_font_bytes(bytes)?,
            None => TextLayoutEngine::new(),
        };
        let state = Arc::new(storage.load().unwrap_or_default());
        let canvas = state.canvas()?;

        let mut studio = Self {
            storage,
            state,
            layers: LayerSet::default(),
            stale: Vec::new(),
            output: Surface::new(canvas)?,
            text,
        };
        let mut report = DispatchReport::default();
        for kind in LayerKind::ALL {
            *studio.layers.slot(kind) = Some(Surface::new(canvas)?);
            studio.repaint(kind, canvas, &mut report);
        }
        studio.recomposite(canvas, &mut report);
        tracing::info!(
            width = canvas.width,
            height = canvas.height,
            failed = report.failed.len(),
            "studio ready"
        );
        Ok(studio)
    }

    pub fn state(&self) -> &Arc<SceneState> {
        &self.state
    }

    pub fn output(&self) -> &Surface {
        &self.output
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Surface> {
        self.layers.surfaces().get(kind)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn has_font(&self) -> bool {
        self.text.has_font()
    }

    /// Apply `action`, repaint the layers whose inputs changed, composite, persist.
    #[tracing::instrument(level = "info", skip_all, fields(action = action.kind()))]
    pub fn dispatch(&mut self, action: Action) -> DispatchReport {
        let mut report = DispatchReport::default();

        let next = reduce(&self.state, action);
        let canvas = match next.validate().and_then(|()| next.canvas()) {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(%err, "rejecting invalid scene");
                report.rejected = Some(err.to_string());
                return report;
            }
        };

        let prev = std::mem::replace(&mut self.state, next);
        report.changed = !Arc::ptr_eq(&prev, &self.state) && *prev != *self.state;
        let affected = LayerKind::affected(&prev, &self.state);
        for kind in LayerKind::ALL {
            if affected.contains(&kind) || self.stale.contains(&kind) {
                self.repaint(kind, canvas, &mut report);
            }
        }
        self.recomposite(canvas, &mut report);

        if let Err(err) = self.storage.save(&self.state) {
            tracing::warn!(%err, "failed to persist scene");
            report.save_error = Some(err.to_string());
        }
        report
    }

    /// Paint `kind` into a scratch surface and swap it in on success.
    ///
    /// On failure the layer is marked stale and keeps its previous pixels. If those no
    /// longer match the canvas size it is shown empty at the new size instead.
    fn repaint(&mut self, kind: LayerKind, canvas: Canvas, report: &mut DispatchReport) {
        let result = Surface::new(canvas)
            .and_then(|mut scratch| {
                paint_layer(kind, &self.state, &mut scratch, &mut self.text).map(|()| scratch)
            });
        let slot = self.layers.slot(kind);
        match result {
            Ok(surface) => {
                *slot = Some(surface);
                self.stale.retain(|k| *k != kind);
                report.repainted.push(kind);
            }
            Err(err) => {
                tracing::warn!(layer = %kind, %err, "layer repaint failed");
                if !matches!(slot.as_ref(), Some(s) if s.canvas() == canvas) {
                    *slot = Surface::new(canvas).ok();
                }
                if !self.stale.contains(&kind) {
                    self.stale.push(kind);
                }
                report.failed.push(LayerFailure {
                    layer: kind,
                    message: err.to_string(),
                });
            }
        }
    }

    fn recomposite(&mut self, canvas: Canvas, report: &mut DispatchReport) {
        let result = if self.output.canvas() == canvas {
            composite(&mut self.output, self.layers.surfaces())
        } else {
            Surface::new(canvas).and_then(|mut fresh| {
                composite(&mut fresh, self.layers.surfaces())?;
                self.output = fresh;
                Ok(())
            })
        };
        match result {
            Ok(()) => report.composited = true,
            Err(err @ DialpaperError::MissingSurface(_)) => {
                tracing::debug!(%err, "skipping composite");
                report.composite_error = Some(err.to_string());
            }
            Err(err) => {
                tracing::warn!(%err, "composite failed");
                report.composite_error = Some(err.to_string());
            }
        }
    }

    /// The composited output as PNG bytes.
    pub fn export_png(&self) -> DialpaperResult<Vec<u8>> {
        encode_png(&self.output)
    }

    /// Write the output as PNG to a file, or to `wallpaper.png` inside a directory.
    pub fn export_to(&self, target: impl AsRef<Path>) -> DialpaperResult<PathBuf> {
        let path = write_png(&self.output, target.as_ref())?;
        tracing::info!(path = %path.display(), "exported wallpaper");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/studio.rs"]
mod tests;
