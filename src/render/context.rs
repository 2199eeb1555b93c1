//! A small 2D-canvas-style drawing context over `vello_cpu`.
//!
//! The context keeps its own state (transform, paint, line width) and a save stack, and pushes
//! that state into the `vello_cpu::RenderContext` at each draw call. Transform changes that must
//! be undone go through [`DrawContext::with_transform`] / [`DrawContext::with_saved`], which
//! restore the previous state whether or not the callback succeeds.

use std::sync::Arc;

use vello_cpu::kurbo::Shape as _;

use crate::assets::color::ColorValue;
use crate::assets::text::LabelLayout;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Vec2};
use crate::foundation::error::{DialpaperError, DialpaperResult};
use crate::gradient::Gradient;
use crate::render::surface::Surface;

/// Fill/stroke style.
#[derive(Debug, Clone)]
pub enum Paint {
    Solid(ColorValue),
    Gradient(Gradient),
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(ColorValue::BLACK)
    }
}

#[derive(Debug, Clone)]
struct DrawState {
    transform: Affine,
    paint: Paint,
    line_width: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: Paint::default(),
            line_width: 1.0,
        }
    }
}

pub struct DrawContext<'s> {
    target: &'s mut Surface,
    ctx: vello_cpu::RenderContext,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl<'s> DrawContext<'s> {
    /// Start drawing onto `target`. Nothing reaches the surface until [`Self::finish`].
    pub fn new(target: &'s mut Surface) -> DialpaperResult<Self> {
        let (w, h) = target.canvas().as_u16()?;
        Ok(Self {
            target,
            ctx: vello_cpu::RenderContext::new(w, h),
            state: DrawState::default(),
            saved: Vec::new(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.target.canvas()
    }

    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    pub fn set_transform(&mut self, transform: Affine) {
        self.state.transform = transform;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.state.transform *= Affine::translate(offset);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.state.transform *= Affine::rotate(angle);
    }

    pub fn paint(&self) -> &Paint {
        &self.state.paint
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.state.paint = paint;
    }

    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    /// Zero, negative and non-finite widths are ignored, as on a 2D canvas.
    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    pub fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    /// Pop the most recently saved state; no-op when nothing is saved.
    pub fn restore(&mut self) {
        if let Some(s) = self.saved.pop() {
            self.state = s;
        }
    }

    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Run `f` between a save and a restore. The restore happens even when `f` fails, and also
    /// discards any saves `f` left unbalanced.
    pub fn with_saved<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> DialpaperResult<R>,
    ) -> DialpaperResult<R> {
        let depth = self.saved.len();
        self.save();
        let out = f(self);
        self.saved.truncate(depth + 1);
        self.restore();
        out
    }

    /// Run `f` with `local` appended to the current transform, then put the previous transform
    /// back bit-for-bit.
    pub fn with_transform<R>(
        &mut self,
        local: Affine,
        f: impl FnOnce(&mut Self) -> DialpaperResult<R>,
    ) -> DialpaperResult<R> {
        let snapshot = self.state.transform;
        self.state.transform = snapshot * local;
        let out = f(self);
        self.state.transform = snapshot;
        out
    }

    pub fn fill_rect(&mut self, rect: Rect) -> DialpaperResult<()> {
        self.apply_paint()?;
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
        Ok(())
    }

    /// Stroke a full circle (`arc(cx, cy, r, 0, 2π)` then `stroke()`).
    pub fn stroke_circle(&mut self, center: Point, radius: f64) -> DialpaperResult<()> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(DialpaperError::render(format!(
                "circle radius must be finite and >= 0, got {radius}"
            )));
        }
        self.apply_paint()?;
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(self.state.line_width));
        let path = vello_cpu::kurbo::Circle::new((center.x, center.y), radius).to_path(0.1);
        self.ctx.stroke_path(&path);
        Ok(())
    }

    /// Draw a shaped label centered on the current origin (`textAlign = center`,
    /// `textBaseline = middle`). Glyph colors come from the layout's brush.
    pub fn fill_label(&mut self, label: &LabelLayout) {
        let centered = self.state.transform
            * Affine::translate((
                -f64::from(label.width) / 2.0,
                -f64::from(label.height) / 2.0,
            ));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(centered));
        for run in &label.runs {
            let b = run.brush;
            self.ctx
                .set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
            self.ctx
                .glyph_run(&label.font)
                .font_size(run.font_size)
                .fill_glyphs(run.glyphs.iter().copied());
        }
    }

    /// Rasterize everything drawn so far onto the target surface.
    pub fn finish(mut self) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(self.target.pixmap_mut());
    }

    fn apply_paint(&mut self) -> DialpaperResult<()> {
        match &self.state.paint {
            Paint::Solid(c) => {
                self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                self.ctx
                    .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
            }
            Paint::Gradient(g) => {
                // Gradient geometry is in device space; cancel the user transform for the paint.
                let canvas = self.target.canvas();
                let image = gradient_image(g, canvas)?;
                let inverse = if self.state.transform.determinant() != 0.0 {
                    self.state.transform.inverse()
                } else {
                    Affine::IDENTITY
                };
                self.ctx.set_paint_transform(affine_to_cpu(inverse));
                self.ctx.set_paint(image);
            }
        }
        Ok(())
    }
}

fn gradient_image(g: &Gradient, canvas: Canvas) -> DialpaperResult<vello_cpu::Image> {
    let bytes = g.rasterize_premul(canvas.width, canvas.height);
    rgba_premul_to_image(&bytes, canvas)
}

fn rgba_premul_to_image(bytes_premul: &[u8], canvas: Canvas) -> DialpaperResult<vello_cpu::Image> {
    let (w, h) = canvas.as_u16()?;
    if bytes_premul.len() != canvas.pixel_count().saturating_mul(4) {
        return Err(DialpaperError::render("pixmap byte len mismatch"));
    }
    let mut may_have_opacities = false;
    let mut pixels =
        Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(canvas.pixel_count());
    for px in bytes_premul.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
