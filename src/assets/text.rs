use std::borrow::Cow;
use std::path::Path;

use crate::assets::color::ColorValue;
use crate::foundation::error::{DialpaperError, DialpaperResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<ColorValue> for TextBrushRgba8 {
    fn from(c: ColorValue) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// How a single label is shaped: the `font` shorthand of a 2D canvas reduced to what the
/// numerals need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub size_px: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: ColorValue,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            size_px: 25.0,
            bold: false,
            italic: false,
            color: ColorValue::BLACK,
        }
    }
}

pub(crate) struct GlyphRunData {
    pub(crate) font_size: f32,
    pub(crate) brush: TextBrushRgba8,
    pub(crate) glyphs: Vec<vello_cpu::Glyph>,
}

/// A shaped single-line label, positioned with its top-left corner at the origin.
pub struct LabelLayout {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) font: vello_cpu::peniko::FontData,
    pub(crate) runs: Vec<GlyphRunData>,
}

impl LabelLayout {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn glyph_count(&self) -> usize {
        self.runs.iter().map(|r| r.glyphs.len()).sum()
    }
}

struct LoadedFont {
    family_name: String,
    data: vello_cpu::peniko::FontData,
}

/// Stateful helper for shaping labels with Parley from one registered font file.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    font: Option<LoadedFont>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct an engine with fresh Parley contexts and no font.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            font: None,
        }
    }

    pub fn with_font_bytes(font_bytes: Vec<u8>) -> DialpaperResult<Self> {
        let mut engine = Self::new();
        engine.load_font(font_bytes)?;
        Ok(engine)
    }

    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> DialpaperResult<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            DialpaperError::validation(format!("failed to read font '{}': {e}", path.display()))
        })?;
        self.load_font(bytes)
    }

    /// Register font bytes and make them the face used by [`Self::layout_label`].
    pub fn load_font(&mut self, font_bytes: Vec<u8>) -> DialpaperResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            DialpaperError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| DialpaperError::validation("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        tracing::debug!(family = %family_name, "registered label font");
        self.font = Some(LoadedFont { family_name, data });
        Ok(())
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn family_name(&self) -> Option<&str> {
        self.font.as_ref().map(|f| f.family_name.as_str())
    }

    /// Shape `text` on a single unbounded line.
    pub fn layout_label(&mut self, text: &str, style: &LabelStyle) -> DialpaperResult<LabelLayout> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(DialpaperError::validation(
                "label size_px must be finite and > 0",
            ));
        }
        let font = self.font.as_ref().ok_or(DialpaperError::MissingFont)?;

        let weight = if style.bold {
            parley::style::FontWeight::new(900.0)
        } else {
            parley::style::FontWeight::NORMAL
        };
        let font_style = if style.italic {
            parley::style::FontStyle::Italic
        } else {
            parley::style::FontStyle::Normal
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(font.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(font_style));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::from(
            style.color,
        )));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let mut runs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Line-relative positions: pen offset and baseline included.
                let glyphs = run
                    .positioned_glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                    .collect();
                runs.push(GlyphRunData {
                    font_size: run.run().font_size(),
                    brush: run.style().brush,
                    glyphs,
                });
            }
        }

        Ok(LabelLayout {
            width: layout.width(),
            height: layout.height(),
            font: font.data.clone(),
            runs,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
