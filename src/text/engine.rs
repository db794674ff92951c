use std::{cell::RefCell, rc::Rc, sync::Arc};

use crate::{
    foundation::error::{GrimError, GrimResult},
    text::{PositionedGlyph, ShapedText, TextBounds, TextFont},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Brush carried through Parley layouts. Color is chosen at paint time, so it stays empty.
pub struct TextBrush;

/// Stateful helper for building single-line Parley layouts from registered font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the family name to lay text out with.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> GrimResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| GrimError::asset("no font families registered from font bytes"))?;

        Ok(self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GrimError::asset("registered font family has no name"))?
            .to_string())
    }

    /// Shape and lay out `text` on a single unbroken line.
    pub fn layout_line(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
    ) -> GrimResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(GrimError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// [`TextFont`] backed by one TTF/OTF face, shaped with Parley and measured by rasterizing.
///
/// Size variants share the layout engine, so the face is registered only once.
#[derive(Clone)]
pub struct ParleyFont {
    engine: Rc<RefCell<TextLayoutEngine>>,
    family: Arc<str>,
    data: vello_cpu::peniko::FontData,
    size_px: f32,
}

impl std::fmt::Debug for ParleyFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyFont")
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl ParleyFont {
    /// Load a face from raw font file bytes.
    pub fn from_bytes(font_bytes: Vec<u8>, size_px: f32) -> GrimResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let family = engine.register_font(&font_bytes)?;
        let data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            engine: Rc::new(RefCell::new(engine)),
            family: Arc::from(family),
            data,
            size_px,
        })
    }

    /// Family name Parley resolved from the font data.
    pub fn family(&self) -> &str {
        &self.family
    }
}

impl TextFont for ParleyFont {
    fn size(&self) -> f32 {
        self.size_px
    }

    fn variant(&self, size_px: f32) -> GrimResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(GrimError::validation(format!(
                "invalid font size {size_px}"
            )));
        }
        Ok(Self {
            size_px,
            ..self.clone()
        })
    }

    fn measure(&self, text: &str) -> GrimResult<TextBounds> {
        let shaped = self.shape(text)?;
        crate::render::cpu::ink_bounds(&shaped)
    }

    fn shape(&self, text: &str) -> GrimResult<ShapedText> {
        let layout = self
            .engine
            .borrow_mut()
            .layout_line(text, &self.family, self.size_px)?;

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| PositionedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }

        Ok(ShapedText {
            text: text.to_string(),
            font: self.data.clone(),
            size_px: self.size_px,
            glyphs,
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
