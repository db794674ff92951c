use crate::foundation::error::GrimResult;

pub(crate) mod engine;
pub(crate) mod fit;

/// Ink bounding box of a string, relative to the top-left origin of its layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBounds {
    /// Leftmost inked column.
    pub left: f64,
    /// Topmost inked row.
    pub top: f64,
    /// One past the rightmost inked column.
    pub right: f64,
    /// One past the bottommost inked row.
    pub bottom: f64,
}

impl TextBounds {
    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Glyph positioned relative to the top-left corner of its line box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedGlyph {
    /// Glyph id in the font.
    pub id: u32,
    /// Horizontal pen position, advances included.
    pub x: f32,
    /// Baseline, below the line box top.
    pub y: f32,
}

/// A single line of text shaped at one size, ready to be painted.
#[derive(Clone, Debug)]
pub struct ShapedText {
    /// Source string.
    pub text: String,
    /// Font the glyph ids refer to.
    pub font: vello_cpu::peniko::FontData,
    /// Size in pixels.
    pub size_px: f32,
    /// Positioned glyphs; empty for blank strings.
    pub glyphs: Vec<PositionedGlyph>,
    /// Layout advance width.
    pub width: f64,
    /// Layout line height.
    pub height: f64,
}

/// Sized font handle handed to the renderer by the `text_font` lookup.
///
/// Implementations produce size variants of themselves, measure ink bounds and shape glyph runs.
/// The renderer only ever asks for variants of the font it was constructed with.
pub trait TextFont: Clone {
    /// Current size in pixels.
    fn size(&self) -> f32;

    /// Same face at another size.
    fn variant(&self, size_px: f32) -> GrimResult<Self>;

    /// Ink bounding box of `text` at this size.
    fn measure(&self, text: &str) -> GrimResult<TextBounds>;

    /// Shape `text` into a single-line glyph run.
    fn shape(&self, text: &str) -> GrimResult<ShapedText>;
}
