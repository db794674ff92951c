use crate::foundation::error::{GrimError, GrimResult};

pub use kurbo::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Pixel dimensions of a raster surface.
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting empty surfaces and sizes the CPU rasterizer cannot address.
    pub fn new(width: u32, height: u32) -> GrimResult<Self> {
        if width == 0 || height == 0 {
            return Err(GrimError::validation("canvas dimensions must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(GrimError::validation("canvas dimensions must fit in u16"));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes in an RGBA8 buffer covering this canvas.
    pub fn rgba8_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    pub(crate) fn width_u16(self) -> GrimResult<u16> {
        self.width
            .try_into()
            .map_err(|_| GrimError::render("canvas width exceeds u16"))
    }

    pub(crate) fn height_u16(self) -> GrimResult<u16> {
        self.height
            .try_into()
            .map_err(|_| GrimError::render("canvas height exceeds u16"))
    }
}

/// Integer pixel position, produced by truncating a [`Point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntPos {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl IntPos {
    /// Construct from components.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(0xff, 0xff, 0xff);

    /// Opaque color from its three channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::opaque((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
