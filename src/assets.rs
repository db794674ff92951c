use image::RgbaImage;

use crate::{foundation::error::GrimResult, text::TextFont};

pub(crate) mod decode;
pub(crate) mod store;

/// Capabilities the renderer consumes to resolve role data.
///
/// The renderer calls these eagerly at draw time and never caches the results; callers that want
/// memoization do it behind this trait.
pub trait AssetLookup {
    /// Font handle returned by [`AssetLookup::text_font`].
    type Font: TextFont;

    /// Raster image of a role (any size; the renderer resizes).
    fn role_image(&self, role: &str) -> GrimResult<RgbaImage>;

    /// Display name of a role.
    fn role_name(&self, role: &str) -> GrimResult<String>;

    /// Text font at `size` pixels.
    fn text_font(&self, size: u32) -> GrimResult<Self::Font>;
}

/// [`AssetLookup`] assembled from three closures.
pub struct FnAssets<I, N, F> {
    role_image: I,
    role_name: N,
    text_font: F,
}

impl<I, N, F> FnAssets<I, N, F> {
    /// Bundle the three lookups.
    pub fn new(role_image: I, role_name: N, text_font: F) -> Self {
        Self {
            role_image,
            role_name,
            text_font,
        }
    }
}

impl<I, N, F, T> AssetLookup for FnAssets<I, N, F>
where
    I: Fn(&str) -> GrimResult<RgbaImage>,
    N: Fn(&str) -> GrimResult<String>,
    F: Fn(u32) -> GrimResult<T>,
    T: TextFont,
{
    type Font = T;

    fn role_image(&self, role: &str) -> GrimResult<RgbaImage> {
        (self.role_image)(role)
    }

    fn role_name(&self, role: &str) -> GrimResult<String> {
        (self.role_name)(role)
    }

    fn text_font(&self, size: u32) -> GrimResult<T> {
        (self.text_font)(size)
    }
}
