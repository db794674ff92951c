use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::GrimResult;

/// Decode encoded image bytes (PNG, WebP, JPEG, ...) into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> GrimResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Dimensions that fit `(w, h)` inside `(max_w, max_h)` keeping the aspect ratio.
///
/// Images that already fit keep their size; nothing is ever enlarged.
pub fn shrink_to_fit_size(w: u32, h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if w <= max_w && h <= max_h {
        return (w, h);
    }
    let scale = (f64::from(max_w) / f64::from(w)).min(f64::from(max_h) / f64::from(h));
    let nw = (f64::from(w) * scale).round().clamp(1.0, f64::from(max_w.max(1)));
    let nh = (f64::from(h) * scale).round().clamp(1.0, f64::from(max_h.max(1)));
    (nw as u32, nh as u32)
}

/// Shrink `img` to fit inside `max_w x max_h`, keeping aspect ratio.
pub fn shrink_to_fit(img: RgbaImage, max_w: u32, max_h: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let (nw, nh) = shrink_to_fit_size(w, h, max_w, max_h);
    if (nw, nh) == (w, h) {
        return img;
    }
    image::imageops::resize(&img, nw, nh, image::imageops::FilterType::CatmullRom)
}

/// Center `img` on a transparent `side x side` square; anything larger is cropped evenly.
pub fn center_on_square(img: &RgbaImage, side: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let mut out = RgbaImage::new(side, side);
    let x = (i64::from(side) - i64::from(w)) / 2;
    let y = (i64::from(side) - i64::from(h)) / 2;
    image::imageops::replace(&mut out, img, x, y);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
