use image::{GrayImage, Luma, RgbaImage};

use crate::foundation::{
    core::{Canvas, IntPos},
    error::{GrimError, GrimResult},
    math::mul_div255_u8,
};

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Blend `src` over `dst` pixel by pixel; both are premultiplied RGBA8 buffers of one size.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> GrimResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(GrimError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Full-canvas transparent premultiplied layer holding `src` pasted at `at`.
///
/// Pixels falling outside the canvas are dropped. With a mask, each source pixel's coverage is
/// scaled by the mask value at the same image coordinate; source pixels outside the mask are
/// dropped.
pub fn paste_overlay(
    canvas: Canvas,
    src: &RgbaImage,
    at: IntPos,
    mask: Option<&GrayImage>,
) -> Vec<u8> {
    let mut layer = vec![0u8; canvas.rgba8_len()];
    let (cw, ch) = (i64::from(canvas.width), i64::from(canvas.height));

    for (sx, sy, px) in src.enumerate_pixels() {
        let dx = i64::from(at.x) + i64::from(sx);
        let dy = i64::from(at.y) + i64::from(sy);
        if dx < 0 || dy < 0 || dx >= cw || dy >= ch {
            continue;
        }

        let coverage = match mask {
            Some(m) => m.get_pixel_checked(sx, sy).map_or(0, |p| p.0[0]),
            None => 255,
        };
        let a = mul_div255_u8(u16::from(px.0[3]), u16::from(coverage));
        if a == 0 {
            continue;
        }

        let idx = ((dy * cw + dx) * 4) as usize;
        layer[idx] = mul_div255_u8(u16::from(px.0[0]), u16::from(a));
        layer[idx + 1] = mul_div255_u8(u16::from(px.0[1]), u16::from(a));
        layer[idx + 2] = mul_div255_u8(u16::from(px.0[2]), u16::from(a));
        layer[idx + 3] = a;
    }
    layer
}

/// Square 8-bit mask with a filled circle of diameter `size` (255 inside, 0 outside).
pub fn circle_mask(size: u32) -> GrayImage {
    let r = f64::from(size) / 2.0;
    GrayImage::from_fn(size, size, |x, y| {
        let dx = f64::from(x) + 0.5 - r;
        let dy = f64::from(y) + 0.5 - r;
        if dx * dx + dy * dy <= r * r {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
