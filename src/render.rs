use std::path::Path;

use anyhow::Context;

use crate::foundation::{error::GrimResult, math::unpremul_u8};

pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod plan;

/// A materialized canvas.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub data: Vec<u8>,
    /// Whether `data` holds premultiplied color.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha image suitable for encoding.
    pub fn to_rgba_image(&self) -> GrimResult<image::RgbaImage> {
        let mut data = self.data.clone();
        if self.premultiplied {
            for px in data.chunks_exact_mut(4) {
                let a = px[3];
                px[0] = unpremul_u8(px[0], a);
                px[1] = unpremul_u8(px[1], a);
                px[2] = unpremul_u8(px[2], a);
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, data).ok_or_else(|| {
            crate::GrimError::render("frame byte length does not match its dimensions")
        })
    }

    /// Encode as PNG at `path`, creating parent directories.
    pub fn save_png(&self, path: &Path) -> GrimResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let img = self.to_rgba_image()?;
        image::save_buffer_with_format(
            path,
            img.as_raw(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }
}

#[cfg(test)]
#[path = "../tests/unit/render/frame.rs"]
mod tests;
