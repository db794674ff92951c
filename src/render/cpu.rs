use vello_cpu::kurbo::Shape;

use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::{GrimError, GrimResult},
    render::{
        FrameRGBA,
        composite::{over_in_place, paste_overlay},
        plan::{DrawOp, PlannedOp},
    },
    text::{ShapedText, TextBounds},
};

const SHAPE_TOLERANCE: f64 = 0.1;

/// The renderer's raster: a premultiplied RGBA8 pixmap that layers are composited onto.
pub struct GrimCanvas {
    canvas: Canvas,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for GrimCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrimCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl GrimCanvas {
    /// Fully transparent canvas of the given size.
    pub fn new(canvas: Canvas) -> GrimResult<Self> {
        let width = canvas.width_u16()?;
        let height = canvas.height_u16()?;
        Ok(Self {
            canvas,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Canvas dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Premultiplied pixel bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = (y as usize * self.canvas.width as usize + x as usize) * 4;
        let d = self.data();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Composite `ops` in order.
    pub fn execute(&mut self, ops: &[PlannedOp]) -> GrimResult<()> {
        for planned in ops {
            self.draw(&planned.op)?;
        }
        Ok(())
    }

    /// Rasterize one op into a transparent layer and blend it over the canvas.
    pub fn draw(&mut self, op: &DrawOp) -> GrimResult<()> {
        let layer = match op {
            DrawOp::Overlay { image, at, mask } => {
                paste_overlay(self.canvas, image, *at, mask.as_deref())
            }
            DrawOp::Text { run, .. } if run.glyphs.is_empty() => return Ok(()),
            vector => self.rasterize(vector)?,
        };
        over_in_place(self.pixmap.data_as_u8_slice_mut(), &layer)
    }

    /// Reset every pixel to fully transparent; dimensions are kept.
    pub fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    /// Copy of the current pixels.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn rasterize(&self, op: &DrawOp) -> GrimResult<Vec<u8>> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::Circle {
                center,
                radius,
                fill,
                outline,
            } => {
                let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), *radius);
                ctx.set_paint(color_to_cpu(*fill));
                ctx.fill_path(&circle.to_path(SHAPE_TOLERANCE));
                if let Some(outline) = outline {
                    let edge = vello_cpu::kurbo::Circle::new(
                        point_to_cpu(*center),
                        (*radius - 0.5).max(0.0),
                    );
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(1.0));
                    ctx.set_paint(color_to_cpu(*outline));
                    ctx.stroke_path(&edge.to_path(SHAPE_TOLERANCE));
                }
            }
            DrawOp::RoundedRect { rect, radius, fill } => {
                let shape = vello_cpu::kurbo::RoundedRect::new(
                    rect.x0, rect.y0, rect.x1, rect.y1, *radius,
                );
                ctx.set_paint(color_to_cpu(*fill));
                ctx.fill_path(&shape.to_path(SHAPE_TOLERANCE));
            }
            DrawOp::Text { run, origin, color } => {
                ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
                ctx.set_paint(color_to_cpu(*color));
                fill_glyphs(&mut ctx, run);
            }
            DrawOp::Overlay { .. } => {
                return Err(GrimError::render("overlays are pasted, not rasterized"));
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        Ok(pixmap.data_as_u8_slice().to_vec())
    }
}

fn fill_glyphs(ctx: &mut vello_cpu::RenderContext, run: &ShapedText) {
    let glyphs = run.glyphs.iter().map(|g| vello_cpu::Glyph {
        id: g.id,
        x: g.x,
        y: g.y,
    });
    ctx.glyph_run(&run.font)
        .font_size(run.size_px)
        .fill_glyphs(glyphs);
}

/// Ink bounds of a shaped run, found by rasterizing it and scanning coverage.
pub(crate) fn ink_bounds(run: &ShapedText) -> GrimResult<TextBounds> {
    if run.glyphs.is_empty() {
        return Ok(TextBounds::default());
    }

    // Glyphs may overhang the advance box (italic tails, accents).
    let pad = f64::from(run.size_px).ceil().max(4.0);
    let w = run.width.max(0.0).ceil() + 2.0 * pad;
    let h = run.height.max(0.0).ceil() + 2.0 * pad;
    if w > f64::from(u16::MAX) || h > f64::from(u16::MAX) {
        return Err(GrimError::render("text run too large to measure"));
    }
    let (w, h) = (w as u16, h as u16);

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((pad, pad)));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
    fill_glyphs(&mut ctx, run);
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    let mut min = (usize::MAX, usize::MAX);
    let mut max = (0usize, 0usize);
    let stride = usize::from(w);
    for (i, px) in pixmap.data_as_u8_slice().chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let (x, y) = (i % stride, i / stride);
        min = (min.0.min(x), min.1.min(y));
        max = (max.0.max(x), max.1.max(y));
    }

    if min.0 == usize::MAX {
        return Ok(TextBounds::default());
    }
    Ok(TextBounds {
        left: min.0 as f64 - pad,
        top: min.1 as f64 - pad,
        right: (max.0 + 1) as f64 - pad,
        bottom: (max.1 + 1) as f64 - pad,
    })
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
