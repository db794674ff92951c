//! Draw ops for a single circular token, its curved label, the nameplate and the shroud.

use std::sync::Arc;

use image::RgbaImage;

use crate::{
    assets::decode::{center_on_square, shrink_to_fit},
    config::GrimConfig,
    foundation::core::{IntPos, Point, Rect, Rgba8, Vec2},
    foundation::error::GrimResult,
    foundation::geometry::{point_on_circle, to_int},
    render::composite::circle_mask,
    render::plan::DrawOp,
    text::{TextFont, fit::fit_text_to_box},
};

/// Token disc fill.
pub const TOKEN_FILL: Rgba8 = Rgba8::from_hex(0xe5e5e5);
/// Token edge and curved label color.
pub const TOKEN_INK: Rgba8 = Rgba8::from_hex(0x0e0e0e);
/// Nameplate fill.
pub const NAMEPLATE_FILL: Rgba8 = Rgba8::from_hex(0x39424b);
/// Nameplate text color.
pub const NAMEPLATE_TEXT: Rgba8 = Rgba8::WHITE;
/// Nameplate corner radius.
pub const NAMEPLATE_RADIUS: f64 = 5.0;

const LABEL_MIN_ANGLE: f64 = 120.0;
const LABEL_MAX_ANGLE: f64 = 240.0;

/// Filled disc of diameter `size` centered at `pos`.
pub fn outline_op(pos: Point, size: u32) -> DrawOp {
    DrawOp::Circle {
        center: pos,
        radius: f64::from(size) / 2.0,
        fill: TOKEN_FILL,
        outline: Some(TOKEN_INK),
    }
}

/// Role image shrunk into the inner three quarters of the token, centered on it and clipped to
/// its circle.
pub fn token_image_op(pos: Point, image: RgbaImage, size: u32) -> DrawOp {
    let padding = size / 4;
    let fitted = shrink_to_fit(image, size - padding, size - padding);
    let padded = center_on_square(&fitted, size);

    let half = f64::from(size) / 2.0;
    DrawOp::Overlay {
        image: Arc::new(padded),
        at: IntPos::new((pos.x - half) as i32, (pos.y - half) as i32),
        mask: Some(Arc::new(circle_mask(size))),
    }
}

/// Angle in degrees of character `index` in an `len`-character curved label.
///
/// Labels hang on the lower arc between 120 and 240 degrees. Later characters get smaller
/// angles so the text reads left to right.
pub fn label_angle(index: usize, len: usize, curve: f64, additional_scale: f64) -> f64 {
    let n = len as f64;
    let offset = (LABEL_MAX_ANGLE - LABEL_MIN_ANGLE - curve * n) / 2.0 + LABEL_MIN_ANGLE
        - n * additional_scale / 2.0;
    let steps = (len - index) as f64;
    offset + steps * curve + steps * additional_scale
}

/// One text op per character of `text`, each centered on its point of the label arc.
pub fn curved_label_ops<F: TextFont>(
    base: &F,
    pos: Point,
    text: &str,
    size: u32,
    curve: f64,
    additional_scale: f64,
) -> GrimResult<Vec<DrawOp>> {
    let font = base.variant((curve * 1.5) as f32)?;
    let radius = f64::from(size) / 2.5;
    let len = text.chars().count();

    let mut ops = Vec::with_capacity(len);
    let mut buf = [0u8; 4];
    for (i, ch) in text.chars().enumerate() {
        let angle = label_angle(i, len, curve, additional_scale);
        let anchor = point_on_circle(pos, radius, angle);
        let run = font.shape(ch.encode_utf8(&mut buf))?;
        let origin = anchor - Vec2::new(run.width / 2.0, run.height / 2.0);
        ops.push(DrawOp::Text {
            run: Arc::new(run),
            origin,
            color: TOKEN_INK,
        });
    }
    Ok(ops)
}

/// Nameplate box under the token at `pos`.
pub fn nameplate_rect(pos: Point, config: &GrimConfig) -> Rect {
    let token = f64::from(config.token_size);
    let padding = f64::from(config.token_padding);
    let px = pos.x - (token / 2.0 - padding / 2.0);
    let py = pos.y + token / 2.0 + padding;
    Rect::new(
        px,
        py,
        px + token - padding,
        py + f64::from(config.nameplate_height),
    )
}

/// Rounded nameplate plus `name` fitted inside it and centered on its ink box.
pub fn nameplate_ops<F: TextFont>(
    base: &F,
    pos: Point,
    name: &str,
    config: &GrimConfig,
) -> GrimResult<Vec<DrawOp>> {
    let rect = nameplate_rect(pos, config);
    let mut ops = vec![DrawOp::RoundedRect {
        rect,
        radius: NAMEPLATE_RADIUS,
        fill: NAMEPLATE_FILL,
    }];

    let font = fit_text_to_box(name, base, rect)?;
    let bounds = font.measure(name)?;
    let h_pad = (rect.width() - bounds.right) / 2.0;
    let v_pad = (rect.height() - bounds.height()) / 2.0;
    ops.push(DrawOp::Text {
        run: Arc::new(font.shape(name)?),
        origin: Point::new(rect.x0 - bounds.left + h_pad, rect.y0 - bounds.top + v_pad),
        color: NAMEPLATE_TEXT,
    });
    Ok(ops)
}

/// Shroud centered horizontally on the seat with its top at the token's top edge.
pub fn shroud_op(shroud: &Arc<RgbaImage>, pos: Point, token_size: u32) -> DrawOp {
    let seat = to_int(pos);
    let x = f64::from(seat.x) - f64::from(shroud.width()) / 2.0;
    let y = f64::from(seat.y) - f64::from(token_size) / 2.0;
    DrawOp::Overlay {
        image: Arc::clone(shroud),
        at: to_int(Point::new(x, y)),
        mask: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grim/token.rs"]
mod tests;
