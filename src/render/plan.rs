use std::sync::Arc;

use image::{GrayImage, RgbaImage};

use crate::{
    foundation::core::{IntPos, Point, Rect, Rgba8},
    text::ShapedText,
};

#[derive(Clone, Debug)]
/// One compositing step. Each op is rasterized into its own full-canvas layer and blended
/// over the canvas with source-over, in list order.
pub enum DrawOp {
    /// Filled circle with an optional 1px outline drawn just inside its edge.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill color.
        fill: Rgba8,
        /// Outline color.
        outline: Option<Rgba8>,
    },
    /// Filled rounded rectangle without border.
    RoundedRect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill color.
        fill: Rgba8,
    },
    /// Glyph run whose layout top-left lands on `origin`.
    Text {
        /// Shaped glyphs.
        run: Arc<ShapedText>,
        /// Top-left of the line box.
        origin: Point,
        /// Paint color.
        color: Rgba8,
    },
    /// Straight-alpha image pasted at an integer offset, optionally through an 8-bit mask.
    Overlay {
        /// Source pixels.
        image: Arc<RgbaImage>,
        /// Top-left paste offset.
        at: IntPos,
        /// Coverage mask in image coordinates.
        mask: Option<Arc<GrayImage>>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Which part of a seat an op belongs to.
pub enum Layer {
    /// Seat token base circle.
    Outline,
    /// Masked role image.
    RoleImage,
    /// Curved role name.
    RoleLabel,
    /// Death shroud.
    Shroud,
    /// Nameplate box and player name.
    Nameplate,
    /// Reminder token at the given ring depth (outline, icon and label).
    Reminder(usize),
}

#[derive(Clone, Debug)]
/// A [`DrawOp`] tagged with its [`Layer`].
pub struct PlannedOp {
    /// Seat part.
    pub layer: Layer,
    /// Drawing step.
    pub op: DrawOp,
}

#[derive(Clone, Debug)]
/// Everything one seat contributes to the canvas, in draw order.
pub struct SeatPlan {
    /// Seat index.
    pub seat: usize,
    /// Seat angle in degrees (0 = north, clockwise).
    pub angle: f64,
    /// Seat token center.
    pub position: Point,
    /// Ordered ops.
    pub ops: Vec<PlannedOp>,
}

impl SeatPlan {
    pub(crate) fn new(seat: usize, angle: f64, position: Point) -> Self {
        Self {
            seat,
            angle,
            position,
            ops: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, layer: Layer, op: DrawOp) {
        self.ops.push(PlannedOp { layer, op });
    }

    pub(crate) fn extend(&mut self, layer: Layer, ops: impl IntoIterator<Item = DrawOp>) {
        self.ops
            .extend(ops.into_iter().map(|op| PlannedOp { layer, op }));
    }

    /// Layers in draw order with consecutive duplicates collapsed.
    pub fn layers(&self) -> Vec<Layer> {
        let mut out: Vec<Layer> = Vec::new();
        for op in &self.ops {
            if out.last() != Some(&op.layer) {
                out.push(op.layer);
            }
        }
        out
    }

    /// Ops belonging to `layer`.
    pub fn ops_in(&self, layer: Layer) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(move |op| op.layer == layer)
            .map(|op| &op.op)
    }
}
