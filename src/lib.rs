//! Grimoire renders the circular seating chart of a social deduction game.
//!
//! Players sit on one circle, seat 0 at the top and numbering clockwise. Each seat is a round
//! token (outline, masked role image and a role name curved along its lower arc), a nameplate with
//! the player's real name, an optional shroud for dead players, and rings of smaller reminder
//! tokens towards the center.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `Grim::plan_seat` turns a [`Player`] into a [`SeatPlan`], an ordered list of
//!    [`DrawOp`]s tagged with the seat part they belong to.
//! 2. **Composite**: [`GrimCanvas`] rasterizes each op into a full-canvas transparent layer
//!    (`vello_cpu` for vector shapes and glyphs, direct pasting for images) and blends it with
//!    premultiplied source-over.
//! 3. **Show**: [`Grim::show`] hands back a [`FrameRGBA`] and clears the canvas, so the same
//!    renderer can draw the storyteller and the public view of one board.
//!
//! Role images, role names and fonts come from an [`AssetLookup`]. The renderer does no I/O of
//! its own; [`DiskAssets`] and [`Session`] load everything from a local directory.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod foundation;
mod grim;
mod model;
mod render;
mod session;
mod text;

pub use assets::decode::{center_on_square, decode_image, shrink_to_fit, shrink_to_fit_size};
pub use assets::store::{DiskAssets, normalize_rel_path};
pub use assets::{AssetLookup, FnAssets};
pub use config::GrimConfig;
pub use foundation::core::{Canvas, IntPos, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{GrimError, GrimResult};
pub use foundation::geometry::{point_on_circle, seat_angle, to_int};
pub use grim::token::{
    NAMEPLATE_FILL, NAMEPLATE_RADIUS, NAMEPLATE_TEXT, TOKEN_FILL, TOKEN_INK, curved_label_ops,
    label_angle, nameplate_ops, nameplate_rect, outline_op, shroud_op, token_image_op,
};
pub use grim::{BASE_FONT_SIZE, Grim, GrimLayout, NAME_CURVE, REMINDER_ADDITIONAL_SCALE};
pub use model::player::{Player, Reminder};
pub use model::roles::{RoleCatalog, RoleInfo, RoleType};
pub use model::script::{CharacterDefinition, Script, ScriptEntry, ScriptMeta, ScriptRole};
pub use render::FrameRGBA;
pub use render::composite::{circle_mask, over, paste_overlay};
pub use render::cpu::GrimCanvas;
pub use render::plan::{DrawOp, Layer, PlannedOp, SeatPlan};
pub use session::{Session, SessionDef};
pub use text::engine::{ParleyFont, TextBrush, TextLayoutEngine};
pub use text::fit::{MAX_FIT_STEPS, fit_text_to_box};
pub use text::{PositionedGlyph, ShapedText, TextBounds, TextFont};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
