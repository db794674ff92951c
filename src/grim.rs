use std::sync::Arc;

use image::RgbaImage;

use crate::{
    assets::{AssetLookup, decode::shrink_to_fit},
    config::GrimConfig,
    foundation::error::{GrimError, GrimResult},
    model::player::Player,
    render::{
        FrameRGBA,
        cpu::GrimCanvas,
        plan::{Layer, SeatPlan},
    },
    text::TextFont,
};

pub(crate) mod layout;
pub(crate) mod token;

pub use layout::GrimLayout;

/// Size of the font every other size is derived from.
pub const BASE_FONT_SIZE: u32 = 12;
/// Degrees of arc per character of a curved label.
pub const NAME_CURVE: f64 = 10.0;
/// Extra per-character spread of reminder labels.
pub const REMINDER_ADDITIONAL_SCALE: f64 = 8.0;

/// Circular grimoire renderer.
///
/// Owns the canvas and the asset lookups for one rendering session. Seats are drawn one at a
/// time onto the canvas; [`Grim::show`] hands back the accumulated frame and clears the canvas so
/// the same instance can render another view of the board.
pub struct Grim<A: AssetLookup> {
    config: GrimConfig,
    layout: GrimLayout,
    seats: usize,
    shroud: Arc<RgbaImage>,
    font: A::Font,
    assets: A,
    canvas: GrimCanvas,
}

impl<A: AssetLookup> std::fmt::Debug for Grim<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grim")
            .field("config", &self.config)
            .field("seats", &self.seats)
            .field("shroud", &self.shroud.dimensions())
            .finish()
    }
}

impl<A: AssetLookup> Grim<A> {
    /// Build a renderer for `seats` seats.
    ///
    /// The shroud is shrunk to half a token once here. The base font is looked up once at
    /// [`BASE_FONT_SIZE`]; every other font is a size variant of it.
    pub fn new(seats: usize, shroud: RgbaImage, assets: A, config: GrimConfig) -> GrimResult<Self> {
        config.validate()?;
        if seats == 0 {
            return Err(GrimError::validation("a grimoire needs at least one seat"));
        }

        let half = config.token_size / 2;
        let shroud = shrink_to_fit(shroud, half.max(1), half.max(1));
        let font = assets.text_font(BASE_FONT_SIZE)?;
        let canvas = GrimCanvas::new(config.canvas()?)?;

        tracing::debug!(
            seats,
            width = config.width,
            height = config.height,
            "grimoire renderer ready"
        );

        Ok(Self {
            layout: GrimLayout::new(&config),
            config,
            seats,
            shroud: Arc::new(shroud),
            font,
            assets,
            canvas,
        })
    }

    /// Fixed sizing.
    pub fn config(&self) -> &GrimConfig {
        &self.config
    }

    /// Seat circle and reminder rings.
    pub fn layout(&self) -> &GrimLayout {
        &self.layout
    }

    /// Number of seats around the circle.
    pub fn seats(&self) -> usize {
        self.seats
    }

    /// The raster being drawn on.
    pub fn canvas(&self) -> &GrimCanvas {
        &self.canvas
    }

    /// Size of the base font labels and nameplates are derived from.
    pub fn base_font_size(&self) -> f32 {
        self.font.size()
    }

    /// Asset lookups this renderer draws with.
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Work out everything `player` contributes at `seat` without touching the canvas.
    ///
    /// Layers come out in draw order: outline, role image and label (visible players or grim
    /// access), shroud (dead players), nameplate, then one reminder group per reminder (grim
    /// access only).
    pub fn plan_seat(&self, seat: usize, player: &Player, grim_access: bool) -> GrimResult<SeatPlan> {
        if seat >= self.seats {
            return Err(GrimError::validation(format!(
                "seat {seat} out of range for {} seats",
                self.seats
            )));
        }

        let token_size = self.config.token_size;
        let (angle, pos) = self.layout.seat_position(seat, self.seats);
        let mut plan = SeatPlan::new(seat, angle, pos);

        plan.push(Layer::Outline, token::outline_op(pos, token_size));

        if player.visible || grim_access {
            let image = self.assets.role_image(&player.role)?;
            plan.push(Layer::RoleImage, token::token_image_op(pos, image, token_size));
            let name = self.assets.role_name(&player.role)?;
            plan.extend(
                Layer::RoleLabel,
                token::curved_label_ops(&self.font, pos, &name, token_size, NAME_CURVE, 0.0)?,
            );
        }

        if player.dead {
            plan.push(Layer::Shroud, token::shroud_op(&self.shroud, pos, token_size));
        }

        plan.extend(
            Layer::Nameplate,
            token::nameplate_ops(&self.font, pos, &player.name, &self.config)?,
        );

        if grim_access {
            let size = self.config.reminder_size;
            for (depth, reminder) in player.reminders.iter().enumerate() {
                let p = self.layout.reminder_position(angle, depth);
                let layer = Layer::Reminder(depth);
                plan.push(layer, token::outline_op(p, size));
                if let Some(icon) = &reminder.icon {
                    let image = self.assets.role_image(icon)?;
                    plan.push(layer, token::token_image_op(p, image, size));
                }
                plan.extend(
                    layer,
                    token::curved_label_ops(
                        &self.font,
                        p,
                        &reminder.label,
                        size,
                        NAME_CURVE,
                        REMINDER_ADDITIONAL_SCALE,
                    )?,
                );
            }
        }

        Ok(plan)
    }

    /// Plan and composite one seat.
    ///
    /// The seat is planned in full before anything is drawn, so a failing lookup leaves the
    /// canvas as it was.
    #[tracing::instrument(skip(self, player), fields(player = %player.name))]
    pub fn draw_seat(&mut self, seat: usize, player: &Player, grim_access: bool) -> GrimResult<()> {
        let plan = self.plan_seat(seat, player, grim_access)?;
        tracing::trace!(ops = plan.ops.len(), layers = ?plan.layers(), "seat planned");
        self.canvas.execute(&plan.ops)
    }

    /// Draw every player at the seat matching their index.
    #[tracing::instrument(skip(self, players))]
    pub fn draw_board(&mut self, players: &[Player], grim_access: bool) -> GrimResult<()> {
        if players.len() != self.seats {
            return Err(GrimError::validation(format!(
                "{} players for {} seats",
                players.len(),
                self.seats
            )));
        }
        for (seat, player) in players.iter().enumerate() {
            self.draw_seat(seat, player, grim_access)?;
        }
        Ok(())
    }

    /// Current frame, without clearing.
    pub fn frame(&self) -> FrameRGBA {
        self.canvas.snapshot()
    }

    /// Hand back the accumulated frame and clear the canvas for the next pass.
    pub fn show(&mut self) -> FrameRGBA {
        let frame = self.canvas.snapshot();
        self.clear();
        frame
    }

    /// Reset the canvas to fully transparent.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Render the storyteller view (grim access) then the public view of the same board.
    ///
    /// Returns `(full, public)`.
    pub fn render_views(&mut self, players: &[Player]) -> GrimResult<(FrameRGBA, FrameRGBA)> {
        self.clear();
        self.draw_board(players, true)?;
        let full = self.show();
        self.draw_board(players, false)?;
        let public = self.show();
        Ok((full, public))
    }
}

#[cfg(test)]
#[path = "../tests/unit/grim.rs"]
mod tests;
