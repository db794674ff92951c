use crate::{
    config::GrimConfig,
    foundation::core::Point,
    foundation::geometry::{point_on_circle, seat_angle},
};

/// Seat circle and reminder rings derived from a [`GrimConfig`].
///
/// Seats sit on one circle of `inner_radius` around `center`. The top and bottom of the canvas
/// keep room for half a token above the top seat and a nameplate under the bottom seat.
/// Reminder rings share the seat angles but use a center pushed down by half a nameplate, so
/// the ring under the top seat clears its nameplate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrimLayout {
    center: Point,
    inner_radius: f64,
    reminder_center: Point,
    reminder_base_radius: f64,
    reminder_step: f64,
}

impl GrimLayout {
    /// Derive the layout. `config` is expected to be validated.
    pub fn new(config: &GrimConfig) -> Self {
        let token = f64::from(config.token_size);
        let padding = f64::from(config.token_padding);
        let nameplate = f64::from(config.nameplate_height);

        let top = token / 2.0;
        let plate = nameplate + padding + 1.0;
        let bottom = f64::from(config.height) - top - plate;
        let inner_height = bottom - top;

        let center = Point::new(f64::from(config.width) / 2.0, top + inner_height / 2.0);
        let inner_radius = inner_height / 2.0;

        Self {
            center,
            inner_radius,
            reminder_center: Point::new(center.x, center.y + nameplate / 2.0 + padding / 2.0),
            reminder_base_radius: inner_radius - token,
            reminder_step: padding + f64::from(config.reminder_size),
        }
    }

    /// Center of the seat circle.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the seat circle.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Center shared by every reminder ring.
    pub fn reminder_center(&self) -> Point {
        self.reminder_center
    }

    /// Radius of the outermost reminder ring.
    pub fn reminder_base_radius(&self) -> f64 {
        self.reminder_base_radius
    }

    /// Radius of the reminder ring at `depth` (0 is outermost).
    ///
    /// Not clamped: enough reminders drive it below zero.
    pub fn reminder_radius(&self, depth: usize) -> f64 {
        self.reminder_base_radius - depth as f64 * self.reminder_step
    }

    /// Angle and token center of `seat` out of `seat_count`.
    pub fn seat_position(&self, seat: usize, seat_count: usize) -> (f64, Point) {
        let angle = seat_angle(seat, seat_count);
        (angle, point_on_circle(self.center, self.inner_radius, angle))
    }

    /// Center of the reminder at `depth` for a seat at `angle`.
    pub fn reminder_position(&self, angle: f64, depth: usize) -> Point {
        point_on_circle(self.reminder_center, self.reminder_radius(depth), angle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grim/layout.rs"]
mod tests;
