//! Polar placement helpers.
//!
//! Angles are in degrees, measured clockwise from north (the top of the canvas), so seat 0 sits
//! at twelve o'clock and numbering proceeds clockwise.

use crate::foundation::core::{IntPos, Point};

/// Point at `radius` from `center` along `angle_deg` (0 = north, clockwise).
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + radius * rad.sin(), center.y - radius * rad.cos())
}

/// Truncate both components toward zero.
pub fn to_int(p: Point) -> IntPos {
    IntPos::new(p.x as i32, p.y as i32)
}

/// Angle of `seat` when `seat_count` seats share the circle evenly.
pub fn seat_angle(seat: usize, seat_count: usize) -> f64 {
    (360.0 / seat_count as f64) * seat as f64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
