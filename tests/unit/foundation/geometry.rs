use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn angle_zero_is_north() {
    let center = Point::new(475.0, 448.5);
    for n in 1..=20 {
        let p = point_on_circle(center, 100.0, seat_angle(0, n));
        assert!(close(p.x, 475.0));
        assert!(close(p.y, 348.5));
    }
}

#[test]
fn angles_increase_clockwise() {
    let center = Point::new(0.0, 0.0);
    let east = point_on_circle(center, 10.0, 90.0);
    assert!(close(east.x, 10.0) && close(east.y, 0.0));
    let south = point_on_circle(center, 10.0, 180.0);
    assert!(close(south.x, 0.0) && close(south.y, 10.0));
    let west = point_on_circle(center, 10.0, 270.0);
    assert!(close(west.x, -10.0) && close(west.y, 0.0));
}

#[test]
fn seats_are_evenly_spaced() {
    for n in 1..=24 {
        let step = 360.0 / n as f64;
        for i in 1..n {
            assert!(close(seat_angle(i, n) - seat_angle(i - 1, n), step));
        }
    }
}

#[test]
fn to_int_truncates_toward_zero() {
    assert_eq!(to_int(Point::new(10.9, 3.2)), IntPos::new(10, 3));
    assert_eq!(to_int(Point::new(-1.5, -0.7)), IntPos::new(-1, 0));
}
