use plane_types::Point;

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Number of counter-clockwise quarter turns an angle represents.
///
/// Only exact multiples of 90 degrees count; any other angle (including
/// NaN) yields `None`.
pub fn quarter_turns(angle: f64) -> Option<u8> {
    let a = normalize_degrees(angle);
    if a == 0.0 {
        Some(0)
    } else if a == 90.0 {
        Some(1)
    } else if a == 180.0 {
        Some(2)
    } else if a == 270.0 {
        Some(3)
    } else {
        None
    }
}

/// Rotate about the origin by a quarter-turn angle. Other angles leave the
/// point unchanged.
pub fn rotate_about_origin(p: Point, angle: f64) -> Point {
    match quarter_turns(angle) {
        Some(1) => Point::new(-p.y, p.x),
        Some(2) => Point::new(-p.x, -p.y),
        Some(3) => Point::new(p.y, -p.x),
        _ => p,
    }
}
