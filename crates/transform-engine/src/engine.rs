use plane_types::{Point, TransformSpec};
use tracing::{debug, instrument};

use crate::rotation::{quarter_turns, rotate_about_origin};

/// Compute the points a correct answer must contain.
///
/// A missing transform (or one whose type was not recognized) returns the
/// input unchanged. Output order matches input order.
#[instrument(level = "debug", skip(points), fields(count = points.len()))]
pub fn compute_expected_points(points: &[Point], transform: Option<&TransformSpec>) -> Vec<Point> {
    let Some(transform) = transform else {
        return points.to_vec();
    };

    if let TransformSpec::Rotate { angle, .. } = transform {
        if quarter_turns(*angle).is_none() {
            debug!(angle = *angle, "rotation is not a multiple of 90 degrees; treating as identity");
        }
    }

    points.iter().map(|p| apply_transform(transform, *p)).collect()
}

/// Apply a transform to a single point.
pub fn apply_transform(transform: &TransformSpec, p: Point) -> Point {
    match *transform {
        TransformSpec::Identity | TransformSpec::Unrecognized { .. } => p,
        TransformSpec::ReflectX => Point::new(p.x, -p.y),
        TransformSpec::ReflectY => Point::new(-p.x, p.y),
        TransformSpec::Translate { dx, dy } => Point::new(p.x + dx, p.y + dy),
        TransformSpec::Rotate { angle, pivot } => {
            let local = Point::new(p.x - pivot.x, p.y - pivot.y);
            let turned = rotate_about_origin(local, angle);
            Point::new(turned.x + pivot.x, turned.y + pivot.y)
        }
        TransformSpec::Dilate { factor, pivot } => Point::new(
            pivot.x + factor * (p.x - pivot.x),
            pivot.y + factor * (p.y - pivot.y),
        ),
    }
}
