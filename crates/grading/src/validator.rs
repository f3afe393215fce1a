use plane_types::Point;
use tracing::debug;

use crate::verdict::Verdict;

/// Allowed per-axis difference between an expected and a plotted point.
/// Plotted points are snapped to integers, so matching is exact.
pub const TOLERANCE: f64 = 0.0;

pub fn points_match(a: &Point, b: &Point) -> bool {
    (a.x - b.x).abs() <= TOLERANCE && (a.y - b.y).abs() <= TOLERANCE
}

/// Check a learner's points against the expected points, ignoring order.
///
/// Matching is greedy: each expected point claims the first unclaimed
/// student point equal to it. Exact equality makes equal points
/// interchangeable, so greedy claiming finds a full match whenever one
/// exists.
pub fn validate_submission(expected: &[Point], student: &[Point]) -> Verdict {
    if student.len() != expected.len() {
        return Verdict::wrong_count(expected.len());
    }

    let mut unmatched: Vec<Point> = student.to_vec();
    for exp in expected {
        match unmatched.iter().position(|stu| points_match(exp, stu)) {
            Some(index) => {
                unmatched.remove(index);
            }
            None => {
                debug!(x = exp.x, y = exp.y, "expected point has no match");
                return Verdict::incorrect();
            }
        }
    }

    Verdict::correct()
}
