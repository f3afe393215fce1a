//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail instead of
//! panicking, so a test can collect every failure in one pass.

use grading::{order_student_points, validate_submission};
use graph_render::{Layer, Scene};
use plane_types::{Point, TransformSpec};
use transform_engine::{apply_transform, to_affine};

use crate::assertions::format_points;

/// Closed-form and matrix results may differ by rounding only.
pub const AFFINE_TOL: f64 = 1e-9;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Transform Oracles ───────────────────────────────────────────────────────

/// The closed-form transform agrees with its homogeneous matrix on every
/// point.
pub fn check_matches_affine(transform: &TransformSpec, points: &[Point]) -> OracleVerdict {
    let name = "matches_affine";
    let matrix = to_affine(transform);
    for p in points {
        let closed = apply_transform(transform, *p);
        let via_matrix = matrix.transform_point(*p);
        let err = (closed.x - via_matrix.x).abs().max((closed.y - via_matrix.y).abs());
        if err > AFFINE_TOL {
            return OracleVerdict::fail_val(
                name,
                format!(
                    "{} at ({}, {}): closed form ({}, {}), matrix ({}, {})",
                    transform.kind_name(),
                    p.x,
                    p.y,
                    closed.x,
                    closed.y,
                    via_matrix.x,
                    via_matrix.y
                ),
                err,
            );
        }
    }
    OracleVerdict::pass(
        name,
        format!("{} agrees on {} points", transform.kind_name(), points.len()),
    )
}

/// Applying the transform twice returns every point to where it started.
pub fn check_involution(transform: &TransformSpec, points: &[Point]) -> OracleVerdict {
    let name = "involution";
    for p in points {
        let twice = apply_transform(transform, apply_transform(transform, *p));
        if twice != *p {
            return OracleVerdict::fail(
                name,
                format!(
                    "{} twice maps ({}, {}) to ({}, {})",
                    transform.kind_name(),
                    p.x,
                    p.y,
                    twice.x,
                    twice.y
                ),
            );
        }
    }
    OracleVerdict::pass(name, format!("{} is its own inverse", transform.kind_name()))
}

// ── Grading Oracles ─────────────────────────────────────────────────────────

/// Ordering plotted points keeps exactly the same multiset.
pub fn check_ordering_is_permutation(expected: &[Point], student: &[Point]) -> OracleVerdict {
    let name = "ordering_is_permutation";
    let ordered = order_student_points(expected, student);
    let mut remaining = student.to_vec();
    for p in &ordered {
        match remaining.iter().position(|q| q == p) {
            Some(i) => {
                remaining.remove(i);
            }
            None => {
                return OracleVerdict::fail(
                    name,
                    format!("({}, {}) appeared from nowhere in {}", p.x, p.y, format_points(&ordered)),
                )
            }
        }
    }
    if remaining.is_empty() && ordered.len() == student.len() {
        OracleVerdict::pass(name, format!("{} points reordered", student.len()))
    } else {
        OracleVerdict::fail(name, format!("lost points {}", format_points(&remaining)))
    }
}

/// The verdict does not depend on the order points were plotted in.
pub fn check_verdict_order_invariant(expected: &[Point], student: &[Point]) -> OracleVerdict {
    let name = "verdict_order_invariant";
    let forward = validate_submission(expected, student);
    let mut reversed = student.to_vec();
    reversed.reverse();
    let backward = validate_submission(expected, &reversed);
    if forward == backward {
        OracleVerdict::pass(name, format!("both orders: {}", forward.message))
    } else {
        OracleVerdict::fail(
            name,
            format!("forward: {}, reversed: {}", forward.message, backward.message),
        )
    }
}

// ── Scene Oracles ───────────────────────────────────────────────────────────

/// A layer holds one marker per point.
pub fn check_marker_count(scene: &Scene, layer: Layer, expected: usize) -> OracleVerdict {
    let name = "marker_count";
    let actual = scene.markers(layer).len();
    if actual == expected {
        OracleVerdict::pass(name, format!("{:?}: {} markers", layer, actual))
    } else {
        OracleVerdict::fail_val(
            name,
            format!("{:?}: expected {} markers, found {}", layer, expected, actual),
            actual as f64,
        )
    }
}

/// Every tag in the markup is closed and there is one root `<svg>`.
pub fn check_svg_balanced(svg: &str) -> OracleVerdict {
    let name = "svg_balanced";
    if !svg.starts_with("<svg") || !svg.ends_with("</svg>") {
        return OracleVerdict::fail(name, "markup is not a single <svg> root".to_string());
    }
    if svg.matches("<svg").count() != 1 {
        return OracleVerdict::fail(name, "nested <svg> elements".to_string());
    }

    let mut depth: i64 = 0;
    for tag in svg.split('<').skip(1) {
        let Some(end) = tag.find('>') else {
            return OracleVerdict::fail(name, format!("unterminated tag <{}", tag));
        };
        let body = &tag[..end];
        if body.starts_with('/') {
            depth -= 1;
        } else if !body.ends_with('/') {
            depth += 1;
        }
        if depth < 0 {
            return OracleVerdict::fail(name, format!("stray closing tag <{}>", body));
        }
    }

    if depth == 0 {
        OracleVerdict::pass(name, "all tags closed".to_string())
    } else {
        OracleVerdict::fail_val(name, format!("{} unclosed tags", depth), depth as f64)
    }
}

/// Run every transform oracle that applies to `transform`.
pub fn run_transform_checks(transform: &TransformSpec, points: &[Point]) -> Vec<OracleVerdict> {
    let mut verdicts = vec![check_matches_affine(transform, points)];
    if matches!(transform, TransformSpec::ReflectX | TransformSpec::ReflectY) {
        verdicts.push(check_involution(transform, points));
    }
    verdicts
}
