//! Assertion helpers with diagnostic output.
//!
//! Failures name the context and list both point sets.

use plane_types::Point;

use crate::errors::HarnessError;
use crate::oracle::OracleVerdict;

/// Assert two point lists are equal, in order.
pub fn assert_points_eq(actual: &[Point], expected: &[Point], ctx: &str) -> Result<(), HarnessError> {
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {}, got {}",
                ctx,
                format_points(expected),
                format_points(actual)
            ),
        })
    }
}

/// Assert two point lists agree coordinate-wise within `tol`.
pub fn assert_points_approx(
    actual: &[Point],
    expected: &[Point],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if actual.len() != expected.len() {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} points, got {}",
                ctx,
                expected.len(),
                actual.len()
            ),
        });
    }
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if (a.x - e.x).abs() > tol || (a.y - e.y).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] point {}: expected ({}, {}), got ({}, {}) (tol={})",
                    ctx, i, e.x, e.y, a.x, a.y, tol
                ),
            });
        }
    }
    Ok(())
}

/// Assert the same points appear in both lists, ignoring order.
pub fn assert_same_points(actual: &[Point], expected: &[Point], ctx: &str) -> Result<(), HarnessError> {
    let mut remaining = actual.to_vec();
    for e in expected {
        match remaining.iter().position(|a| a == e) {
            Some(i) => {
                remaining.swap_remove(i);
            }
            None => {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "[{}] ({}, {}) missing from {}",
                        ctx,
                        e.x,
                        e.y,
                        format_points(actual)
                    ),
                })
            }
        }
    }
    if remaining.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] unexpected extra points {}", ctx, format_points(&remaining)),
        })
    }
}

/// Turn the first failing verdict into an error.
pub fn assert_all_pass(verdicts: &[OracleVerdict]) -> Result<(), HarnessError> {
    match verdicts.iter().find(|v| !v.passed) {
        None => Ok(()),
        Some(v) => Err(HarnessError::OracleFailure {
            oracle: v.oracle_name.clone(),
            detail: v.detail.clone(),
        }),
    }
}

pub fn format_points(points: &[Point]) -> String {
    let inner: Vec<String> = points.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
    format!("[{}]", inner.join(", "))
}
