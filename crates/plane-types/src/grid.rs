use serde::{Deserialize, Serialize};

/// Visible bounds of the coordinate plane, in graph units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl GridBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Horizontal span. Degenerate or inverted bounds report a unit span so
    /// that pixel mappings never divide by zero.
    pub fn width(&self) -> f64 {
        let span = self.xmax - self.xmin;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    /// Vertical span, with the same degenerate-bounds rule as [`Self::width`].
    pub fn height(&self) -> f64 {
        let span = self.ymax - self.ymin;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    /// Tick positions along x: `xmin, xmin + 1, ...` up to `xmax`. Empty
    /// when the range holds more than [`MAX_TICKS`] steps.
    pub fn x_ticks(&self) -> Vec<f64> {
        unit_steps(self.xmin, self.xmax)
    }

    /// Tick positions along y, with the same cap as [`Self::x_ticks`].
    pub fn y_ticks(&self) -> Vec<f64> {
        unit_steps(self.ymin, self.ymax)
    }

    /// Why these bounds cannot be drawn as a unit grid, if they cannot.
    pub fn drawing_problem(&self) -> Option<String> {
        for (axis, min, max) in [("x", self.xmin, self.xmax), ("y", self.ymin, self.ymax)] {
            if !min.is_finite() || !max.is_finite() {
                return Some(format!("{} bounds must be finite", axis));
            }
            if min.abs() > MAX_EXACT || max.abs() > MAX_EXACT {
                return Some(format!("{} range {}..{} cannot be stepped by one", axis, min, max));
            }
            if step_count(min, max).is_none() {
                return Some(format!(
                    "{} range {}..{} has more than {} unit steps",
                    axis, min, max, MAX_TICKS
                ));
            }
        }
        None
    }
}

/// Most grid lines drawn along one axis.
pub const MAX_TICKS: usize = 1000;

/// Largest magnitude at which every integer is an `f64`.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Number of unit steps from `min` to `max` inclusive, or `None` when it
/// exceeds [`MAX_TICKS`] or the bounds are past exact integer range.
fn step_count(min: f64, max: f64) -> Option<usize> {
    if !min.is_finite() || !max.is_finite() || min.abs() > MAX_EXACT || max.abs() > MAX_EXACT {
        return None;
    }
    if max < min {
        return Some(0);
    }
    let steps = (max - min).floor() + 1.0;
    (steps <= MAX_TICKS as f64).then_some(steps as usize)
}

fn unit_steps(min: f64, max: f64) -> Vec<f64> {
    match step_count(min, max) {
        Some(n) => (0..n).map(|i| min + i as f64).collect(),
        None => Vec::new(),
    }
}
