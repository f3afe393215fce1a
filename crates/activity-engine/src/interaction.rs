use graph_render::GraphMapping;
use grading::order_student_points;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::ActivityState;

/// Most points a learner may plot.
pub const MAX_STUDENT_POINTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionPhase {
    /// Fewer than [`MAX_STUDENT_POINTS`] plotted; clicks add points.
    Collecting,
    /// The cap is reached; clicks are ignored.
    Full,
}

impl InteractionPhase {
    pub fn of(state: &ActivityState) -> Self {
        if state.student_points.len() >= MAX_STUDENT_POINTS {
            InteractionPhase::Full
        } else {
            InteractionPhase::Collecting
        }
    }
}

/// Add the grid point nearest to a click at canvas pixel `(px, py)`.
///
/// Returns whether a point was added. Clicks outside the canvas or while
/// the phase is [`InteractionPhase::Full`] change nothing.
pub(crate) fn plot_click(state: &mut ActivityState, px: f64, py: f64) -> bool {
    if InteractionPhase::of(state) == InteractionPhase::Full {
        debug!("point cap reached; click ignored");
        return false;
    }

    let mapping = GraphMapping::new(state.config.grid);
    let Some(point) = mapping.snap_pixel(px, py) else {
        debug!(px, py, "click outside the graph");
        return false;
    };

    state.plot_history.push(point);
    state.student_points.push(point);
    reorder(state);
    true
}

/// Remove the most recently plotted point. Returns whether one was removed.
pub(crate) fn undo_last(state: &mut ActivityState) -> bool {
    let Some(last) = state.plot_history.pop_last() else {
        return false;
    };
    if let Some(index) = state.student_points.iter().rposition(|p| *p == last) {
        state.student_points.remove(index);
    }
    reorder(state);
    true
}

fn reorder(state: &mut ActivityState) {
    state.student_points = order_student_points(&state.expected_points, &state.student_points);
}
