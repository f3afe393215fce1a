use grading::validate_submission;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::interaction::{plot_click, undo_last};
use crate::state::{ActivityState, Feedback, RESET_NOTICE, SOLUTION_NOTICE};

/// Something the learner did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Click on the graph at canvas pixel coordinates.
    PlotClick { x: f64, y: f64 },
    Undo,
    Reset,
    Submit,
    SeeSolution,
}

/// Apply an action and return the next state.
#[instrument(level = "debug", skip(state), fields(plotted = state.student_points.len()))]
pub fn update(mut state: ActivityState, action: Action) -> ActivityState {
    match action {
        Action::PlotClick { x, y } => {
            if plot_click(&mut state, x, y) {
                state.feedback = Feedback::Empty;
            }
        }
        Action::Undo => {
            if undo_last(&mut state) {
                state.feedback = Feedback::Empty;
            }
        }
        Action::Reset => {
            state.student_points.clear();
            state.plot_history.clear();
            state.show_solution = false;
            state.submitted = false;
            state.feedback = Feedback::notice(RESET_NOTICE);
        }
        Action::Submit => {
            let verdict = validate_submission(&state.expected_points, &state.student_points);
            info!(correct = verdict.correct, "submission graded");
            state.submitted = true;
            state.feedback = Feedback::Graded(verdict);
        }
        Action::SeeSolution => {
            if state.submitted {
                state.show_solution = true;
                state.feedback = Feedback::notice(SOLUTION_NOTICE);
            } else {
                debug!("solution requested before submitting; ignored");
            }
        }
    }
    state
}
