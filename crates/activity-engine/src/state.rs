use activity_config::infer_transform;
use grading::Verdict;
use graph_render::escape_html;
use plane_types::{ActivityConfig, Point};
use serde::{Deserialize, Serialize};
use transform_engine::compute_expected_points;

use crate::history::PlotHistory;

/// Message shown under the controls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text")]
pub enum Feedback {
    #[default]
    Empty,
    /// Status line after a control was used.
    Notice(String),
    /// Result of the last submission.
    Graded(Verdict),
}

pub const RESET_NOTICE: &str = "Reset complete.";
pub const SOLUTION_NOTICE: &str = "Solution shown.";
pub const SOLUTION_HINT: &str = "You can now view the solution.";

const CORRECT_COLOR: &str = "#166534";
const INCORRECT_COLOR: &str = "#b91c1c";

impl Feedback {
    pub fn notice(text: impl Into<String>) -> Self {
        Feedback::Notice(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Feedback::Empty => "",
            Feedback::Notice(text) => text,
            Feedback::Graded(verdict) => &verdict.message,
        }
    }

    /// Markup for the feedback slot. All text is escaped.
    pub fn to_html(&self) -> String {
        match self {
            Feedback::Empty => String::new(),
            Feedback::Notice(text) => {
                format!(r#"<div style="font-weight:600;">{}</div>"#, escape_html(text))
            }
            Feedback::Graded(verdict) => {
                let color = if verdict.correct {
                    CORRECT_COLOR
                } else {
                    INCORRECT_COLOR
                };
                format!(
                    r#"<div style="font-weight:600; color:{};">{}</div><div class="muted" style="margin-top:4px;">{}</div>"#,
                    color,
                    escape_html(&verdict.message),
                    SOLUTION_HINT
                )
            }
        }
    }
}

/// Everything a running activity knows.
///
/// The config and the expected points are fixed when the state is
/// created; only [`crate::update`] changes the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityState {
    pub(crate) config: ActivityConfig,
    pub(crate) src: String,
    pub(crate) expected_points: Vec<Point>,
    pub(crate) student_points: Vec<Point>,
    pub(crate) plot_history: PlotHistory,
    pub(crate) show_solution: bool,
    pub(crate) submitted: bool,
    pub(crate) feedback: Feedback,
}

impl ActivityState {
    /// Start a session for a validated config loaded from `src`.
    ///
    /// A missing transform may be inferred from `src` or the title; the
    /// stored config carries the result so the renderer sees the same
    /// transform the grader uses.
    pub fn new(mut config: ActivityConfig, src: impl Into<String>) -> Self {
        let src = src.into();
        config.transform = infer_transform(config.transform.take(), config.title.as_deref(), &src);
        let expected_points =
            compute_expected_points(&config.original.points, config.active_transform());

        Self {
            config,
            src,
            expected_points,
            student_points: Vec::new(),
            plot_history: PlotHistory::new(),
            show_solution: false,
            submitted: false,
            feedback: Feedback::Empty,
        }
    }

    pub fn config(&self) -> &ActivityConfig {
        &self.config
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn expected_points(&self) -> &[Point] {
        &self.expected_points
    }

    /// Plotted points, ordered to line up with the expected points.
    pub fn student_points(&self) -> &[Point] {
        &self.student_points
    }

    pub fn plot_history(&self) -> &PlotHistory {
        &self.plot_history
    }

    pub fn show_solution(&self) -> bool {
        self.show_solution
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}
