use graph_render::{render_graph_svg, RenderOptions};
use plane_types::Point;
use serde::{Deserialize, Serialize};

use crate::howto::default_howto;
use crate::interaction::{InteractionPhase, MAX_STUDENT_POINTS};
use crate::state::{ActivityState, Feedback};

/// Everything the host displays for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityView {
    pub title: String,
    pub subtitle: String,
    /// Plain text.
    pub prompt: String,
    /// Trusted author HTML, or a generated sentence.
    pub howto_html: String,
    pub graph_svg: String,
    pub feedback: Feedback,
    pub feedback_html: String,
    pub see_solution_visible: bool,
    pub phase: InteractionPhase,
    pub plotted: usize,
    pub max_points: usize,
    pub student_points: Vec<Point>,
}

pub fn view(state: &ActivityState) -> ActivityView {
    let config = &state.config;
    let howto_html = config
        .howto
        .clone()
        .unwrap_or_else(|| default_howto(config.active_transform()));
    let options = RenderOptions {
        show_solution: state.show_solution,
        student_points: state.student_points.clone(),
    };

    ActivityView {
        title: config.display_title().to_string(),
        subtitle: format!("Loaded from: {}", state.src),
        prompt: config.display_prompt().to_string(),
        howto_html,
        graph_svg: render_graph_svg(config, &options),
        feedback: state.feedback.clone(),
        feedback_html: state.feedback.to_html(),
        see_solution_visible: state.submitted,
        phase: InteractionPhase::of(state),
        plotted: state.student_points.len(),
        max_points: MAX_STUDENT_POINTS,
        student_points: state.student_points.clone(),
    }
}
