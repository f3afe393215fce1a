use activity_engine::{Action, ActivityView};
use serde::{Deserialize, Serialize};

use crate::session::Header;

/// Messages from the host page to the activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToActivity {
    /// Start a session from config JSON the host fetched itself.
    LoadConfig { json: String, src: String },

    // -- Learner actions --
    /// Click at canvas pixel coordinates.
    PlotClick { x: f64, y: f64 },
    Undo,
    Reset,
    Submit,
    SeeSolution,

    /// Re-send the current view without changing anything.
    GetView,
}

impl UiToActivity {
    /// The learner action this message carries, if any.
    pub fn as_action(&self) -> Option<Action> {
        match self {
            UiToActivity::PlotClick { x, y } => Some(Action::PlotClick { x: *x, y: *y }),
            UiToActivity::Undo => Some(Action::Undo),
            UiToActivity::Reset => Some(Action::Reset),
            UiToActivity::Submit => Some(Action::Submit),
            UiToActivity::SeeSolution => Some(Action::SeeSolution),
            UiToActivity::LoadConfig { .. } | UiToActivity::GetView => None,
        }
    }
}

/// Messages from the activity back to the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityToUi {
    /// The state changed; redraw everything.
    ViewUpdated { view: Box<ActivityView> },
    /// The config could not be loaded; show the header and panel instead.
    LoadFailed { header: Header, panel_html: String },
    Error { message: String },
}
