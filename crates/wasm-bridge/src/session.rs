use activity_config::{parse_config, LoadError};
use activity_engine::{update, view, Action, ActivityState, ActivityView};
use graph_render::panels::{load_error_panel, missing_source_panel, shape_diagnostic_panel};
use plane_types::UNTITLED_ACTIVITY;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("no activity is loaded")]
    NotStarted,

    #[error("failed to parse message: {reason}")]
    Serialization { reason: String },

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Page header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

impl Header {
    pub fn loaded(title: &str, src: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: format!("Loaded from: {}", src),
        }
    }

    pub fn missing_source() -> Self {
        Self {
            title: "No config specified".to_string(),
            subtitle: "Add ?src=... to the URL".to_string(),
        }
    }

    /// Header for a failed load. A config with missing fields still shows
    /// its own title, if it has one.
    pub fn load_failed(err: &LoadError, src: &str) -> Self {
        match err.shape_problems() {
            Some((_, raw)) => {
                let title = raw
                    .get("title")
                    .and_then(|t| t.as_str())
                    .filter(|t| !t.is_empty())
                    .unwrap_or(UNTITLED_ACTIVITY);
                Self::loaded(title, src)
            }
            None => Self {
                title: "Config load failed".to_string(),
                subtitle: err.to_string(),
            },
        }
    }
}

/// Content panel for a failed load: the field diagnostics for an
/// incomplete config, the error text otherwise.
pub fn load_failure_panel(err: &LoadError) -> String {
    match err.shape_problems() {
        Some((problems, raw)) => shape_diagnostic_panel(raw, problems),
        None => load_error_panel(&err.to_string()),
    }
}

/// What the page shows when no activity can run.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub header: Header,
    pub panel_html: String,
    /// Whether the instructions card's buttons and the graph take clicks.
    pub interactive: bool,
}

/// Page content when there is no `src` parameter. No session will ever
/// start, so the controls stay unbound.
pub fn missing_source_content() -> PageContent {
    PageContent {
        header: Header::missing_source(),
        panel_html: missing_source_panel(),
        interactive: false,
    }
}

/// The one activity a page runs.
#[derive(Debug, Default)]
pub struct Session {
    state: Option<ActivityState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&ActivityState> {
        self.state.as_ref()
    }

    /// Parse config JSON and start a fresh activity, replacing any
    /// previous one. A failed load leaves the session unchanged.
    pub fn load(&mut self, json: &str, src: &str) -> Result<ActivityView, BridgeError> {
        let config = parse_config(json).map_err(|e| {
            warn!(src, error = %e, "config rejected");
            LoadError::from(e)
        })?;
        let state = ActivityState::new(config, src);
        info!(src, expected = state.expected_points().len(), "activity started");
        let current = view(&state);
        self.state = Some(state);
        Ok(current)
    }

    /// Apply a learner action to the running activity.
    pub fn apply(&mut self, action: Action) -> Result<ActivityView, BridgeError> {
        let state = self.state.take().ok_or(BridgeError::NotStarted)?;
        let next = update(state, action);
        let current = view(&next);
        self.state = Some(next);
        Ok(current)
    }

    pub fn view(&self) -> Result<ActivityView, BridgeError> {
        self.state.as_ref().map(view).ok_or(BridgeError::NotStarted)
    }
}
