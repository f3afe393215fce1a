use tracing::debug;

use crate::messages::{ActivityToUi, UiToActivity};
use crate::session::{load_failure_panel, BridgeError, Header, Session};

/// Handle one message from the host and produce the reply.
pub fn dispatch(session: &mut Session, msg: UiToActivity) -> ActivityToUi {
    let src = match &msg {
        UiToActivity::LoadConfig { src, .. } => src.clone(),
        _ => String::new(),
    };

    match handle_message(session, msg) {
        Ok(view) => ActivityToUi::ViewUpdated {
            view: Box::new(view),
        },
        Err(BridgeError::Load(err)) => ActivityToUi::LoadFailed {
            header: Header::load_failed(&err, &src),
            panel_html: load_failure_panel(&err),
        },
        Err(e) => ActivityToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(
    session: &mut Session,
    msg: UiToActivity,
) -> Result<activity_engine::ActivityView, BridgeError> {
    if let Some(action) = msg.as_action() {
        debug!(?action, "dispatching action");
        return session.apply(action);
    }

    match msg {
        UiToActivity::LoadConfig { json, src } => session.load(&json, &src),
        _ => session.view(),
    }
}

/// JSON-in, JSON-out wrapper around [`dispatch`].
pub fn process_json(session: &mut Session, json_input: &str) -> String {
    let response = match serde_json::from_str::<UiToActivity>(json_input) {
        Ok(msg) => dispatch(session, msg),
        Err(e) => ActivityToUi::Error {
            message: BridgeError::Serialization {
                reason: e.to_string(),
            }
            .to_string(),
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(
            r#"{{"type":"Error","message":"Serialization failed: {}"}}"#,
            e
        )
    })
}
