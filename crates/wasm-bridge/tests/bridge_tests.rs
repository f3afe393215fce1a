use activity_config::LoadError;
use activity_engine::{Feedback, InteractionPhase};
use graph_render::GraphMapping;
use plane_types::{GridBounds, Point};
use wasm_bridge::*;

const CONFIG: &str = r#"{
    "title": "Translate the shape",
    "grid": {"xmin": -5, "xmax": 5, "ymin": -5, "ymax": 5},
    "original": {"points": [[0, 0], [1, 2]]},
    "transform": {"type": "translate", "dx": 2, "dy": -1}
}"#;

// ── Helper functions ─────────────────────────────────────────────────────

fn started() -> Session {
    let mut session = Session::new();
    session.load(CONFIG, "configs/translate.json").unwrap();
    session
}

fn click_msg(x: f64, y: f64) -> UiToActivity {
    let (px, py) = GraphMapping::new(GridBounds::new(-5.0, 5.0, -5.0, 5.0)).to_pixel(Point::new(x, y));
    UiToActivity::PlotClick { x: px, y: py }
}

fn expect_view(reply: ActivityToUi) -> activity_engine::ActivityView {
    match reply {
        ActivityToUi::ViewUpdated { view } => *view,
        other => panic!("expected ViewUpdated, got {:?}", other),
    }
}

// ── Session ──────────────────────────────────────────────────────────────

#[test]
fn actions_before_load_are_errors() {
    let mut session = Session::new();
    let reply = dispatch(&mut session, UiToActivity::Submit);
    assert_eq!(
        reply,
        ActivityToUi::Error {
            message: "no activity is loaded".to_string()
        }
    );
    assert!(!session.is_started());
}

#[test]
fn load_config_message_starts_activity() {
    let mut session = Session::new();
    let view = expect_view(dispatch(
        &mut session,
        UiToActivity::LoadConfig {
            json: CONFIG.to_string(),
            src: "configs/translate.json".to_string(),
        },
    ));
    assert_eq!(view.title, "Translate the shape");
    assert_eq!(view.subtitle, "Loaded from: configs/translate.json");
    assert!(view.howto_html.contains("<b>2</b>"));
    assert!(session.is_started());
}

#[test]
fn full_round_of_plotting_and_grading() {
    let mut session = started();
    dispatch(&mut session, click_msg(3.0, 1.0));
    let view = expect_view(dispatch(&mut session, click_msg(2.0, -1.0)));
    assert_eq!(view.student_points, vec![Point::new(2.0, -1.0), Point::new(3.0, 1.0)]);
    assert_eq!(view.phase, InteractionPhase::Collecting);

    let view = expect_view(dispatch(&mut session, UiToActivity::Submit));
    assert!(view.see_solution_visible);
    assert!(matches!(view.feedback, Feedback::Graded(ref v) if v.correct));

    let view = expect_view(dispatch(&mut session, UiToActivity::SeeSolution));
    assert_eq!(view.feedback.text(), "Solution shown.");
}

#[test]
fn failed_reload_keeps_running_activity() {
    let mut session = started();
    dispatch(&mut session, click_msg(1.0, 1.0));
    let reply = dispatch(
        &mut session,
        UiToActivity::LoadConfig {
            json: "{".to_string(),
            src: "broken.json".to_string(),
        },
    );
    assert!(matches!(reply, ActivityToUi::LoadFailed { .. }));
    let view = session.view().unwrap();
    assert_eq!(view.plotted, 1);
}

// ── Load failures ────────────────────────────────────────────────────────

#[test]
fn incomplete_config_shows_diagnostics_under_its_title() {
    let mut session = Session::new();
    let reply = dispatch(
        &mut session,
        UiToActivity::LoadConfig {
            json: r#"{"title":"Half done","original":{"points":[[0,0]]}}"#.to_string(),
            src: "half.json".to_string(),
        },
    );
    match reply {
        ActivityToUi::LoadFailed { header, panel_html } => {
            assert_eq!(header, Header::loaded("Half done", "half.json"));
            assert!(panel_html.contains("Config is missing required fields."));
            assert!(panel_html.contains("grid is required"));
        }
        other => panic!("expected LoadFailed, got {:?}", other),
    }
}

#[test]
fn http_failure_header_carries_message() {
    let err = LoadError::Status {
        url: "https://x.test/c.json".to_string(),
        status: 500,
    };
    let header = Header::load_failed(&err, "https://x.test/c.json");
    assert_eq!(header.title, "Config load failed");
    assert_eq!(header.subtitle, "Could not load config (500) from https://x.test/c.json");
    assert!(load_failure_panel(&err).contains("Fix the URL or config path and reload."));
}

#[test]
fn missing_source_header() {
    let header = Header::missing_source();
    assert_eq!(header.title, "No config specified");
    assert_eq!(header.subtitle, "Add ?src=... to the URL");
}

#[test]
fn missing_source_page_is_not_interactive() {
    let content = missing_source_content();
    assert_eq!(content.header, Header::missing_source());
    assert!(!content.interactive);
    assert!(!content.panel_html.is_empty());
}

// ── JSON protocol ────────────────────────────────────────────────────────

#[test]
fn process_json_round_trip() {
    let mut session = started();
    let reply = process_json(&mut session, r#"{"type":"Reset"}"#);
    let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(value["type"], "ViewUpdated");
    assert_eq!(value["view"]["feedback"]["text"], "Reset complete.");
    assert_eq!(value["view"]["max_points"], 5);
}

#[test]
fn process_json_reports_bad_messages() {
    let mut session = started();
    let reply = process_json(&mut session, r#"{"type":"Explode"}"#);
    let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(value["type"], "Error");
    assert!(value["message"]
        .as_str()
        .unwrap()
        .starts_with("failed to parse message"));
}

#[test]
fn get_view_does_not_change_state() {
    let mut session = started();
    dispatch(&mut session, click_msg(0.0, 0.0));
    let before = session.view().unwrap();
    let after = expect_view(dispatch(&mut session, UiToActivity::GetView));
    assert_eq!(before, after);
}
