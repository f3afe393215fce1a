use activity_engine::*;
use grading::Verdict;
use graph_render::GraphMapping;
use plane_types::*;

fn reflect_config() -> ActivityConfig {
    ActivityConfig::new(
        GridBounds::new(-5.0, 5.0, -5.0, 5.0),
        points_from_pairs(&[[-2.0, 1.0], [0.0, 3.0], [2.0, 1.0]]),
    )
    .with_transform(TransformSpec::ReflectX)
    .with_title("Reflect across the x-axis")
}

fn start() -> ActivityState {
    ActivityState::new(reflect_config(), "configs/reflect_x_001.json")
}

/// Click the canvas pixel under a graph point.
fn click(state: ActivityState, x: f64, y: f64) -> ActivityState {
    let (px, py) = GraphMapping::new(state.config().grid).to_pixel(Point::new(x, y));
    update(state, Action::PlotClick { x: px, y: py })
}

fn plot_all(mut state: ActivityState, pairs: &[[f64; 2]]) -> ActivityState {
    for [x, y] in pairs {
        state = click(state, *x, *y);
    }
    state
}

// ── State ────────────────────────────────────────────────────────────────

#[test]
fn expected_points_are_computed_at_start() {
    let state = start();
    assert_eq!(
        state.expected_points(),
        points_from_pairs(&[[-2.0, -1.0], [0.0, -3.0], [2.0, -1.0]]).as_slice()
    );
    assert!(state.student_points().is_empty());
    assert!(!state.submitted());
    assert_eq!(state.feedback(), &Feedback::Empty);
}

#[test]
fn missing_transform_is_inferred_from_source() {
    let mut config = reflect_config();
    config.transform = None;
    config.title = None;
    let state = ActivityState::new(config, "https://host/reflect_x_002.json");
    assert_eq!(state.config().transform, Some(TransformSpec::ReflectX));
    assert_eq!(state.expected_points()[1], Point::new(0.0, -3.0));
}

#[test]
fn unknown_transform_expects_the_original() {
    let mut config = reflect_config();
    config.transform = Some(TransformSpec::Identity);
    config.title = Some("Copy the shape".to_string());
    let state = ActivityState::new(config.clone(), "copy.json");
    assert_eq!(state.expected_points(), config.original.points.as_slice());
}

#[test]
fn declared_unknown_type_is_not_replaced_by_inference() {
    let config = reflect_config().with_transform(TransformSpec::Unrecognized {
        kind: "shear".to_string(),
    });
    let state = ActivityState::new(config.clone(), "https://host/reflect_x_003.json");
    assert!(matches!(
        state.config().transform,
        Some(TransformSpec::Unrecognized { .. })
    ));
    assert_eq!(state.expected_points(), config.original.points.as_slice());
    assert_eq!(default_howto(state.config().transform.as_ref()), "");
}

// ── Plotting ─────────────────────────────────────────────────────────────

#[test]
fn clicks_snap_to_grid() {
    let state = start();
    let mapping = GraphMapping::new(state.config().grid);
    let (px, py) = mapping.to_pixel(Point::new(1.3, -2.4));
    let state = update(state, Action::PlotClick { x: px, y: py });
    assert_eq!(state.student_points(), &[Point::new(1.0, -2.0)]);
}

#[test]
fn clicks_outside_canvas_are_ignored() {
    let state = update(start(), Action::PlotClick { x: -4.0, y: 10.0 });
    assert!(state.student_points().is_empty());
    assert!(state.plot_history().is_empty());
}

#[test]
fn points_are_reordered_to_match_expected() {
    let state = plot_all(start(), &[[2.0, -1.0], [0.0, -3.0], [-2.0, -1.0]]);
    assert_eq!(state.student_points(), state.expected_points());
}

#[test]
fn sixth_click_is_ignored() {
    let state = plot_all(
        start(),
        &[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]],
    );
    assert_eq!(InteractionPhase::of(&state), InteractionPhase::Full);
    let state = click(state, -4.0, -4.0);
    assert_eq!(state.student_points().len(), MAX_STUDENT_POINTS);
    assert!(!state.student_points().contains(&Point::new(-4.0, -4.0)));
}

// ── Undo / reset ─────────────────────────────────────────────────────────

#[test]
fn undo_removes_most_recent_click_not_last_slot() {
    // (-2,-1) is plotted last but orders to the front.
    let state = plot_all(start(), &[[0.0, -3.0], [2.0, -1.0], [-2.0, -1.0]]);
    assert_eq!(state.student_points()[0], Point::new(-2.0, -1.0));

    let state = update(state, Action::Undo);
    assert_eq!(state.student_points().len(), 2);
    assert!(!state.student_points().contains(&Point::new(-2.0, -1.0)));
    assert!(state.student_points().contains(&Point::new(2.0, -1.0)));
}

#[test]
fn undo_removes_one_copy_of_a_duplicate() {
    let state = plot_all(start(), &[[1.0, 1.0], [1.0, 1.0]]);
    let state = update(state, Action::Undo);
    assert_eq!(state.student_points(), &[Point::new(1.0, 1.0)]);
}

#[test]
fn undo_on_empty_is_a_no_op() {
    let state = start();
    let after = update(state.clone(), Action::Undo);
    assert_eq!(after, state);
}

#[test]
fn reset_clears_everything() {
    let state = plot_all(start(), &[[-2.0, -1.0], [0.0, -3.0], [2.0, -1.0]]);
    let state = update(state, Action::Submit);
    let state = update(state, Action::SeeSolution);
    let state = update(state, Action::Reset);

    assert!(state.student_points().is_empty());
    assert!(!state.plot_history().can_undo());
    assert!(!state.show_solution());
    assert!(!state.submitted());
    assert_eq!(state.feedback().text(), "Reset complete.");
}

// ── Submit / solution ────────────────────────────────────────────────────

#[test]
fn correct_submission_in_any_order() {
    let state = plot_all(start(), &[[0.0, -3.0], [2.0, -1.0], [-2.0, -1.0]]);
    let state = update(state, Action::Submit);
    assert_eq!(state.feedback(), &Feedback::Graded(Verdict::correct()));
    assert!(state.submitted());
}

#[test]
fn wrong_count_reports_required_number() {
    let state = plot_all(start(), &[[0.0, -3.0]]);
    let state = update(state, Action::Submit);
    assert_eq!(state.feedback().text(), "You must plot exactly 3 points.");
}

#[test]
fn wrong_points_are_rejected() {
    let state = plot_all(start(), &[[-2.0, 1.0], [0.0, 3.0], [2.0, 1.0]]);
    let state = update(state, Action::Submit);
    assert_eq!(state.feedback(), &Feedback::Graded(Verdict::incorrect()));
}

#[test]
fn solution_is_gated_on_submission() {
    let state = update(start(), Action::SeeSolution);
    assert!(!state.show_solution());
    assert_eq!(state.feedback(), &Feedback::Empty);

    let state = update(update(state, Action::Submit), Action::SeeSolution);
    assert!(state.show_solution());
    assert_eq!(state.feedback().text(), "Solution shown.");
}

#[test]
fn plotting_clears_feedback() {
    let state = update(start(), Action::Submit);
    assert_ne!(state.feedback(), &Feedback::Empty);
    let state = click(state, 1.0, 1.0);
    assert_eq!(state.feedback(), &Feedback::Empty);
}

// ── View ─────────────────────────────────────────────────────────────────

#[test]
fn view_reports_header_and_prompt() {
    let v = view(&start());
    assert_eq!(v.title, "Reflect across the x-axis");
    assert_eq!(v.subtitle, "Loaded from: configs/reflect_x_001.json");
    assert_eq!(v.prompt, "Reflect across the x-axis");
    assert!(v.howto_html.contains("x-axis"));
    assert!(!v.see_solution_visible);
    assert_eq!(v.phase, InteractionPhase::Collecting);
    assert_eq!((v.plotted, v.max_points), (0, 5));
}

#[test]
fn view_falls_back_for_untitled_configs() {
    let config = ActivityConfig::new(
        GridBounds::new(0.0, 4.0, 0.0, 4.0),
        points_from_pairs(&[[1.0, 1.0]]),
    );
    let v = view(&ActivityState::new(config, "plain.json"));
    assert_eq!(v.title, "Untitled activity");
    assert_eq!(v.prompt, "Complete the transformation");
    assert_eq!(v.howto_html, "");
}

#[test]
fn author_howto_wins() {
    let mut config = reflect_config();
    config.howto = Some("<i>Flip it.</i>".to_string());
    let v = view(&ActivityState::new(config, "r.json"));
    assert_eq!(v.howto_html, "<i>Flip it.</i>");
}

#[test]
fn view_shows_solution_control_after_submit() {
    let state = update(start(), Action::Submit);
    let v = view(&state);
    assert!(v.see_solution_visible);
    assert!(v.feedback_html.contains("You must plot exactly 3 points."));
    assert!(!v.graph_svg.contains("#166534"));

    let v = view(&update(state, Action::SeeSolution));
    assert!(v.graph_svg.contains("#166534"));
}

#[test]
fn view_serializes_for_the_host() {
    let json = serde_json::to_value(view(&start())).unwrap();
    assert_eq!(json["phase"], "Collecting");
    assert_eq!(json["feedback"]["kind"], "Empty");
    assert!(json["graph_svg"].as_str().unwrap().starts_with("<svg"));
}

#[test]
fn actions_deserialize_from_tagged_json() {
    let action: Action = serde_json::from_str(r#"{"type":"PlotClick","x":10,"y":20.5}"#).unwrap();
    assert_eq!(action, Action::PlotClick { x: 10.0, y: 20.5 });
    let action: Action = serde_json::from_str(r#"{"type":"SeeSolution"}"#).unwrap();
    assert_eq!(action, Action::SeeSolution);
}

// ── How-to defaults ──────────────────────────────────────────────────────

#[test]
fn howto_defaults_per_transform() {
    assert!(default_howto(Some(&TransformSpec::ReflectY)).contains("y-axis"));
    assert!(default_howto(Some(&TransformSpec::Translate { dx: 3.0, dy: -2.0 })).contains("<b>-2</b>"));
    assert!(default_howto(Some(&TransformSpec::Rotate {
        angle: -90.0,
        pivot: Point::ORIGIN
    }))
    .contains("270&deg;"));
    assert_eq!(
        default_howto(Some(&TransformSpec::Rotate {
            angle: 45.0,
            pivot: Point::ORIGIN
        })),
        ""
    );
    assert!(default_howto(Some(&TransformSpec::Dilate {
        factor: 2.0,
        pivot: Point::new(1.0, -1.0)
    }))
    .contains("(1, -1)"));
    assert_eq!(default_howto(None), "");
}
