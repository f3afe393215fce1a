//! ActivityDriver: fluent API for scripting activity sessions in tests.
//!
//! Wraps `wasm_bridge::dispatch()` so tests exercise the real message path.
//! Points are given in graph coordinates and clicked at the matching canvas
//! pixel.

use activity_engine::{ActivityView, Feedback};
use graph_render::GraphMapping;
use plane_types::{GridBounds, Point};
use wasm_bridge::{dispatch, ActivityToUi, Session, UiToActivity};

use crate::assertions::{assert_same_points, format_points};
use crate::errors::HarnessError;
use crate::oracle::{self, OracleVerdict};

/// A scripted learner.
pub struct ActivityDriver {
    session: Session,
    grid: GridBounds,
    view: ActivityView,
    history: Vec<(String, String)>,
}

impl ActivityDriver {
    /// Load a config document as if it had been fetched from `src`.
    pub fn from_json(json: &str, src: &str) -> Result<Self, HarnessError> {
        let mut session = Session::new();
        let msg = UiToActivity::LoadConfig {
            json: json.to_string(),
            src: src.to_string(),
        };
        let view = match dispatch(&mut session, msg) {
            ActivityToUi::ViewUpdated { view } => *view,
            ActivityToUi::LoadFailed { header, .. } => {
                return Err(HarnessError::LoadFailed {
                    message: header.subtitle,
                })
            }
            ActivityToUi::Error { message } => return Err(HarnessError::DispatchError { message }),
        };
        let grid = session
            .state()
            .map(|s| s.config().grid)
            .ok_or_else(|| HarnessError::DispatchError {
                message: "session did not start".to_string(),
            })?;

        Ok(Self {
            session,
            grid,
            view,
            history: vec![("LoadConfig".to_string(), "ViewUpdated".to_string())],
        })
    }

    // ── Learner Actions ─────────────────────────────────────────────────

    /// Click the canvas pixel under graph point `(x, y)`.
    pub fn plot(&mut self, x: f64, y: f64) -> Result<&mut Self, HarnessError> {
        let (px, py) = GraphMapping::new(self.grid).to_pixel(Point::new(x, y));
        self.click_pixel(px, py)
    }

    /// Click a raw canvas pixel.
    pub fn click_pixel(&mut self, px: f64, py: f64) -> Result<&mut Self, HarnessError> {
        self.send("PlotClick", UiToActivity::PlotClick { x: px, y: py })
    }

    pub fn plot_all(&mut self, points: &[[f64; 2]]) -> Result<&mut Self, HarnessError> {
        for [x, y] in points {
            self.plot(*x, *y)?;
        }
        Ok(self)
    }

    /// Plot the answer, last point first.
    pub fn plot_expected_reversed(&mut self) -> Result<&mut Self, HarnessError> {
        let mut expected = self.expected_points();
        expected.reverse();
        for p in expected {
            self.plot(p.x, p.y)?;
        }
        Ok(self)
    }

    pub fn undo(&mut self) -> Result<&mut Self, HarnessError> {
        self.send("Undo", UiToActivity::Undo)
    }

    pub fn reset(&mut self) -> Result<&mut Self, HarnessError> {
        self.send("Reset", UiToActivity::Reset)
    }

    pub fn submit(&mut self) -> Result<&mut Self, HarnessError> {
        self.send("Submit", UiToActivity::Submit)
    }

    pub fn see_solution(&mut self) -> Result<&mut Self, HarnessError> {
        self.send("SeeSolution", UiToActivity::SeeSolution)
    }

    fn send(&mut self, label: &str, msg: UiToActivity) -> Result<&mut Self, HarnessError> {
        match dispatch(&mut self.session, msg) {
            ActivityToUi::ViewUpdated { view } => {
                self.view = *view;
                self.history.push((label.to_string(), "ViewUpdated".to_string()));
                Ok(self)
            }
            ActivityToUi::Error { message } => Err(HarnessError::DispatchError { message }),
            ActivityToUi::LoadFailed { header, .. } => Err(HarnessError::DispatchError {
                message: header.subtitle,
            }),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// The view after the last action.
    pub fn view(&self) -> &ActivityView {
        &self.view
    }

    pub fn expected_points(&self) -> Vec<Point> {
        self.session
            .state()
            .map(|s| s.expected_points().to_vec())
            .unwrap_or_default()
    }

    pub fn student_points(&self) -> &[Point] {
        &self.view.student_points
    }

    /// Get the dispatch history log.
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    // ── Inline Assertions ───────────────────────────────────────────────

    pub fn assert_plotted(&self, expected: usize) -> Result<&Self, HarnessError> {
        if self.view.plotted == expected {
            Ok(self)
        } else {
            Err(HarnessError::AssertionFailed {
                detail: format!(
                    "expected {} plotted points, got {}: {}",
                    expected,
                    self.view.plotted,
                    format_points(&self.view.student_points)
                ),
            })
        }
    }

    /// Assert the last submission was graded correct.
    pub fn assert_correct(&self) -> Result<&Self, HarnessError> {
        match &self.view.feedback {
            Feedback::Graded(v) if v.correct => Ok(self),
            other => Err(HarnessError::AssertionFailed {
                detail: format!(
                    "expected a correct verdict, got {:?}; expected points {}, plotted {}",
                    other,
                    format_points(&self.expected_points()),
                    format_points(&self.view.student_points)
                ),
            }),
        }
    }

    /// Assert the last submission was graded incorrect.
    pub fn assert_incorrect(&self) -> Result<&Self, HarnessError> {
        match &self.view.feedback {
            Feedback::Graded(v) if !v.correct => Ok(self),
            other => Err(HarnessError::AssertionFailed {
                detail: format!("expected an incorrect verdict, got {:?}", other),
            }),
        }
    }

    pub fn assert_feedback(&self, text: &str) -> Result<&Self, HarnessError> {
        if self.view.feedback.text() == text {
            Ok(self)
        } else {
            Err(HarnessError::AssertionFailed {
                detail: format!(
                    "expected feedback {:?}, got {:?}",
                    text,
                    self.view.feedback.text()
                ),
            })
        }
    }

    /// Assert the plotted points are the expected ones, in any order.
    pub fn assert_plotted_matches_expected(&self) -> Result<&Self, HarnessError> {
        assert_same_points(&self.view.student_points, &self.expected_points(), "plotted")?;
        Ok(self)
    }

    // ── Oracle Integration ──────────────────────────────────────────────

    /// Cross-check the session's transform against its matrix form.
    pub fn check_transform(&self) -> Vec<OracleVerdict> {
        let Some(state) = self.session.state() else {
            return Vec::new();
        };
        match state.config().active_transform() {
            Some(t) => oracle::run_transform_checks(t, &state.config().original.points),
            None => Vec::new(),
        }
    }

    /// Check the current markup is well formed.
    pub fn check_svg(&self) -> OracleVerdict {
        oracle::check_svg_balanced(&self.view.graph_svg)
    }
}
