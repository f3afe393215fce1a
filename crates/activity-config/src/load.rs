use plane_types::{ActivityConfig, GridBounds, OriginalShape, Point, TransformSpec};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::ConfigError;

/// Parse and validate an activity config from JSON text.
///
/// Text that is not JSON is `Malformed`. JSON that lacks a usable grid or
/// a non-empty list of original points is `ShapeInvalid` and carries the
/// raw document. A transform block that cannot be read degrades to the
/// identity instead of failing.
#[instrument(level = "debug", skip_all, fields(len = json.len()))]
pub fn parse_config(json: &str) -> Result<ActivityConfig, ConfigError> {
    let raw: Value = serde_json::from_str(json).map_err(|e| ConfigError::Malformed {
        reason: e.to_string(),
    })?;
    parse_config_value(raw)
}

/// Validate an already-parsed JSON document.
pub fn parse_config_value(raw: Value) -> Result<ActivityConfig, ConfigError> {
    let Some(doc) = raw.as_object() else {
        return Err(ConfigError::ShapeInvalid {
            problems: vec!["config must be a JSON object".to_string()],
            raw,
        });
    };

    let mut problems = Vec::new();

    let grid = match doc.get("grid") {
        None | Some(Value::Null) => {
            problems.push("grid is required".to_string());
            None
        }
        Some(v) => match serde_json::from_value::<GridBounds>(v.clone()) {
            Ok(grid) => match grid.drawing_problem() {
                Some(problem) => {
                    problems.push(format!("grid: {}", problem));
                    None
                }
                None => Some(grid),
            },
            Err(e) => {
                problems.push(format!("grid: {}", e));
                None
            }
        },
    };

    let original = match doc.get("original") {
        Some(Value::Object(original)) => {
            let points = read_points(original.get("points"), &mut problems);
            let connect_lines = !matches!(original.get("connectLines"), Some(Value::Bool(false)));
            points.map(|points| OriginalShape {
                points,
                connect_lines,
            })
        }
        _ => {
            problems.push("original.points is required".to_string());
            None
        }
    };

    let transform = match doc.get("transform") {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            serde_json::from_value::<TransformSpec>(v.clone()).unwrap_or_else(|e| {
                debug!(error = %e, "unreadable transform; using identity");
                TransformSpec::Identity
            }),
        ),
    };

    match (grid, original) {
        (Some(grid), Some(original)) if problems.is_empty() => Ok(ActivityConfig {
            title: text_field(doc.get("title")),
            prompt: text_field(doc.get("prompt")),
            howto: text_field(doc.get("howto")),
            grid,
            original,
            transform,
        }),
        _ => Err(ConfigError::ShapeInvalid { problems, raw }),
    }
}

fn read_points(value: Option<&Value>, problems: &mut Vec<String>) -> Option<Vec<Point>> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        problems.push("original.points is required".to_string());
        return None;
    };
    match serde_json::from_value::<Vec<Point>>(value.clone()) {
        Ok(points) if points.is_empty() => {
            problems.push("original.points must not be empty".to_string());
            None
        }
        Ok(points) => Some(points),
        Err(e) => {
            problems.push(format!("original.points: {}", e));
            None
        }
    }
}

/// Optional display text. Empty strings count as absent; numbers and
/// booleans are shown as written.
fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
