use serde::Deserialize;
use serde_json::Value;

use crate::point::Point;

/// A geometric transform applied to the original shape.
///
/// Deserialization is lenient: an absent `type` yields
/// [`TransformSpec::Identity`], an unknown one yields
/// [`TransformSpec::Unrecognized`], and parameters that are not numeric fall
/// back to their defaults instead of failing the whole config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTransform")]
pub enum TransformSpec {
    Identity,
    /// Reflection across the x-axis: `(x, y) -> (x, -y)`.
    ReflectX,
    /// Reflection across the y-axis: `(x, y) -> (-x, y)`.
    ReflectY,
    Translate {
        dx: f64,
        dy: f64,
    },
    /// Rotation by `angle` degrees (counter-clockwise) about `pivot`.
    Rotate {
        angle: f64,
        pivot: Point,
    },
    /// Dilation by `factor` about `pivot`.
    Dilate {
        factor: f64,
        pivot: Point,
    },
    /// A declared `type` with no known meaning. Moves nothing.
    Unrecognized {
        kind: String,
    },
}

impl TransformSpec {
    /// The `type` tag this transform is written with in a config.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TransformSpec::Identity => "identity",
            TransformSpec::ReflectX => "reflect_x",
            TransformSpec::ReflectY => "reflect_y",
            TransformSpec::Translate { .. } => "translate",
            TransformSpec::Rotate { .. } => "rotate",
            TransformSpec::Dilate { .. } => "dilate",
            TransformSpec::Unrecognized { .. } => "unrecognized",
        }
    }

    /// True when applying the transform leaves every point in place.
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            TransformSpec::Identity | TransformSpec::Unrecognized { .. }
        )
    }

    /// False only when the config gave no `type` at all.
    pub fn declares_type(&self) -> bool {
        !matches!(self, TransformSpec::Identity)
    }
}

/// Wire shape of a transform descriptor before coercion.
#[derive(Debug, Default, Deserialize)]
struct RawTransform {
    #[serde(rename = "type", default)]
    kind: Option<Value>,
    #[serde(default)]
    dx: Option<Value>,
    #[serde(default)]
    dy: Option<Value>,
    #[serde(default)]
    angle: Option<Value>,
    #[serde(default)]
    pivot: Option<Value>,
    #[serde(default)]
    k: Option<Value>,
}

impl From<RawTransform> for TransformSpec {
    fn from(raw: RawTransform) -> Self {
        let kind = match raw.kind {
            None => return TransformSpec::Identity,
            Some(v) if is_blank_kind(&v) => return TransformSpec::Identity,
            Some(Value::String(s)) => s,
            Some(other) => return TransformSpec::Unrecognized { kind: other.to_string() },
        };

        match kind.as_str() {
            "reflect_x" => TransformSpec::ReflectX,
            "reflect_y" => TransformSpec::ReflectY,
            "translate" => TransformSpec::Translate {
                dx: coerce_number(raw.dx.as_ref()).unwrap_or(0.0),
                dy: coerce_number(raw.dy.as_ref()).unwrap_or(0.0),
            },
            "rotate" => TransformSpec::Rotate {
                angle: coerce_number(raw.angle.as_ref()).unwrap_or(0.0),
                pivot: coerce_pivot(raw.pivot.as_ref()),
            },
            "dilate" => TransformSpec::Dilate {
                factor: coerce_number(raw.k.as_ref()).unwrap_or(1.0),
                pivot: coerce_pivot(raw.pivot.as_ref()),
            },
            _ => TransformSpec::Unrecognized { kind },
        }
    }
}

/// `null`, `""`, `false` and `0` count as no type at all.
fn is_blank_kind(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Coerce a JSON value to a finite number.
///
/// Missing and `null` values yield `None` so callers apply their own
/// default. Numbers pass through, numeric strings are parsed (a blank string
/// is zero), booleans are 1 or 0. Everything else is non-numeric.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Null => return None,
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// A pivot is honored only as a two-element array; anything else is the
/// origin.
fn coerce_pivot(value: Option<&Value>) -> Point {
    match value {
        Some(Value::Array(items)) if items.len() == 2 => Point::new(
            coerce_number(items.first()).unwrap_or(0.0),
            coerce_number(items.get(1)).unwrap_or(0.0),
        ),
        _ => Point::ORIGIN,
    }
}
