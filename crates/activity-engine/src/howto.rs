use plane_types::{Point, TransformSpec};
use transform_engine::quarter_turns;

/// Instructions shown when a config does not supply its own `howto`.
///
/// Returns HTML; numbers are the only interpolated values.
pub fn default_howto(transform: Option<&TransformSpec>) -> String {
    let Some(transform) = transform else {
        return String::new();
    };

    match transform {
        TransformSpec::Identity | TransformSpec::Unrecognized { .. } => String::new(),
        TransformSpec::ReflectX => {
            "Reflect the graph across the <b>x-axis</b>: keep x-values the same and negate y-values."
                .to_string()
        }
        TransformSpec::ReflectY => {
            "Reflect the graph across the <b>y-axis</b>: keep y-values the same and negate x-values."
                .to_string()
        }
        TransformSpec::Translate { dx, dy } => format!(
            "Translate the graph: add <b>{}</b> to every x-value and <b>{}</b> to every y-value.",
            dx, dy
        ),
        TransformSpec::Rotate { angle, pivot } => match quarter_turns(*angle) {
            Some(0) | None => String::new(),
            Some(turns) => format!(
                "Rotate the graph <b>{}&deg;</b> counter-clockwise about {}.",
                u32::from(turns) * 90,
                describe_pivot(pivot)
            ),
        },
        TransformSpec::Dilate { factor, pivot } => format!(
            "Dilate the graph by a factor of <b>{}</b> about {}: every distance from the center is multiplied by {}.",
            factor,
            describe_pivot(pivot),
            factor
        ),
    }
}

fn describe_pivot(pivot: &Point) -> String {
    if *pivot == Point::ORIGIN {
        "the origin".to_string()
    } else {
        format!("({}, {})", pivot.x, pivot.y)
    }
}
