use plane_types::TransformSpec;
use tracing::info;

/// Title phrases that identify a reflection across the x-axis.
const REFLECT_X_TITLES: [&str; 2] = ["reflect across the x-axis", "reflect across the x axis"];

/// Guess a transform for configs that omit one.
///
/// Early reflection activities were published without a `transform` block;
/// their URL or title still names the reflection. Configs that declare any
/// `type`, known or not, are left alone.
pub fn infer_transform(
    transform: Option<TransformSpec>,
    title: Option<&str>,
    src: &str,
) -> Option<TransformSpec> {
    if transform.as_ref().is_some_and(TransformSpec::declares_type) {
        return transform;
    }

    let title = title.unwrap_or_default().to_lowercase();
    let looks_like_reflect_x =
        src.contains("reflect_x") || REFLECT_X_TITLES.iter().any(|phrase| title.contains(phrase));

    if looks_like_reflect_x {
        info!(src, "no transform declared; inferring reflect_x");
        Some(TransformSpec::ReflectX)
    } else {
        transform
    }
}
