//! Maps an activity's original points to the expected answer.
//!
//! [`compute_expected_points`] is the canonical implementation; every
//! transform has a closed form here and an equivalent [`Affine2`] matrix
//! used for cross-checking.

pub mod affine;
pub mod engine;
pub mod rotation;

pub use affine::{to_affine, Affine2};
pub use engine::{apply_transform, compute_expected_points};
pub use rotation::{normalize_degrees, quarter_turns, rotate_about_origin};
