pub mod ordering;
pub mod validator;
pub mod verdict;

pub use ordering::order_student_points;
pub use validator::{points_match, validate_submission, TOLERANCE};
pub use verdict::Verdict;
