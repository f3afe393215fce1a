use serde::{Deserialize, Serialize};

pub const CORRECT_MESSAGE: &str = "Correct! The transformation is accurate.";
pub const INCORRECT_MESSAGE: &str = "That graph is not correct. Try again.";

/// Outcome of checking a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub message: String,
}

impl Verdict {
    pub fn correct() -> Self {
        Self {
            correct: true,
            message: CORRECT_MESSAGE.to_string(),
        }
    }

    pub fn incorrect() -> Self {
        Self {
            correct: false,
            message: INCORRECT_MESSAGE.to_string(),
        }
    }

    pub fn wrong_count(required: usize) -> Self {
        Self {
            correct: false,
            message: format!("You must plot exactly {} points.", required),
        }
    }
}
