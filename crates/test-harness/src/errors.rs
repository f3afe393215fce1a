#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("config rejected: {message}")]
    LoadFailed { message: String },

    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}
