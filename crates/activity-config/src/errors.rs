/// Errors turning a JSON document into an activity config.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {reason}")]
    Malformed { reason: String },

    #[error("config is missing required fields: {}", .problems.join("; "))]
    ShapeInvalid {
        problems: Vec<String>,
        /// The document as received, for the diagnostic panel.
        raw: serde_json::Value,
    },
}

/// Errors obtaining a config from its source.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("Could not load config ({status}) from {url}")]
    Status { url: String, status: u16 },

    #[error("Could not load config from {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("Could not read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoadError {
    /// The shape-invalid details, when that is why loading failed.
    pub fn shape_problems(&self) -> Option<(&[String], &serde_json::Value)> {
        match self {
            LoadError::Config(ConfigError::ShapeInvalid { problems, raw }) => {
                Some((problems.as_slice(), raw))
            }
            _ => None,
        }
    }
}
