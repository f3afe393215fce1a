pub mod errors;
pub mod infer;
pub mod load;
pub mod source;

pub use errors::{ConfigError, LoadError};
pub use infer::infer_transform;
pub use load::{parse_config, parse_config_value};
pub use source::config_url_from_query;
