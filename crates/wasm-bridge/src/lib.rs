//! Browser host for the activity.
//!
//! [`session`] and [`dispatch`] are plain Rust and build on every target;
//! the DOM wiring in `wasm_api` is compiled only for `wasm32`.

pub mod dispatch;
pub mod messages;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use dispatch::{dispatch, process_json};
pub use messages::{ActivityToUi, UiToActivity};
pub use session::{load_failure_panel, missing_source_content, BridgeError, Header, PageContent, Session};
