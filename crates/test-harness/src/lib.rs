//! Test harness for scripted activity sessions.
//!
//! Drives the same dispatch path the browser uses and checks results with
//! oracles that report instead of panicking.
//!
//! # Key Components
//!
//! - [`ActivityDriver`]: fluent API for plotting, grading and inspecting a session
//! - [`oracle`]: verification functions returning pass/fail verdicts
//! - [`assertions`]: point-list assertions with diagnostics

pub mod assertions;
pub mod errors;
pub mod oracle;
pub mod workflow;

pub use errors::HarnessError;
pub use oracle::OracleVerdict;
pub use workflow::ActivityDriver;
