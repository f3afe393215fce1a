//! The activity session: state, the actions that change it, and the view
//! derived from it.
//!
//! Every change goes through [`update`], which takes the current
//! [`ActivityState`] by value and returns the next one. Hosts render
//! [`view`] after each update.

pub mod action;
pub mod history;
pub mod howto;
pub mod interaction;
pub mod state;
pub mod view;

pub use action::{update, Action};
pub use history::PlotHistory;
pub use howto::default_howto;
pub use interaction::{InteractionPhase, MAX_STUDENT_POINTS};
pub use state::{ActivityState, Feedback};
pub use view::{view, ActivityView};
