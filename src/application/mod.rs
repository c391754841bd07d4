//! Application layer managing state and user-facing workflows.
//!
//! This module holds the two state stores (interface chrome and course
//! catalog) and the `App` aggregate that coordinates them with the
//! session and routing.

pub mod state;
pub mod ui_state;
pub mod courses_state;

pub use state::*;
pub use ui_state::*;
pub use courses_state::*;
