//! Maieutica - Terminal Learning Client
//!
//! A terminal client shell for the Maieutica educational platform,
//! built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
