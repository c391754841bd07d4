//! Presentation layer handling the terminal UI and user input.
//!
//! This module renders the current route with ratatui, derives the color
//! palette from the active theme, and maps keyboard input onto store
//! actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
