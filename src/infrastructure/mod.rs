//! Infrastructure layer providing the mocked external boundaries.
//!
//! This module contains the simulated authentication backend and the
//! embedded demo course catalog. There is no network and no persistence.

pub mod auth;
pub mod catalog;

pub use auth::*;
pub use catalog::*;
