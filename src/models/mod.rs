//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod competition;
pub mod event;
pub mod result;

pub use competition::*;
pub use event::*;
pub use result::*;
