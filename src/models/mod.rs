//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod execution;
pub mod language;

pub use execution::*;
pub use language::*;
