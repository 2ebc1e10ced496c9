//! Common utilities and shared types for the indset workspace.
//!
//! This crate provides search configuration and the bundled graph cases
//! used across the solver and CLI test suites.

mod config;
mod test_cases;

pub use crate::config::*;
pub use crate::test_cases::*;
