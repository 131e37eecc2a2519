//! Shared utilities for depviz.
//!
//! This crate provides cross-cutting concerns used by all other depviz
//! crates: error types, filesystem helpers, process spawning, and terminal
//! progress indicators.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
