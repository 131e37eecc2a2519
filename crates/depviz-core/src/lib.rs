//! Core data types for depviz.
//!
//! This crate defines the fundamental types shared by the rest of depviz:
//! package names and their normalization, requirement-line parsing,
//! requirements-file loading, and tool configuration.
//!
//! This crate is intentionally free of async code and network I/O.

/// Default requirements file consulted when `--file` is not given.
pub const DEFAULT_MANIFEST_FILE: &str = "requirements.txt";

/// Default output path for the rendered HTML graph.
pub const DEFAULT_OUTPUT_HTML: &str = "dependency_graph.html";

pub mod config;
pub mod manifest;
pub mod package;
pub mod requirement;
