use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depviz operations.
///
/// Per-package fetch failures are not represented here: the resolver
/// records those on the affected graph node and keeps going. Only errors
/// that abort the whole run surface as a `DepvizError`.
#[derive(Debug, Error, Diagnostic)]
pub enum DepvizError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed requirements file.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check that the requirements file exists and lists one package per line"))]
    Manifest { message: String },

    /// Caller handed the resolver input it refuses to work with.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The HTTP client could not be constructed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Rendering or exporting the graph failed.
    #[error("Export failed: {message}")]
    #[diagnostic(help("Set DEPVIZ_BROWSER to a Chromium-family binary for PDF export"))]
    Export { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepvizResult<T> = miette::Result<T>;
