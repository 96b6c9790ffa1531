//! Error types for clipmark.
//!
//! This module defines the error types returned by the conversion pipeline.

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input string is empty, cannot be parsed as a URL, or has no host.
    ///
    /// Surfaced to the caller before any fetch is attempted.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Rendering failed internally.
    ///
    /// Never surfaced from `convert`; the orchestrator recovers by falling
    /// back to the raw HTML input.
    #[error("conversion failed: {0}")]
    ConversionFailure(String),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
