//! Error types for the wattscan-core library.
//!
//! Extraction itself is infallible (missing fields are simply absent from the
//! record); these errors cover the I/O surface around it.

use thiserror::Error;

/// Main error type for the wattscan library.
#[derive(Error, Debug)]
pub enum WattscanError {
    /// Failed to parse an analysis-result JSON document.
    #[error("invalid analysis JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the wattscan library.
pub type Result<T> = std::result::Result<T, WattscanError>;
