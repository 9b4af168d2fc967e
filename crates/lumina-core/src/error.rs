//! Error types for Lumina.

use thiserror::Error;

/// Main error type for Lumina operations.
///
/// Every transform validates its inputs before writing output, so an
/// `Err` never comes with a partially processed buffer.
#[derive(Error, Debug)]
pub enum LuminaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error(
        "Dimension mismatch: expected {}x{}, got {}x{}",
        .expected.0, .expected.1, .got.0, .got.1
    )]
    DimensionMismatch {
        expected: (u32, u32),
        got: (u32, u32),
    },

    #[error("Invalid style image: {0}")]
    InvalidStyleImage(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Lumina operations.
pub type Result<T> = std::result::Result<T, LuminaError>;
