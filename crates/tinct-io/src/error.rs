//! Error types for codec operations.
//!
//! Provides unified error handling for decode and encode.

use thiserror::Error;

/// Codec operation error.
///
/// All codec work happens on in-memory byte slices, so every variant
/// describes the content of the stream rather than a file-system failure.
#[derive(Debug, Error)]
pub enum IoError {
    /// Input bytes are not a recognized or supported image format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color type.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),
}

/// Result type for codec operations.
pub type IoResult<T> = Result<T, IoError>;
