//! Error types for dictionary codec operations.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Codec error types.
///
/// Dictionary exhaustion is not an error: a full dictionary is a
/// normal steady state in which both sides stop inserting.
#[derive(Debug, Error)]
pub enum Error {
    /// Code width outside the range supported by the wire format.
    #[error("invalid max_bits {max_bits}: must be in range [{min}, {max}]")]
    InvalidConfig { max_bits: u32, min: u32, max: u32 },

    /// Configuration source could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Code stream or frame is corrupted.
    #[error("corrupted stream: {message}")]
    CorruptedData {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Input ended in the middle of a code or before a frame header.
    #[error("unexpected EOF after {bytes_read} bytes")]
    UnexpectedEof { bytes_read: usize },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// I/O error from an underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant of an algorithm was violated.
    #[error("{algorithm} error: {message}")]
    Algorithm {
        algorithm: &'static str,
        message: String,
    },
}

impl Error {
    /// Create a corrupted stream error pointing at a position in the input.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptedData {
            message: format!("{} at offset {}", message.into(), offset),
            source: None,
        }
    }

    /// Create an invalid configuration error for a code width.
    pub fn invalid_config(max_bits: u32, min: u32, max: u32) -> Self {
        Error::InvalidConfig { max_bits, min, max }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bytes_read: usize) -> Self {
        Error::UnexpectedEof { bytes_read }
    }

    /// Create an algorithm-specific error.
    pub fn algorithm(algorithm: &'static str, message: impl Into<String>) -> Self {
        Error::Algorithm {
            algorithm,
            message: message.into(),
        }
    }

    /// Whether the error was caused by the input stream rather than the caller.
    pub fn is_corrupt_stream(&self) -> bool {
        matches!(
            self,
            Error::CorruptedData { .. } | Error::UnexpectedEof { .. }
        )
    }

    /// Get error category for reporting.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidConfig { .. } | Error::Config(_) => "config",
            Error::CorruptedData { .. } | Error::UnexpectedEof { .. } => "corrupt_stream",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Io(_) => "io_error",
            Error::Algorithm { .. } => "algorithm_error",
        }
    }
}
