//! Error types for the EBML core.

use thiserror::Error;

/// Result type for EBML operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding or encoding an element tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer ended in the middle of a variable-length integer.
    #[error("Truncated VINT at offset {offset}: need {needed} bytes, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A VINT leading byte of zero (width above 8 bytes).
    #[error("Invalid VINT marker at offset {offset}")]
    InvalidVintMarker { offset: usize },

    /// Value too large to encode as an 8-byte VINT.
    #[error("Value {0} does not fit in an 8-byte VINT")]
    VintOverflow(u64),

    /// Failed to render a tree summary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
