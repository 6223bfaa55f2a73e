//! Error types for the wire codec.

use thiserror::Error;

/// Errors that can occur while encoding or decoding messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input ended early, a declared count overran the buffer, or the
    /// structure was otherwise inconsistent.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// A field is too large for its length prefix.
    #[error("{field} length {len} does not fit a u32 prefix")]
    TooLarge { field: &'static str, len: usize },

    /// The envelope names a message type outside the known set.
    #[error("unknown message type: {0}")]
    UnknownTypeUrl(String),
}

impl CodecError {
    pub(crate) fn unexpected_end(field: &'static str, offset: usize) -> Self {
        CodecError::MalformedMessage(format!("unexpected end of input reading {field} at offset {offset}"))
    }
}

impl From<prost::DecodeError> for CodecError {
    fn from(e: prost::DecodeError) -> Self {
        CodecError::MalformedMessage(e.to_string())
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
