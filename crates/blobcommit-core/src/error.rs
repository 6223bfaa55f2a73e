//! Error types for the commitment core.

use thiserror::Error;

/// Errors that can occur while deriving a commitment.
///
/// Every operation in this crate is a deterministic pure function, so none of
/// these are worth retrying: the same input reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("cannot split an empty sequence")]
    EmptySplitInput,

    #[error("subtree width must be at least 1")]
    InvalidSubtreeWidth,

    #[error("invalid commitment parameters: {0}")]
    InvalidParams(String),

    #[error("blob of {0} bytes does not fit a u32 length prefix")]
    BlobTooLarge(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid commitment length: expected 0 or 32 bytes, got {0}")]
    InvalidCommitmentLength(usize),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
