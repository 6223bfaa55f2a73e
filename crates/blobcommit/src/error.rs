//! Error types for the engine.

use blobcommit_codec::CodecError;
use blobcommit_core::CoreError;
use thiserror::Error;

/// Errors that can occur during engine operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Commitment derivation failed.
    #[error("commitment error: {0}")]
    Core(#[from] CoreError),

    /// Message encoding or decoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The payload could not be serialized to JSON.
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
