//! # Blobcommit
//!
//! Share commitments for namespaced blobs, and the `PayForBlobs` messages
//! that carry them.
//!
//! ## Overview
//!
//! A payload is serialized, wrapped in a [`Blob`] under a [`Namespace`],
//! split into fixed-size shares and committed to with a Merkle mountain
//! range of namespaced subtrees. The resulting 32-byte [`Commitment`] goes
//! into a [`MsgPayForBlobs`] alongside the blob size and share version.
//!
//! ## Usage
//!
//! ```rust
//! use blobcommit::{Engine, QueueCommand};
//!
//! let engine = Engine::default();
//! let prepared = engine
//!     .prepare_blob(
//!         "celestia1signer",
//!         "01",
//!         &QueueCommand::add_to_queue("https://youtu.be/abc12345678"),
//!     )
//!     .unwrap();
//!
//! assert_eq!(prepared.blob_size(), 53);
//! assert_eq!(prepared.commitment().len(), 32);
//! ```
//!
//! ## Re-exports
//!
//! - `blobcommit::core` - primitives (namespace, shares, trees, commitments)
//! - `blobcommit::codec` - message encoding

pub mod engine;
pub mod error;
pub mod payload;

pub use blobcommit_codec as codec;
pub use blobcommit_core as core;

pub use engine::{Engine, EngineConfig, PreparedBlob};
pub use error::{Error, Result};
pub use payload::QueueCommand;

pub use blobcommit_codec::{AnyMessage, BlobProto, CodecError, Message, MsgPayForBlobs};
pub use blobcommit_core::{
    create_commitment, Blob, Commitment, CommitmentParams, CoreError, Namespace, SHARE_SIZE,
    SUBTREE_THRESHOLD,
};
