//! # Blobcommit Codec
//!
//! Wire formats for paying for blob inclusion.
//!
//! - [`message`] - [`MsgPayForBlobs`] and its length-prefixed binary layout
//! - [`proto`] - protobuf forms of [`BlobProto`] and [`AnyMessage`]
//!
//! Decoders are strict: every read is bounds-checked and trailing input
//! is an error.
//!
//! ```rust
//! use blobcommit_codec::{Message, MsgPayForBlobs};
//!
//! let msg = MsgPayForBlobs {
//!     signer: "signer".into(),
//!     namespaces: vec![vec![0; 29]],
//!     blob_sizes: vec![5],
//!     share_commitments: vec![vec![0; 32]],
//!     share_versions: vec![0],
//! };
//! let any = Message::from(msg.clone()).to_any().unwrap();
//! assert_eq!(Message::from_any(&any).unwrap(), Message::PayForBlobs(msg));
//! ```

pub mod error;
pub mod message;
pub mod proto;
pub mod reader;

pub use error::{CodecError, Result};
pub use message::{
    AnyMessage, Message, MsgPayForBlobs, PAY_FOR_BLOBS_AMINO_TYPE, PAY_FOR_BLOBS_TYPE_URL,
};
pub use proto::BlobProto;
pub use reader::ByteReader;
