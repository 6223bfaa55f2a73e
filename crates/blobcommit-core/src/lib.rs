//! # Blobcommit Core
//!
//! Pure primitives for deriving share commitments over namespaced blobs.
//!
//! This crate contains no I/O, no logging, no networking. It is pure
//! computation: bytes in, commitment bytes out.
//!
//! ## Pipeline
//!
//! - [`share`] - split a [`Blob`] into fixed-size [`Share`]s
//! - [`partition`] - size the Merkle mountain range of subtrees
//! - [`nmt`] - build one namespaced Merkle subtree per range
//! - [`merkle`] - the binary combiner used inside and above subtrees
//! - [`commitment`] - fold the subtree roots into a [`Commitment`]
//!
//! ```rust
//! use blobcommit_core::{create_commitment, Blob, Namespace};
//!
//! let namespace = Namespace::from_hex("01").unwrap();
//! let blob = Blob::new(namespace, b"hello".to_vec());
//! let commitment = create_commitment(&blob).unwrap();
//! assert_eq!(commitment.as_bytes().len(), 32);
//! ```

pub mod blob;
pub mod commitment;
pub mod crypto;
pub mod error;
pub mod merkle;
pub mod namespace;
pub mod nmt;
pub mod params;
pub mod partition;
pub mod share;

pub use blob::Blob;
pub use commitment::{
    assemble, create_commitment, create_commitment_with, subtree_roots, Commitment,
};
#[cfg(feature = "parallel")]
pub use commitment::par_subtree_roots;
pub use crypto::{sha256, Digest};
pub use error::{CoreError, Result};
pub use merkle::{merkle_root, split_point, MerkleHasher, Sha256Hasher};
pub use namespace::{Namespace, NAMESPACE_ID_SIZE, NAMESPACE_SIZE};
pub use nmt::{subtree_root, NamespacedHasher, NmtNode, SubtreeRoot};
pub use params::{CommitmentParams, SHARE_SIZE, SUBTREE_THRESHOLD};
pub use partition::{range_sizes, subtree_width};
pub use share::{split, split_with_size, Share};
