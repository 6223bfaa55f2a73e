//! Namespaced Merkle subtrees.
//!
//! Every node carries the namespace range it covers:
//!
//! ```text
//! node = min_ns (29) | max_ns (29) | hash (32)
//! leaf = (ns, ns, H(0x00 || ns || share))
//! node = (min_l, max_l, H(0x01 || left || right))
//! ```
//!
//! Subtrees are only ever built over the shares of one blob, so every leaf
//! carries the same namespace, the blob's [`share_namespace`] (blob version
//! followed by the namespace ID). Internal nodes keep the left child's range;
//! the right child's range is hashed but not merged.
//!
//! [`share_namespace`]: crate::blob::Blob::share_namespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::{self, Digest, DIGEST_SIZE};
use crate::merkle::{merkle_root, MerkleHasher};
use crate::namespace::{Namespace, NAMESPACE_SIZE};
use crate::share::Share;

/// Encoded size of a node: two namespaces and a digest.
pub const NMT_NODE_SIZE: usize = 2 * NAMESPACE_SIZE + DIGEST_SIZE;

/// A namespaced Merkle tree node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NmtNode {
    pub min_ns: Namespace,
    pub max_ns: Namespace,
    pub hash: Digest,
}

/// The root of one namespaced subtree.
pub type SubtreeRoot = NmtNode;

impl NmtNode {
    /// The empty-subtree sentinel: all zeros.
    pub const EMPTY: Self = Self {
        min_ns: Namespace::ZERO,
        max_ns: Namespace::ZERO,
        hash: [0u8; DIGEST_SIZE],
    };

    /// Serialize as `min_ns || max_ns || hash`.
    pub fn to_bytes(&self) -> [u8; NMT_NODE_SIZE] {
        let mut out = [0u8; NMT_NODE_SIZE];
        out[..NAMESPACE_SIZE].copy_from_slice(self.min_ns.as_bytes());
        out[NAMESPACE_SIZE..2 * NAMESPACE_SIZE].copy_from_slice(self.max_ns.as_bytes());
        out[2 * NAMESPACE_SIZE..].copy_from_slice(&self.hash);
        out
    }

    /// Parse from the 90-byte encoding.
    pub fn from_bytes(bytes: &[u8; NMT_NODE_SIZE]) -> Self {
        let mut min_ns = [0u8; NAMESPACE_SIZE];
        let mut max_ns = [0u8; NAMESPACE_SIZE];
        let mut hash = [0u8; DIGEST_SIZE];
        min_ns.copy_from_slice(&bytes[..NAMESPACE_SIZE]);
        max_ns.copy_from_slice(&bytes[NAMESPACE_SIZE..2 * NAMESPACE_SIZE]);
        hash.copy_from_slice(&bytes[2 * NAMESPACE_SIZE..]);
        Self {
            min_ns: Namespace::from_bytes(min_ns),
            max_ns: Namespace::from_bytes(max_ns),
            hash,
        }
    }
}

impl fmt::Debug for NmtNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NmtNode({}..{}, {})",
            self.min_ns,
            self.max_ns,
            &hex::encode(self.hash)[..16]
        )
    }
}

/// Namespaced hashing over `ns || share` leaf items.
///
/// The leaf namespace is read from the first 29 bytes of the item.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespacedHasher;

impl MerkleHasher for NamespacedHasher {
    type Node = NmtNode;

    fn hash_leaf(&self, data: &[u8]) -> NmtNode {
        let mut ns = [0u8; NAMESPACE_SIZE];
        let prefix = data.len().min(NAMESPACE_SIZE);
        ns[..prefix].copy_from_slice(&data[..prefix]);
        let ns = Namespace::from_bytes(ns);
        NmtNode {
            min_ns: ns,
            max_ns: ns,
            hash: crypto::hash_leaf(data),
        }
    }

    fn hash_node(&self, left: &NmtNode, right: &NmtNode) -> NmtNode {
        NmtNode {
            min_ns: left.min_ns,
            max_ns: left.max_ns,
            hash: crypto::hash_node(&left.to_bytes(), &right.to_bytes()),
        }
    }

    fn empty_root(&self) -> NmtNode {
        NmtNode::EMPTY
    }
}

/// Leaf item for a share: `ns || share`.
pub fn leaf_item(namespace: &Namespace, share: &Share) -> Vec<u8> {
    let mut item = Vec::with_capacity(NAMESPACE_SIZE + share.len());
    item.extend_from_slice(namespace.as_bytes());
    item.extend_from_slice(share.as_bytes());
    item
}

/// Build the namespaced subtree over `shares` and return its root.
pub fn subtree_root(namespace: &Namespace, shares: &[Share]) -> SubtreeRoot {
    let leaves: Vec<Vec<u8>> = shares.iter().map(|s| leaf_item(namespace, s)).collect();
    merkle_root(&NamespacedHasher, &leaves)
}
