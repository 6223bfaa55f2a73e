//! SHA-256 hashing with domain-separation prefixes.

use sha2::{Digest as _, Sha256};

/// A 32-byte SHA-256 digest.
pub type Digest = [u8; 32];

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Prefix byte for leaf hashes.
pub const LEAF_PREFIX: u8 = 0x00;

/// Prefix byte for internal node hashes.
pub const NODE_PREFIX: u8 = 0x01;

/// Hash the concatenation of `parts` without building an intermediate buffer.
pub fn sha256(parts: &[&[u8]]) -> Digest {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// `SHA256(0x00 || data)`.
pub fn hash_leaf(data: &[u8]) -> Digest {
    sha256(&[&[LEAF_PREFIX][..], data])
}

/// `SHA256(0x01 || left || right)`.
pub fn hash_node(left: &[u8], right: &[u8]) -> Digest {
    sha256(&[&[NODE_PREFIX][..], left, right])
}
