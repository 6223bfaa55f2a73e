//! Binary Merkle combiner.
//!
//! The tree shape is fixed by [`split_point`]: the left subtree always holds
//! the largest power of two strictly smaller than the item count. Roots of
//! power-of-two subtrees computed independently therefore compose into the
//! same root as a single pass over all items.
//!
//! The hash function is an explicit capability ([`MerkleHasher`]) so the same
//! recursion serves both plain and namespaced trees.

use crate::crypto::{self, Digest};
use crate::error::{CoreError, Result};

/// Leaf and node hashing for one kind of tree.
pub trait MerkleHasher {
    /// The value stored at every tree position.
    type Node: Clone;

    /// Hash one leaf item.
    fn hash_leaf(&self, data: &[u8]) -> Self::Node;

    /// Combine two children.
    fn hash_node(&self, left: &Self::Node, right: &Self::Node) -> Self::Node;

    /// The root of a tree with no leaves.
    fn empty_root(&self) -> Self::Node;
}

/// Plain SHA-256 hasher: `H(0x00 || leaf)` and `H(0x01 || left || right)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    type Node = Digest;

    fn hash_leaf(&self, data: &[u8]) -> Digest {
        crypto::hash_leaf(data)
    }

    fn hash_node(&self, left: &Digest, right: &Digest) -> Digest {
        crypto::hash_node(left, right)
    }

    fn empty_root(&self) -> Digest {
        [0u8; crypto::DIGEST_SIZE]
    }
}

/// Number of items that go into the left subtree of an `n`-item tree.
///
/// Returns 0 for `n == 1` (a single item is never split) and
/// [`CoreError::EmptySplitInput`] for `n == 0`.
pub fn split_point(n: usize) -> Result<usize> {
    match n {
        0 => Err(CoreError::EmptySplitInput),
        1 => Ok(0),
        n => Ok(largest_pow2_below(n)),
    }
}

/// Largest power of two strictly less than `n`; `n` must be at least 2.
fn largest_pow2_below(n: usize) -> usize {
    debug_assert!(n >= 2);
    1 << (usize::BITS - 1 - (n - 1).leading_zeros())
}

/// Compute the root of `items` with `hasher`.
pub fn merkle_root<H, T>(hasher: &H, items: &[T]) -> H::Node
where
    H: MerkleHasher + ?Sized,
    T: AsRef<[u8]>,
{
    match items {
        [] => hasher.empty_root(),
        [item] => hasher.hash_leaf(item.as_ref()),
        _ => {
            let (left, right) = items.split_at(largest_pow2_below(items.len()));
            let left = merkle_root(hasher, left);
            let right = merkle_root(hasher, right);
            hasher.hash_node(&left, &right)
        }
    }
}
