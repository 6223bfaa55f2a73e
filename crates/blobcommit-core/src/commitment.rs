//! Share commitments.
//!
//! A commitment is the plain Merkle root over the roots of a blob's
//! namespaced subtrees:
//!
//! ```text
//! blob -> shares -> mountain range -> subtree roots -> commitment
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use crate::blob::Blob;
use crate::crypto::{Digest, DIGEST_SIZE};
use crate::error::{CoreError, Result};
use crate::merkle::{merkle_root, Sha256Hasher};
use crate::nmt::{subtree_root, SubtreeRoot};
use crate::params::CommitmentParams;
use crate::partition::partition;
use crate::share::{split_with_size, Share};

/// A share commitment: 32 bytes, or empty when there was nothing to commit to.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(Vec<u8>);

impl Commitment {
    /// The zero-length commitment over no subtree roots.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wrap a digest.
    pub fn from_digest(digest: Digest) -> Self {
        Self(digest.to_vec())
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digest, if this is not the empty commitment.
    pub fn digest(&self) -> Option<Digest> {
        self.0.as_slice().try_into().ok()
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| CoreError::InvalidHex(e.to_string()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Commitment(empty)");
        }
        write!(f, "Commitment({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for Commitment {
    fn from(digest: Digest) -> Self {
        Self::from_digest(digest)
    }
}

impl TryFrom<&[u8]> for Commitment {
    type Error = CoreError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        match slice.len() {
            0 | DIGEST_SIZE => Ok(Self(slice.to_vec())),
            n => Err(CoreError::InvalidCommitmentLength(n)),
        }
    }
}

/// Fold subtree roots into a commitment.
///
/// Each root's 90-byte encoding is one leaf of a plain SHA-256 tree.
pub fn assemble(subtree_roots: &[SubtreeRoot]) -> Commitment {
    if subtree_roots.is_empty() {
        return Commitment::empty();
    }
    let leaves: Vec<_> = subtree_roots.iter().map(|r| r.to_bytes()).collect();
    Commitment::from_digest(merkle_root(&Sha256Hasher, &leaves))
}

/// Compute the subtree roots of `blob` under `params`, one range at a time.
pub fn subtree_roots(blob: &Blob, params: &CommitmentParams) -> Result<Vec<SubtreeRoot>> {
    let (shares, ranges) = shares_and_ranges(blob, params)?;
    let namespace = blob.share_namespace();
    Ok(ranges
        .into_iter()
        .map(|range| subtree_root(&namespace, &shares[range]))
        .collect())
}

/// Like [`subtree_roots`], with ranges hashed on the rayon pool.
///
/// Output order matches the range order.
#[cfg(feature = "parallel")]
pub fn par_subtree_roots(blob: &Blob, params: &CommitmentParams) -> Result<Vec<SubtreeRoot>> {
    use rayon::prelude::*;

    let (shares, ranges) = shares_and_ranges(blob, params)?;
    let namespace = blob.share_namespace();
    Ok(ranges
        .into_par_iter()
        .map(|range| subtree_root(&namespace, &shares[range]))
        .collect())
}

fn shares_and_ranges(blob: &Blob, params: &CommitmentParams) -> Result<(Vec<Share>, Vec<Range<usize>>)> {
    params.validate()?;
    let shares = split_with_size(blob, params.share_size)?;
    let ranges = partition(shares.len(), params.subtree_threshold)?;
    Ok((shares, ranges))
}

/// Compute the commitment of `blob` with the default parameters.
pub fn create_commitment(blob: &Blob) -> Result<Commitment> {
    create_commitment_with(blob, &CommitmentParams::default())
}

/// Compute the commitment of `blob` with explicit parameters.
pub fn create_commitment_with(blob: &Blob, params: &CommitmentParams) -> Result<Commitment> {
    let roots = subtree_roots(blob, params)?;
    Ok(assemble(&roots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash_leaf;
    use crate::namespace::Namespace;
    use crate::nmt::NmtNode;
    use proptest::prelude::*;

    fn ns() -> Namespace {
        Namespace::from_hex("01").unwrap()
    }

    #[test]
    fn test_assemble_empty() {
        let c = assemble(&[]);
        assert!(c.is_empty());
        assert_eq!(c.digest(), None);
        assert_eq!(format!("{:?}", c), "Commitment(empty)");
    }

    #[test]
    fn test_assemble_single_root_is_leaf_hash() {
        let root = NmtNode {
            min_ns: ns(),
            max_ns: ns(),
            hash: [0x11; 32],
        };
        let c = assemble(&[root]);
        assert_eq!(c.digest(), Some(hash_leaf(&root.to_bytes())));
    }

    #[test]
    fn test_empty_blob_commitment_golden() {
        let c = create_commitment(&Blob::new(ns(), Vec::new())).unwrap();
        assert_eq!(
            c.to_hex(),
            "2a566a3beca590d168f0529c24ecd56c5ce4189b5a38d0de85d8e915b9ea830c"
        );
    }

    #[test]
    fn test_multi_share_commitment_golden() {
        let data: Vec<u8> = (0..2000).map(|i| (i % 251) as u8).collect();
        let c = create_commitment(&Blob::new(ns(), data)).unwrap();
        assert_eq!(
            c.to_hex(),
            "8c2bc6c97569a4e820ed84928e58bfcf9c669e9727d7e6a18b02c4bcab35b780"
        );
    }

    #[test]
    fn test_multi_subtree_commitment_golden() {
        // 107 shares: 53 subtrees of width 2 and one of width 1.
        let blob = Blob::new(ns(), vec![0x42; 512 * 100]);
        let roots = subtree_roots(&blob, &CommitmentParams::default()).unwrap();
        assert_eq!(roots.len(), 54);

        let c = assemble(&roots);
        assert_eq!(
            c.to_hex(),
            "f1848378293d3eeb0501ce6e2e62268b95a25dc567db29c348497402e0fdd75a"
        );
    }

    #[test]
    fn test_blob_version_commitment_golden() {
        let blob = Blob::new(ns(), b"x".to_vec()).with_version(1);
        let roots = subtree_roots(&blob, &CommitmentParams::default()).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].min_ns.version(), 1);
        assert_eq!(roots[0].min_ns.id(), ns().id());

        assert_eq!(
            assemble(&roots).to_hex(),
            "3806b442407913f6ee60002ed1efdb2f25ff6b02904b793fc3c5d5b57e2994fe"
        );
    }

    #[test]
    fn test_blob_version_changes_commitment() {
        let data: Vec<u8> = (0..2000).map(|i| (i % 251) as u8).collect();
        let c = create_commitment(&Blob::new(ns(), data).with_version(1)).unwrap();
        assert_eq!(
            c.to_hex(),
            "e7489e9c0f9031e5e474667312de74030954d24f84fea79171f1a107b934451d"
        );
    }

    #[test]
    fn test_commitment_hex_roundtrip() {
        let c = create_commitment(&Blob::new(ns(), b"hello".to_vec())).unwrap();
        assert_eq!(Commitment::from_hex(&c.to_hex()).unwrap(), c);
        assert!(Commitment::from_hex("abcd").is_err());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = CommitmentParams {
            share_size: 8,
            subtree_threshold: 64,
        };
        assert!(create_commitment_with(&Blob::new(ns(), b"x".to_vec()), &params).is_err());
    }

    #[test]
    fn test_namespace_changes_commitment() {
        let a = create_commitment(&Blob::new(ns(), b"same".to_vec())).unwrap();
        let b = create_commitment(&Blob::new(Namespace::from_hex("02").unwrap(), b"same".to_vec()))
            .unwrap();
        assert_ne!(a, b);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_roots_match_serial() {
        let blob = Blob::new(ns(), vec![0x42; 512 * 100]);
        let params = CommitmentParams::default();
        assert_eq!(
            par_subtree_roots(&blob, &params).unwrap(),
            subtree_roots(&blob, &params).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_commitment_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..8192)) {
            let blob = Blob::new(ns(), data);
            let c1 = create_commitment(&blob).unwrap();
            let c2 = create_commitment(&blob).unwrap();
            prop_assert_eq!(c1.as_bytes().len(), 32);
            prop_assert_eq!(c1, c2);
        }

        #[test]
        fn prop_single_byte_flip_changes_commitment(
            data in prop::collection::vec(any::<u8>(), 1..4096),
            index in any::<prop::sample::Index>(),
        ) {
            let mut flipped = data.clone();
            let i = index.index(flipped.len());
            flipped[i] ^= 0x01;

            let a = create_commitment(&Blob::new(ns(), data)).unwrap();
            let b = create_commitment(&Blob::new(ns(), flipped)).unwrap();
            prop_assert_ne!(a, b);
        }
    }
}
