//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the commitment of known inputs so that every
//! implementation can be checked against the same hex values.

use serde::Serialize;

use blobcommit_core::partition::partition;
use blobcommit_core::{create_commitment, split, Blob, Namespace, SUBTREE_THRESHOLD};

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Namespace as accepted by `Namespace::from_hex`.
    pub namespace_hex: &'static str,
    /// Blob version, written into every share prefix and info byte.
    pub blob_version: u8,
    /// Builds the blob data.
    #[serde(skip)]
    pub data: fn() -> Vec<u8>,
    /// Expected number of shares.
    pub expected_shares: usize,
    /// Expected number of subtrees.
    pub expected_subtrees: usize,
    /// Expected commitment (hex).
    pub expected_commitment: &'static str,
}

impl GoldenVector {
    /// Build the blob this vector describes.
    pub fn blob(&self) -> Blob {
        let namespace = Namespace::from_hex(self.namespace_hex)
            .unwrap_or_else(|e| panic!("vector '{}' has a bad namespace: {e}", self.name));
        Blob::new(namespace, (self.data)()).with_version(self.blob_version)
    }
}

fn empty() -> Vec<u8> {
    Vec::new()
}

fn queue_command() -> Vec<u8> {
    br#"{"AddToQueue":{"url":"https://youtu.be/abc12345678"}}"#.to_vec()
}

fn hello() -> Vec<u8> {
    b"hello".to_vec()
}

fn single_x() -> Vec<u8> {
    b"x".to_vec()
}

fn mod_251_ramp() -> Vec<u8> {
    (0..2000).map(|i| (i % 251) as u8).collect()
}

fn hundred_shares_of_b() -> Vec<u8> {
    vec![0x42; 512 * 100]
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty blob",
            namespace_hex: "01",
            blob_version: 0,
            data: empty,
            expected_shares: 1,
            expected_subtrees: 1,
            expected_commitment: "2a566a3beca590d168f0529c24ecd56c5ce4189b5a38d0de85d8e915b9ea830c",
        },
        GoldenVector {
            name: "AddToQueue command",
            namespace_hex: "01",
            blob_version: 0,
            data: queue_command,
            expected_shares: 1,
            expected_subtrees: 1,
            expected_commitment: "91beb7f6c98281065b1a8cf420304f4bb1f8bcd7c99d125996fc37d32232a36f",
        },
        GoldenVector {
            name: "hello under deadbeef",
            namespace_hex: "deadbeef",
            blob_version: 0,
            data: hello,
            expected_shares: 1,
            expected_subtrees: 1,
            expected_commitment: "f81ebc6d126d5c8f513b8ba8f7f0ee75b52850bab2b63615ec9a6aaf2de2a78b",
        },
        GoldenVector {
            name: "2000 byte ramp",
            namespace_hex: "01",
            blob_version: 0,
            data: mod_251_ramp,
            expected_shares: 5,
            expected_subtrees: 5,
            expected_commitment: "8c2bc6c97569a4e820ed84928e58bfcf9c669e9727d7e6a18b02c4bcab35b780",
        },
        GoldenVector {
            name: "107 shares in 54 subtrees",
            namespace_hex: "01",
            blob_version: 0,
            data: hundred_shares_of_b,
            expected_shares: 107,
            expected_subtrees: 54,
            expected_commitment: "f1848378293d3eeb0501ce6e2e62268b95a25dc567db29c348497402e0fdd75a",
        },
        GoldenVector {
            name: "blob version 1",
            namespace_hex: "01",
            blob_version: 1,
            data: single_x,
            expected_shares: 1,
            expected_subtrees: 1,
            expected_commitment: "3806b442407913f6ee60002ed1efdb2f25ff6b02904b793fc3c5d5b57e2994fe",
        },
        GoldenVector {
            name: "2000 byte ramp at blob version 1",
            namespace_hex: "01",
            blob_version: 1,
            data: mod_251_ramp,
            expected_shares: 5,
            expected_subtrees: 5,
            expected_commitment: "e7489e9c0f9031e5e474667312de74030954d24f84fea79171f1a107b934451d",
        },
    ]
}

/// Result of checking one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorOutcome {
    pub name: String,
    pub matches: bool,
    pub commitment: String,
}

/// Recompute every vector and report whether each matches.
pub fn verify_all_vectors() -> Vec<VectorOutcome> {
    all_vectors()
        .iter()
        .map(|v| {
            let blob = v.blob();
            let commitment = create_commitment(&blob)
                .map(|c| c.to_hex())
                .unwrap_or_else(|e| format!("error: {e}"));
            let shares = split(&blob).map(|s| s.len()).unwrap_or(0);
            let subtrees = partition(shares, SUBTREE_THRESHOLD)
                .map(|r| r.len())
                .unwrap_or(0);

            let matches = commitment == v.expected_commitment
                && shares == v.expected_shares
                && subtrees == v.expected_subtrees;

            VectorOutcome {
                name: v.name.to_string(),
                matches,
                commitment,
            }
        })
        .collect()
}

/// Render the vectors as JSON for other implementations to consume.
pub fn vectors_json() -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct Exported {
        #[serde(flatten)]
        vector: GoldenVector,
        data_hex: String,
    }

    let exported: Vec<Exported> = all_vectors()
        .into_iter()
        .map(|vector| Exported {
            data_hex: hex::encode((vector.data)()),
            vector,
        })
        .collect();
    serde_json::to_string_pretty(&exported)
}
