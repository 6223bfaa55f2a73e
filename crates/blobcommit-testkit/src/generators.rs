//! Proptest generators for property-based testing.

use proptest::prelude::*;

use blobcommit_codec::MsgPayForBlobs;
use blobcommit_core::{Blob, Namespace, NAMESPACE_ID_SIZE};

/// Generate a version-zero namespace with an arbitrary ID.
pub fn namespace() -> impl Strategy<Value = Namespace> {
    any::<[u8; NAMESPACE_ID_SIZE]>().prop_map(|id| Namespace::new(0, id))
}

/// Generate a namespace hex string as a user would type it: up to 56 hex
/// digits, optionally prefixed with `0x`.
pub fn namespace_hex() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9a-fA-F]{0,56}").prop_map(|(prefixed, digits)| {
        if prefixed {
            format!("0x{digits}")
        } else {
            digits
        }
    })
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a blob whose data spans up to `max_shares` default-size shares.
pub fn blob(max_shares: usize) -> impl Strategy<Value = Blob> {
    (namespace(), payload(max_shares * 512)).prop_map(|(ns, data)| Blob::new(ns, data))
}

/// Like [`blob`], with a blob version in `0..=127` (the info byte keeps seven bits).
pub fn versioned_blob(max_shares: usize) -> impl Strategy<Value = Blob> {
    (blob(max_shares), 0u8..=127).prop_map(|(blob, version)| blob.with_version(version))
}

/// Parameters for generating a message.
#[derive(Debug, Clone)]
pub struct MessageParams {
    pub signer: String,
    pub namespaces: Vec<Namespace>,
    pub blob_sizes: Vec<u32>,
    pub commitments: Vec<[u8; 32]>,
}

impl Arbitrary for MessageParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1usize..=5)
            .prop_flat_map(|n| {
                (
                    "celestia1[a-z0-9]{38}",
                    prop::collection::vec(namespace(), n),
                    prop::collection::vec(any::<u32>(), n),
                    prop::collection::vec(any::<[u8; 32]>(), n),
                )
            })
            .prop_map(|(signer, namespaces, blob_sizes, commitments)| MessageParams {
                signer,
                namespaces,
                blob_sizes,
                commitments,
            })
            .boxed()
    }
}

/// Build a message from parameters.
pub fn message_from_params(params: &MessageParams) -> MsgPayForBlobs {
    MsgPayForBlobs {
        signer: params.signer.clone(),
        namespaces: params
            .namespaces
            .iter()
            .map(|ns| ns.as_bytes().to_vec())
            .collect(),
        blob_sizes: params.blob_sizes.clone(),
        share_commitments: params.commitments.iter().map(|c| c.to_vec()).collect(),
        share_versions: vec![0; params.namespaces.len()],
    }
}
