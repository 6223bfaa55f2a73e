//! The Engine: from payloads to commitments and PayForBlobs messages.

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, trace};

use blobcommit_codec::MsgPayForBlobs;
use blobcommit_core::{
    assemble, subtree_roots, Blob, CommitmentParams, Commitment, CoreError, Namespace,
    SubtreeRoot,
};

use crate::error::Result;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Share size and subtree threshold.
    pub params: CommitmentParams,
    /// Hash subtrees on the rayon pool. Only honored when the crate is
    /// built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            params: CommitmentParams::default(),
            parallel: false,
        }
    }
}

/// A blob ready for submission, with the message that pays for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBlob {
    pub message: MsgPayForBlobs,
    pub blob: Blob,
}

impl PreparedBlob {
    /// Size of the blob data in bytes.
    pub fn blob_size(&self) -> usize {
        self.blob.size()
    }

    /// The commitment carried in the message.
    pub fn commitment(&self) -> &[u8] {
        self.message
            .share_commitments
            .first()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// The main Engine struct.
///
/// Stateless apart from its configuration; every call is a pure function
/// of its inputs.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the share commitment of `blob`.
    pub fn commit(&self, blob: &Blob) -> Result<Commitment> {
        let roots = self.subtree_roots(blob)?;
        let commitment = assemble(&roots);
        debug!(
            namespace = %blob.namespace,
            size = blob.size(),
            subtrees = roots.len(),
            commitment = %commitment,
            "computed share commitment"
        );
        Ok(commitment)
    }

    /// Build the message paying for `blobs`, one entry per blob.
    pub fn pay_for_blobs(&self, signer: &str, blobs: &[Blob]) -> Result<MsgPayForBlobs> {
        let mut msg = MsgPayForBlobs {
            signer: signer.to_owned(),
            namespaces: Vec::with_capacity(blobs.len()),
            blob_sizes: Vec::with_capacity(blobs.len()),
            share_commitments: Vec::with_capacity(blobs.len()),
            share_versions: Vec::with_capacity(blobs.len()),
        };
        for blob in blobs {
            let size = u32::try_from(blob.size()).map_err(|_| CoreError::BlobTooLarge(blob.size()))?;
            let commitment = self.commit(blob)?;
            msg.namespaces.push(blob.namespace.as_bytes().to_vec());
            msg.blob_sizes.push(size);
            msg.share_commitments.push(commitment.as_bytes().to_vec());
            msg.share_versions.push(blob.share_version);
        }
        msg.validate()?;
        Ok(msg)
    }

    /// Serialize `payload` to JSON and wrap it in a blob under `namespace_hex`.
    pub fn prepare_blob<T: Serialize + ?Sized>(
        &self,
        signer: &str,
        namespace_hex: &str,
        payload: &T,
    ) -> Result<PreparedBlob> {
        let namespace = Namespace::from_hex(namespace_hex)?;
        let data = serde_json::to_vec(payload)?;
        trace!(namespace = %namespace, bytes = data.len(), "serialized payload");

        let blob = Blob::new(namespace, Bytes::from(data));
        let message = self.pay_for_blobs(signer, std::slice::from_ref(&blob))?;
        Ok(PreparedBlob { message, blob })
    }

    fn subtree_roots(&self, blob: &Blob) -> Result<Vec<SubtreeRoot>> {
        let roots = self.hash_subtrees(blob)?;
        trace!(
            subtrees = roots.len(),
            parallel = self.config.parallel,
            "built subtree roots"
        );
        Ok(roots)
    }

    fn hash_subtrees(&self, blob: &Blob) -> blobcommit_core::Result<Vec<SubtreeRoot>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return blobcommit_core::par_subtree_roots(blob, &self.config.params);
        }
        subtree_roots(blob, &self.config.params)
    }
}
