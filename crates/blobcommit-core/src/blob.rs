//! Blob: a namespaced payload waiting to be committed to.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::namespace::Namespace;

/// Blob version used by the reference flow.
pub const BLOB_VERSION_ZERO: u8 = 0;

/// Share version used by the reference flow.
pub const SHARE_VERSION_ZERO: u32 = 0;

/// An immutable namespaced payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// The namespace every share of this blob is tagged with.
    pub namespace: Namespace,

    /// Blob version, folded into each share's info byte.
    pub version: u8,

    /// Share format version, carried in the transaction message.
    pub share_version: u32,

    /// The raw payload.
    pub data: Bytes,
}

impl Blob {
    /// Create a version-zero blob.
    pub fn new(namespace: Namespace, data: impl Into<Bytes>) -> Self {
        Self {
            namespace,
            version: BLOB_VERSION_ZERO,
            share_version: SHARE_VERSION_ZERO,
            data: data.into(),
        }
    }

    /// Set the blob version.
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Set the share version.
    pub fn with_share_version(mut self, share_version: u32) -> Self {
        self.share_version = share_version;
        self
    }

    /// The namespace written into each share and tree leaf.
    ///
    /// Its leading byte is the blob version, not the namespace version; the
    /// 28-byte ID is kept.
    pub fn share_namespace(&self) -> Namespace {
        let mut bytes = *self.namespace.as_bytes();
        bytes[0] = self.version;
        Namespace::from_bytes(bytes)
    }

    /// Payload size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
