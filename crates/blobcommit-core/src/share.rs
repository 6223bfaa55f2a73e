//! Share splitting.
//!
//! A blob is laid out over fixed-size shares:
//!
//! ```text
//! first:        blob.version (1) | namespace id (28) | info (1) | data_len u32 BE (4) | payload | 0-padding
//! continuation: blob.version (1) | namespace id (28) | info (1) | payload | 0-padding
//! ```
//!
//! `info = (blob.version << 1) | first_share_flag`. The 29-byte prefix is
//! [`Blob::share_namespace`].

use std::fmt;

use crate::blob::Blob;
use crate::error::{CoreError, Result};
use crate::namespace::{Namespace, NAMESPACE_SIZE};
use crate::params::SHARE_SIZE;

/// Size of the sequence length prefix carried by the first share.
pub const SEQUENCE_LEN_SIZE: usize = 4;

/// Header size of a continuation share.
pub const CONTINUATION_SHARE_HEADER_SIZE: usize = NAMESPACE_SIZE + 1;

/// Header size of the first share of a sequence.
pub const FIRST_SHARE_HEADER_SIZE: usize = CONTINUATION_SHARE_HEADER_SIZE + SEQUENCE_LEN_SIZE;

const INFO_BYTE_OFFSET: usize = NAMESPACE_SIZE;

/// One fixed-size share.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Share(Vec<u8>);

impl Share {
    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the share, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The namespace prefix (blob version followed by the namespace ID).
    pub fn namespace(&self) -> Namespace {
        let mut bytes = [0u8; NAMESPACE_SIZE];
        bytes.copy_from_slice(&self.0[..NAMESPACE_SIZE]);
        Namespace::from_bytes(bytes)
    }

    /// The info byte following the namespace.
    pub fn info_byte(&self) -> u8 {
        self.0[INFO_BYTE_OFFSET]
    }

    /// Whether this share starts a sequence.
    pub fn is_first(&self) -> bool {
        self.info_byte() & 0x01 == 0x01
    }

    /// The payload length recorded in the first share, `None` for continuations.
    pub fn sequence_len(&self) -> Option<u32> {
        if !self.is_first() {
            return None;
        }
        let start = CONTINUATION_SHARE_HEADER_SIZE;
        let mut len = [0u8; SEQUENCE_LEN_SIZE];
        len.copy_from_slice(&self.0[start..start + SEQUENCE_LEN_SIZE]);
        Some(u32::from_be_bytes(len))
    }

    /// Everything after the header, padding included.
    pub fn payload(&self) -> &[u8] {
        if self.is_first() {
            &self.0[FIRST_SHARE_HEADER_SIZE..]
        } else {
            &self.0[CONTINUATION_SHARE_HEADER_SIZE..]
        }
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Share(first={}, info={:#04x}, {} bytes)",
            self.is_first(),
            self.info_byte(),
            self.0.len()
        )
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compute the info byte for a share.
pub fn info_byte(version: u8, is_first_share: bool) -> u8 {
    (version << 1) | u8::from(is_first_share)
}

/// Payload bytes the first share of `share_size` can hold.
fn first_share_capacity(share_size: usize) -> Result<usize> {
    match share_size.checked_sub(FIRST_SHARE_HEADER_SIZE) {
        Some(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(CoreError::InvalidParams(format!(
            "share size {} leaves no room for payload",
            share_size
        ))),
    }
}

/// Number of shares a payload of `data_len` bytes occupies.
///
/// Always at least 1: an empty payload still produces one padded share.
/// Fails with `InvalidParams` when `share_size` cannot hold the first header
/// plus one payload byte.
pub fn share_count(data_len: usize, share_size: usize) -> Result<usize> {
    let first_capacity = first_share_capacity(share_size)?;
    if data_len <= first_capacity {
        return Ok(1);
    }
    let continuation_capacity = share_size - CONTINUATION_SHARE_HEADER_SIZE;
    Ok(1 + (data_len - first_capacity).div_ceil(continuation_capacity))
}

/// Split a blob into `SHARE_SIZE` shares.
pub fn split(blob: &Blob) -> Result<Vec<Share>> {
    split_with_size(blob, SHARE_SIZE)
}

/// Split a blob into shares of `share_size` bytes.
pub fn split_with_size(blob: &Blob, share_size: usize) -> Result<Vec<Share>> {
    let count = share_count(blob.data.len(), share_size)?;
    let data_len =
        u32::try_from(blob.data.len()).map_err(|_| CoreError::BlobTooLarge(blob.data.len()))?;

    let prefix = blob.share_namespace();
    let mut shares = Vec::with_capacity(count);
    let mut remaining: &[u8] = &blob.data;
    let mut is_first = true;

    loop {
        let mut buf = Vec::with_capacity(share_size);
        buf.extend_from_slice(prefix.as_bytes());
        buf.push(info_byte(blob.version, is_first));
        if is_first {
            buf.extend_from_slice(&data_len.to_be_bytes());
        }

        let take = remaining.len().min(share_size - buf.len());
        buf.extend_from_slice(&remaining[..take]);
        remaining = &remaining[take..];
        buf.resize(share_size, 0);
        shares.push(Share(buf));

        if remaining.is_empty() {
            break;
        }
        is_first = false;
    }

    Ok(shares)
}
