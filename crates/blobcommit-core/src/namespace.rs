//! Namespace: the 29-byte identifier every share and tree node carries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Size of the namespace ID (without the version byte).
pub const NAMESPACE_ID_SIZE: usize = 28;

/// Size of a full namespace: 1 version byte + 28 ID bytes.
pub const NAMESPACE_SIZE: usize = 1 + NAMESPACE_ID_SIZE;

/// Namespace version used by blobs built from hex input.
pub const NAMESPACE_VERSION_ZERO: u8 = 0;

/// Number of random trailing bytes in [`Namespace::random`].
const RANDOM_ID_SUFFIX: usize = 8;

/// A 29-byte namespace: `version || id`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Namespace(pub [u8; NAMESPACE_SIZE]);

impl Namespace {
    /// Build a namespace from a version and a 28-byte ID.
    pub fn new(version: u8, id: [u8; NAMESPACE_ID_SIZE]) -> Self {
        let mut bytes = [0u8; NAMESPACE_SIZE];
        bytes[0] = version;
        bytes[1..].copy_from_slice(&id);
        Self(bytes)
    }

    /// Parse a version-zero namespace from a hex ID.
    ///
    /// An optional `0x` prefix is stripped, then the ID is left-padded with
    /// zeros to 56 hex characters. Odd lengths are fine since padding happens
    /// before decoding.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_hex_with_version(NAMESPACE_VERSION_ZERO, s)
    }

    /// Parse a namespace from a hex ID with an explicit version byte.
    pub fn from_hex_with_version(version: u8, s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() > NAMESPACE_ID_SIZE * 2 {
            return Err(CoreError::InvalidNamespace(format!(
                "{} hex characters exceeds the maximum of {}",
                digits.len(),
                NAMESPACE_ID_SIZE * 2
            )));
        }

        let padded = format!("{:0>width$}", digits, width = NAMESPACE_ID_SIZE * 2);
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        hex::decode_to_slice(&padded, &mut id)
            .map_err(|e| CoreError::InvalidNamespace(e.to_string()))?;
        Ok(Self::new(version, id))
    }

    /// Generate a random version-zero namespace.
    ///
    /// Only the trailing 8 bytes are random; the rest of the ID is zero.
    pub fn random() -> Self {
        use rand::Rng;
        let suffix: [u8; RANDOM_ID_SUFFIX] = rand::thread_rng().gen();
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - RANDOM_ID_SUFFIX..].copy_from_slice(&suffix);
        Self::new(NAMESPACE_VERSION_ZERO, id)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; NAMESPACE_SIZE] {
        &self.0
    }

    /// The version byte.
    pub const fn version(&self) -> u8 {
        self.0[0]
    }

    /// The 28-byte ID.
    pub fn id(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Convert to hex string (version byte included).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Hex of the ID alone; the inverse of [`Namespace::from_hex_with_version`].
    pub fn id_hex(&self) -> String {
        hex::encode(self.id())
    }

    /// The all-zero namespace (used by the empty subtree sentinel).
    pub const ZERO: Self = Self([0u8; NAMESPACE_SIZE]);
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace(v{}, {})", self.version(), hex::encode(self.id()))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Namespace {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; NAMESPACE_SIZE]> for Namespace {
    fn from(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Namespace {
    type Error = CoreError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        let arr: [u8; NAMESPACE_SIZE] = slice.try_into().map_err(|_| {
            CoreError::InvalidNamespace(format!(
                "expected {} bytes, got {}",
                NAMESPACE_SIZE,
                slice.len()
            ))
        })?;
        Ok(Self(arr))
    }
}
