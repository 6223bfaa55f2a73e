//! Commitment parameters.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::share::FIRST_SHARE_HEADER_SIZE;

/// Size of every share in bytes.
pub const SHARE_SIZE: usize = 512;

/// Number of shares per subtree before the mountain range widens.
pub const SUBTREE_THRESHOLD: usize = 64;

/// Share and subtree sizing used to derive a commitment.
///
/// Commitments are only comparable when produced with identical parameters;
/// the defaults are the ones a data-availability network expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentParams {
    /// Size of every share in bytes.
    pub share_size: usize,
    /// Subtree root threshold.
    pub subtree_threshold: usize,
}

impl Default for CommitmentParams {
    fn default() -> Self {
        Self {
            share_size: SHARE_SIZE,
            subtree_threshold: SUBTREE_THRESHOLD,
        }
    }
}

impl CommitmentParams {
    /// Check that shares can carry at least one payload byte and that the
    /// threshold is non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.share_size <= FIRST_SHARE_HEADER_SIZE {
            return Err(CoreError::InvalidParams(format!(
                "share size {} must exceed the {}-byte first share header",
                self.share_size, FIRST_SHARE_HEADER_SIZE
            )));
        }
        if self.subtree_threshold == 0 {
            return Err(CoreError::InvalidParams(
                "subtree threshold must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let params = CommitmentParams::default();
        assert_eq!(params.share_size, 512);
        assert_eq!(params.subtree_threshold, 64);
        params.validate().unwrap();
    }

    #[test]
    fn test_rejects_share_without_payload_room() {
        let params = CommitmentParams {
            share_size: FIRST_SHARE_HEADER_SIZE,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(CoreError::InvalidParams(_))));
    }

    #[test]
    fn test_rejects_zero_threshold() {
        let params = CommitmentParams {
            subtree_threshold: 0,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(CoreError::InvalidParams(_))));
    }
}
