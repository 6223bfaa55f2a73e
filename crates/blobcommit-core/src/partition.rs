//! Merkle mountain range sizing.
//!
//! Decides how the shares of a blob are grouped into power-of-two subtrees
//! so that each subtree root can be computed and verified on its own.

use std::ops::Range;

use crate::error::{CoreError, Result};

/// Smallest power of two `>= n` (1 for `n == 0`).
pub fn round_up_pow2(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Largest power of two `<= n`; `n` must be non-zero.
pub fn round_down_pow2(n: usize) -> usize {
    debug_assert!(n > 0);
    1 << (usize::BITS - 1 - n.leading_zeros())
}

/// Smallest integer `r` with `r * r >= n`.
fn ceil_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    // Float seed, then correct for rounding in either direction.
    let mut r = (n as f64).sqrt() as usize;
    while r.saturating_mul(r) < n {
        r += 1;
    }
    while r > 1 && (r - 1) * (r - 1) >= n {
        r -= 1;
    }
    r
}

/// Maximum subtree width for a blob spanning `total_shares` shares.
///
/// `s = round_up_pow2(ceil(total / threshold))`, capped at the power-of-two
/// square root of `s`.
pub fn subtree_width(total_shares: usize, threshold: usize) -> Result<usize> {
    if threshold == 0 {
        return Err(CoreError::InvalidParams(
            "subtree threshold must be non-zero".into(),
        ));
    }
    let s = round_up_pow2(total_shares.div_ceil(threshold));
    let min_square = round_up_pow2(ceil_sqrt(s));
    Ok(min_square.min(s))
}

/// Split `total` into mountain range sizes no wider than `max_width`.
///
/// Emits `max_width` while it fits, then successively smaller powers of two.
/// The emitted sizes always sum to `total`.
pub fn range_sizes(total: usize, max_width: usize) -> Result<Vec<usize>> {
    if max_width == 0 {
        return Err(CoreError::InvalidSubtreeWidth);
    }

    let mut sizes = Vec::with_capacity(total / max_width + usize::BITS as usize);
    let mut remaining = total;
    while remaining > 0 {
        let size = if remaining >= max_width {
            max_width
        } else {
            round_down_pow2(remaining)
        };
        sizes.push(size);
        remaining -= size;
    }
    Ok(sizes)
}

/// Contiguous share index ranges, one per subtree.
pub fn partition(total_shares: usize, threshold: usize) -> Result<Vec<Range<usize>>> {
    let width = subtree_width(total_shares, threshold)?;
    let mut cursor = 0;
    let ranges = range_sizes(total_shares, width)?
        .into_iter()
        .map(|size| {
            let range = cursor..cursor + size;
            cursor += size;
            range
        })
        .collect();
    Ok(ranges)
}
