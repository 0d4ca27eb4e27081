use crate::error::{FixedSetError, Result};

/// Multiplies two `u64` values, failing instead of wrapping.
#[inline]
pub fn checked_mul(lhs: u64, rhs: u64) -> Result<u64> {
    lhs.checked_mul(rhs)
        .ok_or(FixedSetError::ArithmeticOverflow { op: "*", lhs, rhs })
}

/// Adds two `u64` values, failing instead of wrapping.
#[inline]
pub fn checked_add(lhs: u64, rhs: u64) -> Result<u64> {
    lhs.checked_add(rhs)
        .ok_or(FixedSetError::ArithmeticOverflow { op: "+", lhs, rhs })
}

/// Returns `size * size`, the slot count of a second-level table holding `size` keys.
#[inline]
pub fn square(size: usize) -> Result<usize> {
    size.checked_mul(size)
        .ok_or(FixedSetError::ArithmeticOverflow {
            op: "*",
            lhs: size as u64,
            rhs: size as u64,
        })
}

/// Sum of squared bucket occupancies, accumulated with overflow checks.
pub fn sum_of_squares(counts: &[u64]) -> Result<u64> {
    counts.iter().try_fold(0u64, |acc, &count| {
        checked_add(acc, checked_mul(count, count)?)
    })
}
