//! # Modular Affine Hash Family
//!
//! `h(k) = ((a * k + b) mod p) mod m` with `p = 2^31 - 1`. Drawing `a` from
//! `[1, p)` and `b` from `[0, p)` gives a universal family: two fixed distinct
//! keys collide with probability at most `1 / m`. Both levels of the fixed set
//! are built from draws of this family.

use rand::Rng;

use crate::types::{Key, Slot, PRIME_MODULUS};

/// Remainder of `dividend / divisor`, normalized into `[0, divisor)`.
///
/// Rust's `%` keeps the sign of the dividend, so a negative remainder is
/// lifted by adding the divisor once.
#[inline(always)]
fn modulo(dividend: i128, divisor: i128) -> i128 {
    let result = dividend % divisor;
    if result < 0 {
        result + divisor
    } else {
        result
    }
}

/// One member of the modular affine family, bound to a table size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFunction {
    multiplier: i64,
    offset: i64,
    table_size: usize,
}

impl HashFunction {
    /// Creates a hash function with explicit parameters.
    ///
    /// `table_size` must be non-zero for [`slot`](Self::slot) to be defined.
    pub fn new(multiplier: i64, offset: i64, table_size: usize) -> Self {
        Self {
            multiplier,
            offset,
            table_size,
        }
    }

    /// Draws a random member of the family for a table of `table_size` slots.
    pub fn generate<R: Rng + ?Sized>(table_size: usize, rng: &mut R) -> Self {
        let multiplier = rng.gen_range(1..PRIME_MODULUS);
        let offset = rng.gen_range(0..PRIME_MODULUS);
        Self::new(multiplier, offset, table_size)
    }

    /// Maps `key` to a slot in `[0, table_size)`.
    #[inline]
    pub fn slot(&self, key: Key) -> Slot {
        debug_assert!(self.table_size > 0, "hash evaluated on an empty table");
        // a < 2^31 and |key| <= 2^63, so the product fits comfortably in i128.
        let raw = i128::from(self.multiplier) * i128::from(key) + i128::from(self.offset);
        let reduced = modulo(raw, i128::from(PRIME_MODULUS));
        modulo(reduced, self.table_size as i128) as Slot
    }

    /// The multiplier `a`, in `[1, p)` for drawn functions.
    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// The additive offset `b`, in `[0, p)` for drawn functions.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Number of slots `m` this function maps into.
    pub fn table_size(&self) -> usize {
        self.table_size
    }
}
