//! Core types and constants for the fixed set.

/// A member of the indexed universe.
pub type Key = i64;

/// An index into a first- or second-level table.
pub type Slot = usize;

/// Modulus of the universal hash family, the Mersenne prime 2^31 - 1.
pub const PRIME_MODULUS: i64 = 2_147_483_647;

/// A first-level draw is accepted once `sum(bucket_size^2) <= SPACE_BOUND_MULTIPLIER * n`.
pub const SPACE_BOUND_MULTIPLIER: u64 = 3;

/// Legacy marker for an empty second-level slot.
///
/// Slots are stored as `Option<Key>`, so this value carries no meaning inside
/// the structure. It is kept so callers migrating from sentinel-encoded tables
/// can check that the old reserved value still behaves like any other non-member.
pub const EMPTY_SLOT_SENTINEL: Key = 1_000_000_001;

/// Counters collected while building a [`crate::FixedSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of distinct keys indexed.
    pub keys: usize,
    /// First-level hash draws, including the accepted one.
    pub first_level_attempts: usize,
    /// Second-level hash draws summed over every bucket.
    pub second_level_attempts: usize,
    /// Sum of squared bucket sizes under the accepted first-level hash.
    pub sum_of_squares: u64,
    /// Total second-level slots allocated.
    pub slots: usize,
    /// Size of the fullest first-level bucket.
    pub largest_bucket: usize,
}
