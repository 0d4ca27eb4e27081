//! Spreading a key set over a table under a given hash function.

use smallvec::SmallVec;

use crate::hash::HashFunction;
use crate::types::Key;

/// The keys that landed in one slot, in input order.
///
/// Accepted draws keep buckets tiny on average, so chains stay inline.
pub type Chain = SmallVec<[Key; 2]>;

/// Number of keys per slot.
///
/// Counts are `u64`, so a slot cannot wrap before `keys.len()` does.
pub fn compute_counts(keys: &[Key], table_size: usize, hash: &HashFunction) -> Vec<u64> {
    debug_assert_eq!(table_size, hash.table_size());
    let mut counts = vec![0u64; table_size];
    for &key in keys {
        counts[hash.slot(key)] += 1;
    }
    counts
}

/// The keys of each slot, preserving their relative input order.
pub fn compute_chains(keys: &[Key], table_size: usize, hash: &HashFunction) -> Vec<Chain> {
    debug_assert_eq!(table_size, hash.table_size());
    let mut chains = vec![Chain::new(); table_size];
    for &key in keys {
        chains[hash.slot(key)].push(key);
    }
    chains
}

/// Whether no slot holds more than one key.
#[inline]
pub fn is_collision_free(counts: &[u64]) -> bool {
    counts.iter().all(|&count| count <= 1)
}
