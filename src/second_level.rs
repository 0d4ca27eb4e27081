//! # Second-Level Table
//!
//! One table per first-level bucket. A bucket of `k` keys gets `k^2` slots,
//! which makes the expected number of colliding pairs under a random draw
//! `C(k, 2) / k^2 < 1/2`. By Markov's inequality each draw is collision free
//! with probability at least 1/2, so the retry loop below finishes in O(1)
//! expected rounds.

use log::{error, trace};
use rand::Rng;

use crate::distribution::{compute_chains, compute_counts, is_collision_free, Chain};
use crate::error::{FixedSetError, Level, Result};
use crate::hash::HashFunction;
use crate::types::Key;
use crate::utils::checked::square;

/// A collision-free table for the keys of a single first-level bucket.
#[derive(Debug, Clone, Default)]
pub struct SecondLevelTable {
    /// `None` exactly when the bucket was empty.
    hash: Option<HashFunction>,
    slots: Box<[Option<Key>]>,
    attempts: usize,
}

impl SecondLevelTable {
    /// Builds a table for `keys`, redrawing the hash until no two keys share a slot.
    ///
    /// `keys` must be free of duplicates. Fails with `AttemptsExhausted` once
    /// `max_attempts` draws were all rejected.
    pub fn build<R: Rng + ?Sized>(keys: &[Key], rng: &mut R, max_attempts: usize) -> Result<Self> {
        if keys.is_empty() {
            return Ok(Self::default());
        }

        let table_size = square(keys.len())?;
        for attempt in 1..=max_attempts {
            let hash = HashFunction::generate(table_size, rng);
            let counts = compute_counts(keys, table_size, &hash);
            if !is_collision_free(&counts) {
                trace!(
                    "second-level draw {} rejected for bucket of {} keys",
                    attempt,
                    keys.len()
                );
                continue;
            }

            let chains = compute_chains(keys, table_size, &hash);
            return Ok(Self {
                hash: Some(hash),
                slots: flatten(chains),
                attempts: attempt,
            });
        }

        error!(
            "no collision-free hash for a bucket of {} keys after {} draws",
            keys.len(),
            max_attempts
        );
        Err(FixedSetError::AttemptsExhausted {
            level: Level::Second,
            attempts: max_attempts,
        })
    }

    /// Whether `key` is stored in this table.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        match &self.hash {
            Some(hash) => self.slots[hash.slot(key)] == Some(key),
            None => false,
        }
    }

    /// Number of slots allocated, the square of the bucket size.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of keys stored.
    pub fn key_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The accepted hash, or `None` for an empty bucket.
    pub fn hash(&self) -> Option<&HashFunction> {
        self.hash.as_ref()
    }

    /// Draws taken before a collision-free hash was found. Zero for an empty bucket.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Whether the bucket was empty, in which case no hash was drawn.
    pub fn is_empty(&self) -> bool {
        self.hash.is_none()
    }
}

/// Turns single-key chains into slots.
///
/// # Panics
/// If any chain holds more than one key, which means the caller accepted a
/// hash that was not collision free.
fn flatten(chains: Vec<Chain>) -> Box<[Option<Key>]> {
    chains
        .into_iter()
        .map(|chain| {
            assert!(
                chain.len() <= 1,
                "accepted second-level hash left {} keys in one slot",
                chain.len()
            );
            chain.first().copied()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::key_rng::KeyRng;
    use smallvec::smallvec;

    #[test]
    fn empty_bucket_has_no_slots() {
        let mut rng = KeyRng::new(1);
        let table = SecondLevelTable::build(&[], &mut rng, 8).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.slot_count(), 0);
        assert!(!table.contains(0));
        assert!(!table.contains(i64::MIN));
    }

    #[test]
    fn stores_each_key_once() {
        let mut rng = KeyRng::new(2);
        let keys = [-9, 0, 4, 17, 1_000_000_000];
        let table = SecondLevelTable::build(&keys, &mut rng, 1024).unwrap();

        assert_eq!(table.slot_count(), 25);
        assert_eq!(table.key_count(), keys.len());
        for key in keys {
            assert!(table.contains(key));
        }
        assert!(!table.contains(5));
        assert!(!table.contains(1));
    }

    #[test]
    fn accepted_hash_is_injective_on_bucket() {
        let mut rng = KeyRng::new(3);
        let keys: Vec<Key> = (0..12).map(|i| i * 7919 - 40).collect();
        let table = SecondLevelTable::build(&keys, &mut rng, 1024).unwrap();
        let hash = table.hash().unwrap();

        let mut seen = std::collections::HashSet::new();
        for &key in &keys {
            assert!(seen.insert(hash.slot(key)));
        }
    }

    #[test]
    fn zero_attempts_is_exhausted() {
        let mut rng = KeyRng::new(4);
        let err = SecondLevelTable::build(&[1, 2], &mut rng, 0).unwrap_err();
        assert!(matches!(
            err,
            FixedSetError::AttemptsExhausted { level: Level::Second, attempts: 0 }
        ));
    }

    #[test]
    #[should_panic(expected = "left 2 keys in one slot")]
    fn flatten_rejects_crowded_chain() {
        flatten(vec![smallvec![1, 2], Chain::new()]);
    }
}
