//! # FixedSet
//!
//! A static membership index over `i64` keys using two-level perfect hashing
//! (Fredman, Komlós and Szemerédi).
//!
//! The first level spreads `n` keys over `n` buckets with a hash drawn so that
//! `sum(bucket_size^2) <= 3n`. A random draw has `E[sum] < 2n`, so by Markov's
//! inequality at least one draw in three is accepted. Each bucket then gets its
//! own collision-free [`SecondLevelTable`] of `bucket_size^2` slots, and the
//! space bound keeps the total linear in `n`.
//!
//! Queries evaluate two hashes and compare one stored key, so `contains` is
//! worst-case O(1). Randomness only affects build time, never answers.

use log::{debug, error, info};
use rand::Rng;
use rayon::prelude::*;

use crate::config::FixedSetConfig;
use crate::distribution::{compute_chains, compute_counts, Chain};
use crate::error::{FixedSetError, Level, Result};
use crate::hash::HashFunction;
use crate::second_level::SecondLevelTable;
use crate::types::{BuildStats, Key, SPACE_BOUND_MULTIPLIER};
use crate::utils::checked::{checked_mul, sum_of_squares};
use crate::utils::key_rng::KeyRng;

/// An immutable set of integer keys with worst-case O(1) membership queries.
#[derive(Debug, Clone, Default)]
pub struct FixedSet {
    /// `None` exactly when the set is empty.
    first_level: Option<HashFunction>,
    tables: Vec<SecondLevelTable>,
    stats: BuildStats,
}

/// An accepted first-level draw together with its buckets.
struct Partition {
    hash: HashFunction,
    chains: Vec<Chain>,
    sum_of_squares: u64,
    largest_bucket: usize,
    attempts: usize,
}

impl FixedSet {
    /// Builds a set with the default configuration and an OS-seeded generator.
    pub fn build(keys: &[Key]) -> Result<Self> {
        Self::build_with_config(keys, &FixedSetConfig::default())
    }

    /// Builds a set according to `config`.
    pub fn build_with_config(keys: &[Key], config: &FixedSetConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => KeyRng::new(seed),
            None => KeyRng::from_os_entropy(),
        };
        Self::construct(keys, &mut rng, config)
    }

    /// Builds a set drawing every hash from `rng`, with default attempt caps.
    pub fn build_with_rng<R: Rng + ?Sized>(keys: &[Key], rng: &mut R) -> Result<Self> {
        Self::construct(keys, rng, &FixedSetConfig::default())
    }

    fn construct<R: Rng + ?Sized>(keys: &[Key], rng: &mut R, config: &FixedSetConfig) -> Result<Self> {
        let mut keys = keys.to_vec();
        keys.sort_unstable();
        keys.dedup();

        let n = keys.len();
        if n == 0 {
            debug!("empty key set, nothing to build");
            return Ok(Self::default());
        }

        let partition = partition(&keys, rng, config)?;
        let tables = if config.parallel {
            build_tables_parallel(&partition.chains, rng, config.max_second_level_attempts)?
        } else {
            partition
                .chains
                .iter()
                .map(|chain| SecondLevelTable::build(chain, rng, config.max_second_level_attempts))
                .collect::<Result<Vec<_>>>()?
        };

        let stats = BuildStats {
            keys: n,
            first_level_attempts: partition.attempts,
            second_level_attempts: tables.iter().map(SecondLevelTable::attempts).sum(),
            sum_of_squares: partition.sum_of_squares,
            slots: tables.iter().map(SecondLevelTable::slot_count).sum(),
            largest_bucket: partition.largest_bucket,
        };
        info!(
            "built fixed set: {} keys, {} slots, {} first-level and {} second-level draws",
            stats.keys, stats.slots, stats.first_level_attempts, stats.second_level_attempts
        );

        Ok(Self {
            first_level: Some(partition.hash),
            tables,
            stats,
        })
    }

    /// Whether `key` was in the key set the structure was built from.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        match &self.first_level {
            Some(hash) => self.tables[hash.slot(key)].contains(key),
            None => false,
        }
    }

    /// Answers a batch of queries in order.
    pub fn contains_all(&self, queries: &[Key]) -> Vec<bool> {
        queries.iter().map(|&key| self.contains(key)).collect()
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.stats.keys
    }

    /// Whether the set was built from an empty key set.
    pub fn is_empty(&self) -> bool {
        self.first_level.is_none()
    }

    /// Counters from the build that produced this set.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Total second-level slots, at most `3n` by construction.
    pub fn slot_count(&self) -> usize {
        self.stats.slots
    }

    /// The accepted first-level hash, or `None` for an empty set.
    pub fn first_level_hash(&self) -> Option<&HashFunction> {
        self.first_level.as_ref()
    }

    /// Second-level tables indexed by first-level slot.
    pub fn buckets(&self) -> &[SecondLevelTable] {
        &self.tables
    }

    /// The second-level table for first-level slot `index`.
    pub fn bucket_table(&self, index: usize) -> Option<&SecondLevelTable> {
        self.tables.get(index)
    }
}

impl TryFrom<&[Key]> for FixedSet {
    type Error = FixedSetError;

    fn try_from(keys: &[Key]) -> Result<Self> {
        Self::build(keys)
    }
}

/// Redraws the first-level hash until the squared bucket sizes fit the space bound.
fn partition<R: Rng + ?Sized>(keys: &[Key], rng: &mut R, config: &FixedSetConfig) -> Result<Partition> {
    let n = keys.len();
    let bound = checked_mul(SPACE_BOUND_MULTIPLIER, n as u64)?;

    for attempt in 1..=config.max_first_level_attempts {
        let hash = HashFunction::generate(n, rng);
        let counts = compute_counts(keys, n, &hash);
        let sum = sum_of_squares(&counts)?;
        if sum > bound {
            debug!(
                "first-level draw {} rejected: sum of squares {} exceeds {}",
                attempt, sum, bound
            );
            continue;
        }

        return Ok(Partition {
            hash,
            chains: compute_chains(keys, n, &hash),
            sum_of_squares: sum,
            largest_bucket: counts.iter().copied().max().unwrap_or(0) as usize,
            attempts: attempt,
        });
    }

    error!(
        "no first-level hash met the {}n bound for {} keys after {} draws",
        SPACE_BOUND_MULTIPLIER, n, config.max_first_level_attempts
    );
    Err(FixedSetError::AttemptsExhausted {
        level: Level::First,
        attempts: config.max_first_level_attempts,
    })
}

/// Builds every bucket on the rayon pool.
///
/// Seeds are drawn from the shared generator up front, one per bucket, so each
/// branch owns an independent generator and the result only depends on `rng`.
fn build_tables_parallel<R: Rng + ?Sized>(
    chains: &[Chain],
    rng: &mut R,
    max_attempts: usize,
) -> Result<Vec<SecondLevelTable>> {
    let seeds: Vec<u64> = chains.iter().map(|_| rng.next_u64()).collect();
    chains
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(chain, &seed)| {
            let mut local = KeyRng::new(seed);
            SecondLevelTable::build(chain, &mut local, max_attempts)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        let mut rng = KeyRng::new(2024);
        let set = FixedSet::build_with_rng(&[1, 2, 3, 4], &mut rng).unwrap();
        assert_eq!(set.contains_all(&[1, 5, 3, 100]), vec![true, false, true, false]);
    }

    #[test]
    fn duplicates_collapse() {
        let mut rng = KeyRng::new(8);
        let set = FixedSet::build_with_rng(&[5, 5, 5, -1], &mut rng).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(5));
        assert!(set.contains(-1));
        assert!(!set.contains(0));
    }

    #[test]
    fn stats_match_tables() {
        let keys: Vec<Key> = (0..500).map(|i| i * 31 - 7000).collect();
        let config = FixedSetConfig::default().with_seed(77);
        let set = FixedSet::build_with_config(&keys, &config).unwrap();
        let stats = set.stats();

        assert_eq!(stats.keys, 500);
        assert!(stats.first_level_attempts >= 1);
        assert!(stats.second_level_attempts >= set.buckets().iter().filter(|t| !t.is_empty()).count());
        assert_eq!(stats.slots as u64, stats.sum_of_squares);
        assert!(stats.sum_of_squares <= 3 * 500);
    }

    #[test]
    fn space_bound_holds_for_every_seed() {
        let keys: Vec<Key> = (0..2000).collect();
        for seed in 0..50 {
            let config = FixedSetConfig::default().with_seed(seed);
            let set = FixedSet::build_with_config(&keys, &config).unwrap();
            assert!(
                set.stats().sum_of_squares <= 3 * keys.len() as u64,
                "seed {} gave sum of squares {}",
                seed,
                set.stats().sum_of_squares
            );
            assert!(set.slot_count() <= 3 * keys.len());
        }
    }

    #[test]
    fn exhausted_first_level_is_reported() {
        let mut rng = KeyRng::new(1);
        let config = FixedSetConfig {
            max_first_level_attempts: 0,
            ..FixedSetConfig::default()
        };
        let err = FixedSet::construct(&[1, 2, 3], &mut rng, &config).unwrap_err();
        assert!(matches!(
            err,
            FixedSetError::AttemptsExhausted { level: Level::First, .. }
        ));
    }
}
