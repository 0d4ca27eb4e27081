//! # FixedSet Configuration
//!
//! Knobs for the randomized construction: where randomness comes from, how
//! many draws each retry loop may take before giving up, and whether
//! second-level tables are built in parallel.
//!
//! The first-level space bound is not configurable. Every built set satisfies
//! `sum(bucket_size^2) <= SPACE_BOUND_MULTIPLIER * n`, so a JSON file naming a
//! `space_bound_multiplier` field is rejected as unknown.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FixedSetError, Result};

/// Defines how a [`crate::FixedSet`] is constructed.
///
/// Every loop in the construction succeeds with constant probability per draw,
/// so the attempt caps are only reached with a broken random source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixedSetConfig {
    /// Seed for the build generator. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Cap on first-level hash draws. Each draw meets the space bound with
    /// probability at least 1/3.
    pub max_first_level_attempts: usize,

    /// Cap on hash draws per second-level bucket. Each draw is collision free
    /// with probability at least 1/2.
    pub max_second_level_attempts: usize,

    /// Build second-level tables on the rayon pool, one independently seeded
    /// generator per bucket.
    pub parallel: bool,
}

impl Default for FixedSetConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_first_level_attempts: 1024,
            max_second_level_attempts: 1024,
            parallel: false,
        }
    }
}

impl FixedSetConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parses a configuration from JSON text and validates it.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| FixedSetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings under which construction could not terminate.
    pub fn validate(&self) -> Result<()> {
        if self.max_first_level_attempts == 0 || self.max_second_level_attempts == 0 {
            return Err(FixedSetError::Config(
                "attempt caps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Fixes the generator seed, making construction reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turns the rayon-parallel second-level build on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns a one-line summary of the configuration.
    pub fn stats(&self) -> String {
        format!(
            "FixedSetConfig: seed {:?} attempts {}/{} parallel:{}",
            self.seed,
            self.max_first_level_attempts,
            self.max_second_level_attempts,
            self.parallel
        )
    }
}
