//! # FixedSet
//!
//! Static membership index over `i64` keys. Built once from a known key set,
//! then answers "is X a member?" in worst-case O(1) time using O(n) space,
//! via two-level randomized perfect hashing.
//!
//! ```rust
//! use fixedset::{FixedSet, FixedSetConfig};
//!
//! let config = FixedSetConfig::default().with_seed(7);
//! let set = FixedSet::build_with_config(&[1, 2, 3, 4], &config).unwrap();
//! assert_eq!(set.contains_all(&[1, 5, 3, 100]), vec![true, false, true, false]);
//! ```
pub mod config;
pub mod distribution;
pub mod error;
pub mod fixed_set;
pub mod hash;
pub mod io;
pub mod second_level;
pub mod types;
pub mod utils;

#[cfg(feature = "node")]
pub mod node;

// Re-export main types
pub use config::FixedSetConfig;
pub use error::{FixedSetError, Level, Result};
pub use fixed_set::FixedSet;
pub use hash::HashFunction;
pub use second_level::SecondLevelTable;
pub use types::{BuildStats, Key};
pub use utils::key_rng::KeyRng;
