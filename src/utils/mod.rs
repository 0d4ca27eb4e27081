//! # Utility Modules
//!
//! Low-level building blocks shared by both levels of the table: the
//! overflow-checked arithmetic used for size bookkeeping and the random
//! generator threaded through every hash draw.

/// Overflow-checked multiply and add over unsigned integers.
///
/// Table sizes are derived from squared bucket counts. A wrapped product would
/// allocate a table too small to be collision free, so every such computation
/// goes through these helpers and fails loudly instead.
pub mod checked;

/// A small, fast, seedable random number generator.
///
/// This module contains `KeyRng`, an XOROSHIRO128+ generator that plugs into
/// the `rand` traits so every build step can take any `rand::Rng`.
pub mod key_rng;
