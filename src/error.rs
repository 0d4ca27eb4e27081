//! Error types for the fixed set.

use thiserror::Error;

/// Result type alias using FixedSetError.
pub type Result<T> = std::result::Result<T, FixedSetError>;

/// Which level of the two-level table a build step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    First,
    Second,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::First => f.write_str("first-level"),
            Level::Second => f.write_str("second-level"),
        }
    }
}

/// Errors that can occur while building or feeding a fixed set.
///
/// A second-level bucket that still holds two keys in one slot after its
/// hash was accepted is a bug in this crate, not an error, and panics instead.
#[derive(Debug, Error)]
pub enum FixedSetError {
    #[error("arithmetic overflow: {lhs} {op} {rhs}")]
    ArithmeticOverflow {
        op: &'static str,
        lhs: u64,
        rhs: u64,
    },

    #[error("{level} hash not accepted after {attempts} attempts")]
    AttemptsExhausted { level: Level, attempts: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("malformed input: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
