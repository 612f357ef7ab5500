//! Error types for aco-tsp.
//!
//! Recoverable heuristic situations (e.g., a collapsed roulette wheel
//! during tour construction) are handled locally and never surface here;
//! [`Error`] covers input and configuration failures that callers must
//! handle.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for problem loading and solver construction.
#[derive(Debug, Error)]
pub enum Error {
    /// A node record in the input could not be parsed.
    #[error("line {line}: malformed node record: {message}")]
    Parse {
        /// 1-based line number of the offending record.
        line: usize,
        /// Description of what was wrong with the record.
        message: String,
    },

    /// The problem input is degenerate (e.g., contains no nodes).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration parameter violates its documented domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying I/O failure while reading an input file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
