//! # Binary Space Partitioning
//!
//! Finds a single position inside the zero-indexed range `[0, n)` by
//! repeatedly halving the range according to a sequence of indicators.
//!
//! ## Core Algorithm
//!
//! 1. **Start**: `low = 0`, `high = n - 1`
//! 2. **Lower half** (indicator `0`): `high = high - (high - low) / 2 - 1`
//! 3. **Upper half** (indicator `1`): `low = low + (high - low) / 2 + 1`
//! 4. **Convergence**: the result is valid only when `low == high`
//!
//! For a power-of-two range and `log2(n)` indicators the result is the
//! indicators read as a binary number, most significant first.
//!
//! ## Usage Example
//!
//! ```
//! use binary_partition::{partition, PartitionError};
//!
//! assert_eq!(partition(128, &[0, 1, 0, 1, 1, 0, 0]), Ok(44));
//! assert_eq!(
//!     partition(16, &[0, 0]),
//!     Err(PartitionError::ConvergenceFailure { low: 0, high: 3 })
//! );
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod indicator; // Indicator parsing and bit-packed sequences
pub mod partition; // Range halving and its inverse

// Re-exports for convenience
pub use indicator::{Indicator, IndicatorSequence, SymbolPair};
pub use partition::{expected_indicator_count, locate, partition, Partitioner, Range, Trace};

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Configuration parameters for partitioning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionConfig {
    /// Require exactly `log2(range_length)` indicators over a power-of-two range
    pub strict: bool,
}

impl PartitionConfig {
    /// Configuration that validates the indicator count before partitioning
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Number of indicators needed to converge on a range of this length.
    ///
    /// `None` when the length is not a power of two, in which case no
    /// indicator count converges for every position.
    pub fn for_range_length(range_length: u64) -> Option<u32> {
        expected_indicator_count(range_length)
    }

    /// Check the inputs against this configuration.
    pub fn validate(&self, range_length: u64, indicator_count: usize) -> Result<()> {
        if range_length == 0 {
            return Err(PartitionError::EmptyRange);
        }
        if !self.strict {
            return Ok(());
        }

        let expected = Self::for_range_length(range_length)
            .ok_or(PartitionError::NotPowerOfTwo(range_length))? as usize;
        if expected != indicator_count {
            return Err(PartitionError::InputLengthMismatch {
                expected,
                actual: indicator_count,
            });
        }
        Ok(())
    }
}

/// Errors that can occur while partitioning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// The bounds did not meet after all indicators were applied
    #[error("range does not converge: {low} <-> {high}")]
    ConvergenceFailure {
        /// Final lower bound
        low: u64,
        /// Final upper bound
        high: u64,
    },

    /// An indicator value other than 0 or 1
    #[error("invalid indicator {value} at position {index}: expected 0 or 1")]
    InvalidIndicator {
        /// Zero-based position within the sequence
        index: usize,
        /// Offending value
        value: u64,
    },

    /// Strict mode: the indicator count does not match the range length
    #[error("expected {expected} indicators for this range, got {actual}")]
    InputLengthMismatch {
        /// Indicator count implied by the range length
        expected: usize,
        /// Indicator count supplied
        actual: usize,
    },

    /// A range of length zero has no positions to select from
    #[error("range length must be at least 1")]
    EmptyRange,

    /// A step was requested on a range that cannot be halved any further.
    ///
    /// Too many indicators surface either as this variant or as
    /// [`PartitionError::ConvergenceFailure`] with crossed bounds: an upper
    /// step on a collapsed range leaves `low = high + 1`, which only fails
    /// here if another step follows, while a lower step on `[0, 0]` fails
    /// at once.
    #[error("indicator #{step} cannot narrow range [{low}, {high}]")]
    RangeExhausted {
        /// One-based step number
        step: usize,
        /// Lower bound before the step
        low: u64,
        /// Upper bound before the step
        high: u64,
    },

    /// Operation requires a power-of-two range length
    #[error("range length {0} is not a power of two")]
    NotPowerOfTwo(u64),

    /// Target position lies outside `[0, range_length)`
    #[error("position {position} is outside a range of length {range_length}")]
    PositionOutOfRange {
        /// Requested position
        position: u64,
        /// Length of the range
        range_length: u64,
    },

    /// A character that is neither symbol of the configured pair
    #[error("invalid symbol {symbol:?} at position {index}")]
    InvalidSymbol {
        /// Zero-based character position
        index: usize,
        /// Offending character
        symbol: char,
    },

    /// A symbol pair that is not two distinct characters
    #[error("invalid symbol pair {0:?}: expected two distinct characters")]
    InvalidSymbolPair(String),
}
