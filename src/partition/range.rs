use std::fmt;

use crate::indicator::Indicator;
use crate::{PartitionError, Result};

/// Inclusive candidate interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Lower bound (inclusive).
    pub low: u64,
    /// Upper bound (inclusive).
    pub high: u64,
}

impl Range {
    /// Create the range covering `[0, range_length)`.
    pub fn full(range_length: u64) -> Result<Self> {
        let high = range_length
            .checked_sub(1)
            .ok_or(PartitionError::EmptyRange)?;
        Ok(Self { low: 0, high })
    }

    /// Number of positions still covered, zero once the bounds have crossed.
    pub fn width(&self) -> u64 {
        if self.low > self.high {
            0
        } else {
            self.high - self.low + 1
        }
    }

    /// Returns `true` when a single position remains.
    pub fn is_converged(&self) -> bool {
        self.low == self.high
    }

    /// Keep one half of the range.
    ///
    /// `step` is the one-based position of the indicator and only feeds the
    /// error. Fails when the bounds have already crossed or when the lower
    /// half of a range starting at zero is requested after convergence.
    pub fn halve(self, indicator: Indicator, step: usize) -> Result<Self> {
        let exhausted = PartitionError::RangeExhausted {
            step,
            low: self.low,
            high: self.high,
        };
        if self.low > self.high {
            return Err(exhausted);
        }

        let offset = (self.high - self.low) / 2 + 1;
        match indicator {
            Indicator::Lower => {
                let high = self.high.checked_sub(offset).ok_or(exhausted)?;
                Ok(Self { high, ..self })
            }
            Indicator::Upper => {
                let low = self.low.checked_add(offset).ok_or(exhausted)?;
                Ok(Self { low, ..self })
            }
        }
    }

    /// The single remaining position, or the bounds that failed to meet.
    pub fn converged(&self) -> Result<u64> {
        if self.is_converged() {
            Ok(self.low)
        } else {
            Err(PartitionError::ConvergenceFailure {
                low: self.low,
                high: self.high,
            })
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
