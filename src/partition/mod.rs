//! Range halving
//!
//! Narrows `[0, range_length - 1]` one indicator at a time. All arithmetic
//! is checked: malformed input surfaces as a [`PartitionError`] instead of
//! wrapping.

mod locate;
mod range;

pub use locate::locate;
pub use range::Range;

use crate::indicator::{Indicator, IndicatorSequence};
use crate::{PartitionConfig, PartitionError, Result};

/// Number of indicators that fully narrow a range of this length.
///
/// `None` unless `range_length` is a power of two.
pub fn expected_indicator_count(range_length: u64) -> Option<u32> {
    range_length
        .is_power_of_two()
        .then(|| range_length.trailing_zeros())
}

/// Partition `[0, range_length)` by raw `0`/`1` indicators.
///
/// Uses the default (lenient) configuration; see [`Partitioner`] for strict
/// indicator-count checking.
pub fn partition(range_length: u64, indicators: &[u64]) -> Result<u64> {
    let sequence = IndicatorSequence::from_values(indicators)?;
    Partitioner::default().partition(range_length, &sequence)
}

/// Every intermediate range visited while partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Range before any indicator was applied
    pub initial: Range,
    /// Indicator applied at each step and the range it produced
    pub steps: Vec<(Indicator, Range)>,
}

impl Trace {
    /// Range after the last step.
    pub fn last(&self) -> Range {
        self.steps
            .last()
            .map(|&(_, range)| range)
            .unwrap_or(self.initial)
    }

    /// Converged position, or the bounds that failed to meet.
    pub fn result(&self) -> Result<u64> {
        self.last().converged()
    }
}

/// Partition runner carrying a [`PartitionConfig`]
#[derive(Debug, Clone, Default)]
pub struct Partitioner {
    config: PartitionConfig,
}

impl Partitioner {
    /// Create a partitioner with the given configuration
    pub fn new(config: PartitionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Narrow `[0, range_length)` by `indicators` and return the converged position.
    pub fn partition(&self, range_length: u64, indicators: &IndicatorSequence) -> Result<u64> {
        self.config.validate(range_length, indicators.len())?;
        tracing::debug!(range_length, indicators = indicators.len(), "partitioning");

        let mut range = Range::full(range_length)?;
        for (idx, indicator) in indicators.iter().enumerate() {
            range = range.halve(indicator, idx + 1)?;
            tracing::trace!(
                step = idx + 1,
                ?indicator,
                low = range.low,
                high = range.high,
                "halved"
            );
        }

        let result = range.converged();
        if let Err(PartitionError::ConvergenceFailure { low, high }) = &result {
            tracing::debug!(low, high, "range did not converge");
        }
        result
    }

    /// Like [`Partitioner::partition`], but keep every intermediate range.
    ///
    /// Only validation and exhausted steps fail here; convergence is left to
    /// [`Trace::result`].
    pub fn trace(&self, range_length: u64, indicators: &IndicatorSequence) -> Result<Trace> {
        self.config.validate(range_length, indicators.len())?;

        let initial = Range::full(range_length)?;
        let mut steps = Vec::with_capacity(indicators.len());
        let mut range = initial;
        for (idx, indicator) in indicators.iter().enumerate() {
            range = range.halve(indicator, idx + 1)?;
            steps.push((indicator, range));
        }

        Ok(Trace { initial, steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[u64]) -> IndicatorSequence {
        IndicatorSequence::from_values(values).unwrap()
    }

    #[test]
    fn test_expected_indicator_count() {
        assert_eq!(expected_indicator_count(1), Some(0));
        assert_eq!(expected_indicator_count(8), Some(3));
        assert_eq!(expected_indicator_count(128), Some(7));
        assert_eq!(expected_indicator_count(1 << 63), Some(63));
        assert_eq!(expected_indicator_count(0), None);
        assert_eq!(expected_indicator_count(12), None);
    }

    #[test]
    fn test_single_position_converges_immediately() {
        assert_eq!(partition(1, &[]), Ok(0));
    }

    #[test]
    fn test_short_sequence_does_not_converge() {
        assert_eq!(
            partition(16, &[1, 0]),
            Err(PartitionError::ConvergenceFailure { low: 8, high: 11 })
        );
        assert_eq!(
            partition(16, &[]),
            Err(PartitionError::ConvergenceFailure { low: 0, high: 15 })
        );
    }

    #[test]
    fn test_overshoot_reports_crossed_bounds() {
        assert_eq!(
            partition(16, &[0, 0, 1, 0, 1]),
            Err(PartitionError::ConvergenceFailure { low: 3, high: 2 })
        );
        assert_eq!(
            partition(16, &[0, 0, 1, 0, 1, 1]),
            Err(PartitionError::RangeExhausted { step: 6, low: 3, high: 2 })
        );
        assert_eq!(
            partition(16, &[0, 0, 0, 0, 0]),
            Err(PartitionError::RangeExhausted { step: 5, low: 0, high: 0 })
        );
    }

    #[test]
    fn test_invalid_indicator_is_rejected() {
        assert_eq!(
            partition(8, &[1, 3, 0]),
            Err(PartitionError::InvalidIndicator { index: 1, value: 3 })
        );
    }

    #[test]
    fn test_empty_range_is_rejected() {
        assert_eq!(partition(0, &[]), Err(PartitionError::EmptyRange));
        assert_eq!(partition(0, &[0, 1]), Err(PartitionError::EmptyRange));
    }

    #[test]
    fn test_strict_partitioner_checks_length() {
        let strict = Partitioner::new(PartitionConfig::strict());
        assert!(strict.config().strict);
        assert_eq!(strict.partition(8, &seq(&[1, 1, 1])), Ok(7));
        assert_eq!(
            strict.partition(16, &seq(&[0, 0, 1, 0, 1])),
            Err(PartitionError::InputLengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_trace_records_each_step() {
        let trace = Partitioner::default().trace(8, &seq(&[1, 0, 1])).unwrap();
        assert_eq!(trace.initial, Range { low: 0, high: 7 });
        assert_eq!(
            trace.steps,
            vec![
                (Indicator::Upper, Range { low: 4, high: 7 }),
                (Indicator::Lower, Range { low: 4, high: 5 }),
                (Indicator::Upper, Range { low: 5, high: 5 }),
            ]
        );
        assert_eq!(trace.result(), Ok(5));
    }

    #[test]
    fn test_trace_leaves_convergence_to_caller() {
        let trace = Partitioner::default().trace(16, &seq(&[1])).unwrap();
        assert_eq!(trace.last(), Range { low: 8, high: 15 });
        assert_eq!(
            trace.result(),
            Err(PartitionError::ConvergenceFailure { low: 8, high: 15 })
        );
    }

    #[test]
    fn test_non_power_of_two_range_is_lenient() {
        // [0, 11] -> [6, 11] -> [6, 8] -> [8, 8]
        assert_eq!(partition(12, &[1, 0, 1]), Ok(8));
        assert_eq!(partition(12, &[1, 0, 0]), Ok(6));
    }
}
