//! Inverse partitioning: from a position back to its indicators.

use super::expected_indicator_count;
use crate::indicator::{Indicator, IndicatorSequence};
use crate::{PartitionError, Result};

/// Shortest indicator sequence that converges on `position`.
///
/// Only defined for power-of-two ranges, where every position has exactly
/// one sequence of `log2(range_length)` indicators.
pub fn locate(range_length: u64, position: u64) -> Result<IndicatorSequence> {
    if range_length == 0 {
        return Err(PartitionError::EmptyRange);
    }
    let depth =
        expected_indicator_count(range_length).ok_or(PartitionError::NotPowerOfTwo(range_length))?;
    if position >= range_length {
        return Err(PartitionError::PositionOutOfRange {
            position,
            range_length,
        });
    }

    let sequence: IndicatorSequence = (0..depth)
        .rev()
        .map(|shift| {
            if (position >> shift) & 1 == 1 {
                Indicator::Upper
            } else {
                Indicator::Lower
            }
        })
        .collect();

    tracing::debug!(range_length, position, %sequence, "located position");
    Ok(sequence)
}
