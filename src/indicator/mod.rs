//! Partition indicators
//!
//! An indicator selects which half of the current range survives a step.
//! Sequences are validated once at the boundary and stored one bit per
//! indicator, so the partitioner never sees an out-of-domain value.

mod symbols;

pub use symbols::SymbolPair;

use std::fmt;

use bitvec::prelude::*;

use crate::{PartitionError, Result};

/// Direction taken by a single partition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Keep the lower half (`0`).
    Lower = 0,
    /// Keep the upper half (`1`).
    Upper = 1,
}

impl Indicator {
    /// Attempt to interpret a raw value as an indicator.
    pub fn from_value(value: u64) -> Option<Self> {
        match value {
            0 => Some(Indicator::Lower),
            1 => Some(Indicator::Upper),
            _ => None,
        }
    }

    /// Raw `0`/`1` value of the indicator.
    #[inline]
    pub fn value(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_bit(bit: bool) -> Self {
        if bit {
            Indicator::Upper
        } else {
            Indicator::Lower
        }
    }

    #[inline]
    fn bit(self) -> bool {
        self == Indicator::Upper
    }
}

/// Ordered, validated sequence of indicators.
///
/// Bits are stored most significant first: bit set means [`Indicator::Upper`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndicatorSequence {
    bits: BitVec<u8, Msb0>,
}

impl IndicatorSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw values, rejecting anything other than `0` or `1`.
    pub fn from_values(values: &[u64]) -> Result<Self> {
        let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            let indicator = Indicator::from_value(value)
                .ok_or(PartitionError::InvalidIndicator { index, value })?;
            bits.push(indicator.bit());
        }
        Ok(Self { bits })
    }

    /// Decode a letter-coded sequence such as `FBFBBFF`.
    ///
    /// ASCII whitespace is skipped but still counted: `index` in errors is
    /// the character position within `input`, whitespace included.
    pub fn from_symbols(input: &str, pair: SymbolPair) -> Result<Self> {
        let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(input.len());
        for (index, symbol) in input.chars().enumerate() {
            if symbol.is_ascii_whitespace() {
                continue;
            }
            let indicator = pair
                .decode(symbol)
                .ok_or(PartitionError::InvalidSymbol { index, symbol })?;
            bits.push(indicator.bit());
        }
        Ok(Self { bits })
    }

    /// Append an indicator.
    pub fn push(&mut self, indicator: Indicator) {
        self.bits.push(indicator.bit());
    }

    /// Number of indicators.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` when the sequence holds no indicators.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Indicator at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Indicator> {
        self.bits.get(index).map(|bit| Indicator::from_bit(*bit))
    }

    /// Iterate indicators in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = Indicator> + '_ {
        self.bits.iter().by_vals().map(Indicator::from_bit)
    }

    /// Raw `0`/`1` values in sequence order.
    pub fn to_values(&self) -> Vec<u64> {
        self.iter().map(Indicator::value).collect()
    }

    /// Render with a symbol pair, e.g. `FBFBBFF`.
    pub fn to_symbols(&self, pair: SymbolPair) -> String {
        self.iter().map(|indicator| pair.encode(indicator)).collect()
    }
}

impl FromIterator<Indicator> for IndicatorSequence {
    fn from_iter<I: IntoIterator<Item = Indicator>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().map(Indicator::bit).collect(),
        }
    }
}

impl fmt::Display for IndicatorSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, indicator) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", indicator.value())?;
        }
        f.write_str("]")
    }
}
