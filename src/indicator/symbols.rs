use std::str::FromStr;

use super::Indicator;
use crate::PartitionError;

/// Two characters standing for the lower and upper half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolPair {
    lower: char,
    upper: char,
}

impl SymbolPair {
    /// Row codes: `F`ront is lower, `B`ack is upper.
    pub const ROW: SymbolPair = SymbolPair {
        lower: 'F',
        upper: 'B',
    };

    /// Column codes: `L`eft is lower, `R`ight is upper.
    pub const COLUMN: SymbolPair = SymbolPair {
        lower: 'L',
        upper: 'R',
    };

    /// Create a pair from two distinct characters.
    pub fn new(lower: char, upper: char) -> Result<Self, PartitionError> {
        if lower == upper || lower.is_whitespace() || upper.is_whitespace() {
            return Err(PartitionError::InvalidSymbolPair(format!("{lower}{upper}")));
        }
        Ok(Self { lower, upper })
    }

    /// Character standing for [`Indicator::Lower`].
    pub fn lower(&self) -> char {
        self.lower
    }

    /// Character standing for [`Indicator::Upper`].
    pub fn upper(&self) -> char {
        self.upper
    }

    /// Map a character to its indicator.
    pub fn decode(&self, symbol: char) -> Option<Indicator> {
        if symbol == self.lower {
            Some(Indicator::Lower)
        } else if symbol == self.upper {
            Some(Indicator::Upper)
        } else {
            None
        }
    }

    /// Map an indicator to its character.
    pub fn encode(&self, indicator: Indicator) -> char {
        match indicator {
            Indicator::Lower => self.lower,
            Indicator::Upper => self.upper,
        }
    }
}

impl FromStr for SymbolPair {
    type Err = PartitionError;

    /// Parse `"FB"`: first character lower, second upper.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(lower), Some(upper), None) => Self::new(lower, upper),
            _ => Err(PartitionError::InvalidSymbolPair(s.to_string())),
        }
    }
}
