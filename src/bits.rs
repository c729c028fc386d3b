use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::error::RunError;

// =============================================================================
// Bits
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn is_zero(self) -> bool {
        self == Bit::Zero
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

// =============================================================================
// Validated sequence
// =============================================================================

/// A fixed sequence of bits, read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinarySequence {
    bits: Vec<Bit>,
}

impl BinarySequence {
    /// Validates raw integers, rejecting the lowest-indexed element outside {0, 1}.
    pub fn from_values(values: &[i64]) -> Result<Self, RunError> {
        let bits = values
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                0 => Ok(Bit::Zero),
                1 => Ok(Bit::One),
                _ => {
                    debug!("rejecting element {value} at index {index}");
                    Err(RunError::non_binary(index, value))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    pub fn count_zeros(&self) -> usize {
        self.bits.iter().filter(|bit| bit.is_zero()).count()
    }

    pub fn reversed(&self) -> Self {
        Self {
            bits: self.bits.iter().rev().copied().collect(),
        }
    }
}

impl From<Vec<Bit>> for BinarySequence {
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BinarySequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().map(Bit::from).collect(),
        }
    }
}

impl TryFrom<&[i64]> for BinarySequence {
    type Error = RunError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl fmt::Display for BinarySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.bits.iter().join(","))
    }
}

// =============================================================================
// Flip budget
// =============================================================================

/// Number of zeros a window may treat as ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Budget(usize);

impl Budget {
    pub fn new(k: i64) -> Result<Self, RunError> {
        if k < 0 {
            debug!("rejecting negative budget {k}");
            return Err(RunError::negative_budget(k));
        }
        // A budget past usize::MAX already covers every zero an addressable slice can hold.
        Ok(Self(usize::try_from(k).unwrap_or(usize::MAX)))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Budget {
    fn from(k: usize) -> Self {
        Self(k)
    }
}

// =============================================================================
// Tests
// =============================================================================
