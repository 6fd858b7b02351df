//! BCrypt cost factor

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{HashError, HashResult};

/// Smallest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;
/// Largest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;
/// Cost used when nothing is configured.
pub const DEFAULT_COST: u32 = 10;

/// Validated log2 cost factor; the key schedule runs `2^cost` rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CostFactor(u32);

impl CostFactor {
    /// Validate a raw cost. Out-of-range values are rejected, never clamped.
    pub fn new(cost: u32) -> HashResult<Self> {
        if (MIN_COST..=MAX_COST).contains(&cost) {
            Ok(Self(cost))
        } else {
            Err(HashError::CostOutOfRange {
                cost,
                min: MIN_COST,
                max: MAX_COST,
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of key-expansion rounds
    pub fn rounds(self) -> u64 {
        1u64 << self.0
    }
}

impl Default for CostFactor {
    fn default() -> Self {
        Self(DEFAULT_COST)
    }
}

impl TryFrom<u32> for CostFactor {
    type Error = HashError;

    fn try_from(cost: u32) -> Result<Self, Self::Error> {
        Self::new(cost)
    }
}

impl From<CostFactor> for u32 {
    fn from(cost: CostFactor) -> Self {
        cost.0
    }
}

/// Always two digits, as embedded in a hash string.
impl fmt::Display for CostFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
