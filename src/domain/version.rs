//! BCrypt version tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::HashFormatError;

/// BCrypt variant, written between the first two `$` of a hash string.
///
/// All variants run the same computation for the passwords this crate can
/// produce; the tag only changes how the result is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BcryptVersion {
    #[default]
    #[serde(rename = "2a")]
    TwoA,
    #[serde(rename = "2b")]
    TwoB,
    #[serde(rename = "2x")]
    TwoX,
    #[serde(rename = "2y")]
    TwoY,
}

impl BcryptVersion {
    pub const ALL: [BcryptVersion; 4] = [Self::TwoA, Self::TwoB, Self::TwoX, Self::TwoY];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoA => "2a",
            Self::TwoB => "2b",
            Self::TwoX => "2x",
            Self::TwoY => "2y",
        }
    }
}

impl fmt::Display for BcryptVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BcryptVersion {
    type Err = HashFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2a" => Ok(Self::TwoA),
            "2b" => Ok(Self::TwoB),
            "2x" => Ok(Self::TwoX),
            "2y" => Ok(Self::TwoY),
            other => Err(HashFormatError::UnknownVersion(other.to_string())),
        }
    }
}
