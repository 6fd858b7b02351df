//! Hashed password value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final encoded hash text, as handed to the credential store.
///
/// Equality is equality of the encoded text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn into_inner(self) -> String {
        self.hash
    }
}

impl AsRef<str> for HashedPassword {
    fn as_ref(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}
