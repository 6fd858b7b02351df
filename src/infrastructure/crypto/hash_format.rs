//! Self-describing bcrypt hash strings
//!
//! Layout: `$<version>$<cost>$<salt><digest>`, e.g.
//! `$2a$10$WUHhXETkX0fnYkrqZU3ta.u8pRn9TbW6eClyYLqHLAYAWnXRJpNRS`.
//! Everything needed to re-verify a password travels inside the string, so
//! verification never reads hasher configuration.

use std::fmt;
use std::str::FromStr;

use base64::DecodeError;
use subtle::ConstantTimeEq;

use super::radix64;
use super::salt::{RawSalt, SALT_LENGTH_ENCODED};
use crate::domain::{BcryptVersion, CostFactor, HashFormatError};

/// Total length of a hash string with a two-character version tag.
pub const HASH_LENGTH: usize = 60;
/// Digest bytes kept in the hash string (bcrypt drops the 24th).
pub const DIGEST_BYTES: usize = 23;
/// Characters of the digest in its radix-64 form.
pub const DIGEST_LENGTH_ENCODED: usize = 31;

const VERSION_RANGE: std::ops::Range<usize> = 1..3;
const COST_RANGE: std::ops::Range<usize> = 4..6;
const SALT_START: usize = 7;
const DIGEST_START: usize = SALT_START + SALT_LENGTH_ENCODED;

/// A parsed bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BcryptHash {
    version: BcryptVersion,
    cost: CostFactor,
    salt: RawSalt,
    digest: [u8; DIGEST_BYTES],
}

impl BcryptHash {
    pub fn new(
        version: BcryptVersion,
        cost: CostFactor,
        salt: RawSalt,
        digest: [u8; DIGEST_BYTES],
    ) -> Self {
        Self {
            version,
            cost,
            salt,
            digest,
        }
    }

    pub fn version(&self) -> BcryptVersion {
        self.version
    }

    pub fn cost(&self) -> CostFactor {
        self.cost
    }

    pub fn salt(&self) -> &RawSalt {
        &self.salt
    }

    pub fn digest(&self) -> &[u8; DIGEST_BYTES] {
        &self.digest
    }

    /// Compare against a freshly derived digest, inspecting every byte
    /// regardless of where the first difference is.
    pub fn digest_matches(&self, candidate: &[u8; DIGEST_BYTES]) -> bool {
        self.digest[..].ct_eq(&candidate[..]).into()
    }
}

impl FromStr for BcryptHash {
    type Err = HashFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH_LENGTH {
            return Err(HashFormatError::Length {
                expected: HASH_LENGTH,
                actual: s.len(),
            });
        }
        // ASCII only, so the byte offsets below are char boundaries
        if !s.is_ascii() {
            return Err(HashFormatError::Structure);
        }

        let bytes = s.as_bytes();
        if bytes[0] != b'$'
            || bytes[VERSION_RANGE.end] != b'$'
            || bytes[COST_RANGE.end] != b'$'
        {
            return Err(HashFormatError::Structure);
        }

        let version: BcryptVersion = s[VERSION_RANGE].parse()?;

        let cost_field = &s[COST_RANGE];
        let cost = Some(cost_field)
            .filter(|field| field.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|field| field.parse::<u32>().ok())
            .and_then(|cost| CostFactor::new(cost).ok())
            .ok_or_else(|| HashFormatError::InvalidCost(cost_field.to_string()))?;

        let salt_bytes = radix64::decode(&s[SALT_START..DIGEST_START])
            .map_err(|err| decode_error(err, SALT_START))?;
        let salt =
            RawSalt::try_from(salt_bytes.as_slice()).map_err(|_| HashFormatError::Structure)?;

        let digest_bytes =
            radix64::decode(&s[DIGEST_START..]).map_err(|err| decode_error(err, DIGEST_START))?;
        let digest: [u8; DIGEST_BYTES] = digest_bytes
            .as_slice()
            .try_into()
            .map_err(|_| HashFormatError::Structure)?;

        Ok(Self {
            version,
            cost,
            salt,
            digest,
        })
    }
}

/// Canonical form; unused trailing bits of the stored text are not kept.
impl fmt::Display for BcryptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}${}${}{}",
            self.version,
            self.cost,
            self.salt.encode(),
            radix64::encode(&self.digest)
        )
    }
}

fn decode_error(err: DecodeError, segment_start: usize) -> HashFormatError {
    match err {
        DecodeError::InvalidByte(offset, _) => {
            HashFormatError::InvalidCharacter(segment_start + offset)
        }
        _ => HashFormatError::Structure,
    }
}
