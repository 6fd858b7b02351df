//! BCrypt hasher with a fixed version and cost

use tracing::debug;
use zeroize::Zeroize;

use super::hash_format::{BcryptHash, DIGEST_BYTES};
use super::salt::RawSalt;
use crate::domain::{BcryptVersion, CostFactor, HashResult, HashedPassword};

/// Longest key bcrypt consumes, trailing NUL included.
const MAX_KEY_BYTES: usize = 72;

/// Hashes passwords with one bcrypt version and cost.
///
/// Holds no mutable state, so a single instance can be shared by any number
/// of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    version: BcryptVersion,
    cost: CostFactor,
}

impl BcryptHasher {
    /// Fails with [`HashError::CostOutOfRange`](crate::domain::HashError::CostOutOfRange)
    /// when `cost` is outside `4..=31`.
    pub fn new(version: BcryptVersion, cost: u32) -> HashResult<Self> {
        Ok(Self::with_cost(version, CostFactor::new(cost)?))
    }

    pub fn with_cost(version: BcryptVersion, cost: CostFactor) -> Self {
        Self { version, cost }
    }

    pub fn version(&self) -> BcryptVersion {
        self.version
    }

    pub fn cost(&self) -> CostFactor {
        self.cost
    }

    /// Hash a password under a fresh random salt.
    pub fn hash(&self, password: &str) -> HashedPassword {
        let hash = self.derive(password, RawSalt::random());
        HashedPassword::new(hash.to_string())
    }

    /// Hash a password under a caller-supplied salt of exactly 16 bytes.
    ///
    /// The output is fully determined by the inputs, which makes this the
    /// path for reproducible hashes in tests; production code should use
    /// [`hash`](Self::hash).
    pub fn hash_with_salt(&self, password: &str, raw_salt: &[u8]) -> HashResult<String> {
        let salt = RawSalt::try_from(raw_salt)?;
        Ok(self.derive(password, salt).to_string())
    }

    fn derive(&self, password: &str, salt: RawSalt) -> BcryptHash {
        debug!(version = %self.version, cost = self.cost.get(), "Hashing password");
        let digest = derive_digest(password.as_bytes(), self.cost, &salt);
        BcryptHash::new(self.version, self.cost, salt, digest)
    }
}

/// Run the bcrypt key schedule and keep the 23 digest bytes that go into a
/// hash string.
///
/// The key is the password followed by a NUL byte, cut at 72 bytes.
pub(crate) fn derive_digest(
    password: &[u8],
    cost: CostFactor,
    salt: &RawSalt,
) -> [u8; DIGEST_BYTES] {
    let mut key = [0u8; MAX_KEY_BYTES];
    let len = password.len().min(MAX_KEY_BYTES);
    key[..len].copy_from_slice(&password[..len]);
    let key_len = (len + 1).min(MAX_KEY_BYTES);

    let mut output = bcrypt::bcrypt(cost.get(), *salt.as_bytes(), &key[..key_len]);
    key.zeroize();

    let mut digest = [0u8; DIGEST_BYTES];
    digest.copy_from_slice(&output[..DIGEST_BYTES]);
    output.zeroize();
    digest
}
