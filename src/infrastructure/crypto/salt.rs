//! Salt generation and encoding

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use super::radix64;
use crate::domain::{HashError, HashResult};

/// Number of bytes in a bcrypt salt (not encoded).
pub const BYTES_IN_SALT: usize = 16;
/// Number of characters of the salt in its radix-64 encoded form.
pub const SALT_LENGTH_ENCODED: usize = 22;

/// Characters a text-typed salt is drawn from. Each is a single UTF-8 byte
/// that survives str → bytes → str unchanged.
const SALT_TEXT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Sixteen raw salt bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawSalt([u8; BYTES_IN_SALT]);

impl RawSalt {
    pub fn new(bytes: [u8; BYTES_IN_SALT]) -> Self {
        Self(bytes)
    }

    /// Fresh salt over the full byte range, straight from the OS CSPRNG.
    pub fn random() -> Self {
        let mut bytes = [0u8; BYTES_IN_SALT];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Raw salt from its text form: the UTF-8 bytes of `salt`, which must
    /// number exactly [`BYTES_IN_SALT`].
    pub fn from_text(salt: &str) -> HashResult<Self> {
        Self::try_from(salt.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; BYTES_IN_SALT] {
        &self.0
    }

    /// The 22-character form embedded in a hash string.
    pub fn encode(&self) -> String {
        encode_salt(&self.0)
    }
}

impl From<[u8; BYTES_IN_SALT]> for RawSalt {
    fn from(bytes: [u8; BYTES_IN_SALT]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for RawSalt {
    type Error = HashError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; BYTES_IN_SALT] =
            bytes.try_into().map_err(|_| HashError::InvalidSaltLength {
                expected: BYTES_IN_SALT,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }
}

/// Generate a salt for bcrypt in text form. The returned salt is not yet
/// encoded.
///
/// Characters are limited to ASCII letters so that the salt's bytes come
/// back unchanged from a `String`; 52 symbols over 16 positions still give
/// about 91 bits of entropy. Hashing that does not cross a text boundary
/// uses [`RawSalt::random`] instead.
pub fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    (0..BYTES_IN_SALT)
        .map(|_| char::from(SALT_TEXT_ALPHABET[rng.gen_range(0..SALT_TEXT_ALPHABET.len())]))
        .collect()
}

/// Encode raw salt bytes into bcrypt's 22-character radix-64 form.
pub fn encode_salt(salt: &[u8; BYTES_IN_SALT]) -> String {
    radix64::encode(salt)
}
