//! BCrypt hashing, verification and salt handling

pub mod hash_format;
pub mod hasher;
pub mod method;
pub mod radix64;
pub mod salt;
pub mod verifier;

pub use hash_format::{BcryptHash, DIGEST_BYTES, HASH_LENGTH};
pub use hasher::BcryptHasher;
pub use method::BcryptMethod;
pub use salt::{encode_salt, generate_salt, RawSalt, BYTES_IN_SALT, SALT_LENGTH_ENCODED};
pub use verifier::{compare_password, is_valid_bcrypt_hash};
