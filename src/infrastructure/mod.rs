//! Infrastructure layer - external concerns

pub mod crypto;

pub use crypto::{compare_password, generate_salt, is_valid_bcrypt_hash, BcryptHasher, BcryptMethod};
