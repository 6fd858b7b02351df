//! # BCrypt Hasher
//!
//! Salted, cost-parameterized password hashing on top of BCrypt, producing
//! self-describing hash strings (`$2a$10$<salt><digest>`) that verify
//! without any outside configuration.
//!
//! ## Architecture
//!
//! - **domain**: Value types (version, cost, hashed password), errors and
//!   the pluggable `EncryptionMethod` port
//! - **infrastructure**: BCrypt hasher, verifier, radix-64 codec and salts
//! - **application**: Async password service that keeps hashing off the
//!   runtime's worker threads
//! - **config** / **logging**: TOML settings and tracing setup
//!
//! ```no_run
//! use bcrypt_hasher::{compare_password, BcryptHasher, BcryptVersion};
//!
//! let hasher = BcryptHasher::new(BcryptVersion::TwoA, 12)?;
//! let hashed = hasher.hash("correct horse battery staple");
//! assert!(compare_password("correct horse battery staple", hashed.hash()));
//! # Ok::<(), bcrypt_hasher::HashError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::{default_config_path, BcryptSettings, ConfigError, HasherSettings};
pub use logging::{init_tracing, LogFormat, LoggingConfig};

// Re-export the hashing core
pub use domain::{
    BcryptVersion, CostFactor, EncryptionMethod, HashError, HashFormatError, HashResult,
    HashedPassword,
};
pub use infrastructure::crypto::{
    compare_password, encode_salt, generate_salt, is_valid_bcrypt_hash, BcryptHash,
    BcryptHasher, BcryptMethod, RawSalt,
};

// Re-export the async service
pub use application::PasswordService;
