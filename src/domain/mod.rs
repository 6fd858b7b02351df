pub mod cost;
pub mod error;
pub mod hashed_password;
pub mod ports;
pub mod version;

// Re-export commonly used types
pub use cost::{CostFactor, DEFAULT_COST, MAX_COST, MIN_COST};
pub use error::{HashError, HashFormatError, HashResult};
pub use hashed_password::HashedPassword;
pub use ports::EncryptionMethod;
pub use version::BcryptVersion;
