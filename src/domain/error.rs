//! Domain errors

use thiserror::Error;

/// Errors raised while configuring a hasher or computing a hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Cost factor outside the range bcrypt accepts
    #[error("Cost factor {cost} is outside the allowed range {min}..={max}")]
    CostOutOfRange { cost: u32, min: u32, max: u32 },

    /// Raw salt with the wrong number of bytes
    #[error("Salt must be exactly {expected} bytes, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    /// The blocking task running the computation panicked or was cancelled
    #[error("Hashing task failed: {0}")]
    TaskFailed(String),
}

/// Reasons a stored string is not a well-formed bcrypt hash.
///
/// The verifier never surfaces these; a malformed record simply does not
/// verify. They are reported by [`BcryptHash`](crate::infrastructure::crypto::BcryptHash)
/// parsing for callers that want to inspect a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashFormatError {
    #[error("Hash must be {expected} characters long, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("Hash does not follow the $<version>$<cost>$<salt><digest> layout")]
    Structure,

    #[error("Unknown bcrypt version: {0}")]
    UnknownVersion(String),

    #[error("Invalid cost field: {0}")]
    InvalidCost(String),

    #[error("Invalid radix-64 character at position {0}")]
    InvalidCharacter(usize),
}

/// Result type for hashing operations
pub type HashResult<T> = Result<T, HashError>;
