//! Encryption method port, the pluggable password-hash contract
//!
//! A credential store talks to this trait only, so the hashing algorithm
//! behind it can be swapped without touching callers.

use crate::domain::{HashResult, HashedPassword};

// ── EncryptionMethod ───────────────────────────────────────────

/// Port for computing and checking password hashes.
///
/// Implementations are immutable after construction and shared between
/// request handlers, hence `Send + Sync`.
pub trait EncryptionMethod: Send + Sync {
    /// Hash a password.
    ///
    /// With `existing_salt`, the salt is taken from the caller in text form
    /// (its UTF-8 bytes are the raw salt); otherwise a fresh one is drawn.
    fn compute_hash(&self, password: &str, existing_salt: Option<&str>)
        -> HashResult<HashedPassword>;

    /// Check a password against a stored hash.
    ///
    /// Malformed or foreign hashes yield `false`, never an error.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;

    /// Produce a salt suitable for the `existing_salt` argument of
    /// [`compute_hash`](Self::compute_hash).
    fn generate_salt(&self) -> String;

    /// Whether the salt has to be stored next to the hash.
    fn has_separate_salt(&self) -> bool;
}
