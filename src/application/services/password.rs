//! Password service: bcrypt work on the blocking pool
//!
//! A bcrypt call at a production cost takes hundreds of milliseconds of CPU.
//! Async callers (login and registration handlers) go through this service so
//! the computation never occupies a runtime worker thread.

use std::sync::Arc;

use tokio::task;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::domain::{EncryptionMethod, HashError, HashResult, HashedPassword};

/// Async wrapper over an [`EncryptionMethod`].
///
/// Cheap to clone; clones share the same method instance.
pub struct PasswordService<M: EncryptionMethod + 'static> {
    method: Arc<M>,
}

impl<M: EncryptionMethod + 'static> Clone for PasswordService<M> {
    fn clone(&self) -> Self {
        Self {
            method: Arc::clone(&self.method),
        }
    }
}

impl<M: EncryptionMethod + 'static> PasswordService<M> {
    pub fn new(method: Arc<M>) -> Self {
        Self { method }
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    /// Hash a password under a fresh salt.
    pub async fn hash_password(&self, password: &str) -> HashResult<HashedPassword> {
        let method = Arc::clone(&self.method);
        let password = Zeroizing::new(password.to_owned());

        task::spawn_blocking(move || method.compute_hash(&password, None))
            .await
            .map_err(|e| {
                warn!(error = %e, "Password hashing task failed");
                HashError::TaskFailed(e.to_string())
            })?
    }

    /// Hash a password under a text-form salt (see
    /// [`generate_salt`](crate::infrastructure::crypto::generate_salt)).
    pub async fn hash_password_with_salt(
        &self,
        password: &str,
        salt: &str,
    ) -> HashResult<HashedPassword> {
        let method = Arc::clone(&self.method);
        let password = Zeroizing::new(password.to_owned());
        let salt = salt.to_owned();

        task::spawn_blocking(move || method.compute_hash(&password, Some(salt.as_str())))
            .await
            .map_err(|e| {
                warn!(error = %e, "Password hashing task failed");
                HashError::TaskFailed(e.to_string())
            })?
    }

    /// Check a password against a stored hash.
    ///
    /// Fails closed: a malformed hash or a failed task both yield `false`.
    pub async fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        let method = Arc::clone(&self.method);
        let password = Zeroizing::new(password.to_owned());
        let stored_hash = stored_hash.to_owned();

        match task::spawn_blocking(move || method.verify(&password, &stored_hash)).await {
            Ok(verified) => {
                debug!(verified, "Password verification finished");
                verified
            }
            Err(e) => {
                warn!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
