//! BCrypt as an [`EncryptionMethod`]

use super::hasher::BcryptHasher;
use super::salt::{generate_salt, RawSalt};
use super::verifier::compare_password;
use crate::domain::{EncryptionMethod, HashResult, HashedPassword};

/// BCrypt adapter for the encryption method port.
///
/// The salt is embedded in the hash string, so nothing beyond the
/// [`HashedPassword`] needs storing.
#[derive(Debug, Clone, Copy)]
pub struct BcryptMethod {
    hasher: BcryptHasher,
}

impl BcryptMethod {
    pub fn new(hasher: BcryptHasher) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &BcryptHasher {
        &self.hasher
    }
}

impl From<BcryptHasher> for BcryptMethod {
    fn from(hasher: BcryptHasher) -> Self {
        Self::new(hasher)
    }
}

impl EncryptionMethod for BcryptMethod {
    fn compute_hash(
        &self,
        password: &str,
        existing_salt: Option<&str>,
    ) -> HashResult<HashedPassword> {
        match existing_salt {
            Some(salt) => {
                let salt = RawSalt::from_text(salt)?;
                self.hasher
                    .hash_with_salt(password, salt.as_bytes())
                    .map(HashedPassword::new)
            }
            None => Ok(self.hasher.hash(password)),
        }
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        compare_password(password, stored_hash)
    }

    fn generate_salt(&self) -> String {
        generate_salt()
    }

    fn has_separate_salt(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BcryptVersion, HashError};

    fn bcrypt_method(version: BcryptVersion, cost: u32) -> BcryptMethod {
        BcryptHasher::new(version, cost).unwrap().into()
    }

    #[test]
    fn test_compute_hash_with_text_salt() {
        let method = bcrypt_method(BcryptVersion::TwoA, 10);
        let hashed = method
            .compute_hash("password123", Some("abcdefghijklmnop"))
            .unwrap();
        assert_eq!(
            hashed.hash(),
            "$2a$10$WUHhXETkX0fnYkrqZU3ta.u8pRn9TbW6eClyYLqHLAYAWnXRJpNRS"
        );
        assert!(method.verify("password123", hashed.hash()));
    }

    #[test]
    fn test_compute_hash_without_salt_verifies() {
        let method = bcrypt_method(BcryptVersion::TwoB, 4);
        let hashed = method.compute_hash("hunter2", None).unwrap();
        assert!(method.verify("hunter2", hashed.hash()));
        assert!(!method.verify("hunter3", hashed.hash()));
    }

    #[test]
    fn test_generated_salt_is_accepted() {
        let method = bcrypt_method(BcryptVersion::TwoY, 4);
        for _ in 0..20 {
            let salt = method.generate_salt();
            let first = method.compute_hash("password", Some(salt.as_str())).unwrap();
            let second = method.compute_hash("password", Some(salt.as_str())).unwrap();
            assert_eq!(first, second);
            assert!(method.verify("password", first.hash()));
        }
    }

    #[test]
    fn test_bad_text_salt_is_an_error() {
        let method = bcrypt_method(BcryptVersion::TwoA, 4);
        assert_eq!(
            method.compute_hash("password", Some("short")),
            Err(HashError::InvalidSaltLength {
                expected: 16,
                actual: 5
            })
        );
    }

    #[test]
    fn test_salt_lives_inside_the_hash() {
        assert!(!bcrypt_method(BcryptVersion::TwoA, 4).has_separate_salt());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let method: Box<dyn EncryptionMethod> = Box::new(bcrypt_method(BcryptVersion::TwoA, 4));
        let hashed = method.compute_hash("password", None).unwrap();
        assert!(method.verify("password", hashed.as_ref()));
        assert!(!method.verify("password", "not-a-bcrypt-hash"));
    }
}
