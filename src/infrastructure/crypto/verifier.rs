//! Password verification against stored bcrypt hashes

use tracing::{debug, warn};

use super::hash_format::BcryptHash;
use super::hasher::derive_digest;

/// Whether `hash` is a well-formed bcrypt hash string.
pub fn is_valid_bcrypt_hash(hash: &str) -> bool {
    hash.parse::<BcryptHash>().is_ok()
}

/// Verify that the given password is correct for the provided bcrypt hash.
///
/// Version, cost and salt all come from `stored_hash`; no hasher
/// configuration is involved, so hashes made at an older cost keep
/// verifying after the cost is raised. A malformed hash returns `false`
/// without hashing anything.
pub fn compare_password(password: &str, stored_hash: &str) -> bool {
    let stored = match stored_hash.parse::<BcryptHash>() {
        Ok(stored) => stored,
        Err(err) => {
            warn!(error = %err, "Stored password hash is not a valid bcrypt hash");
            return false;
        }
    };

    let derived = derive_digest(password.as_bytes(), stored.cost(), stored.salt());
    let verified = stored.digest_matches(&derived);
    debug!(
        version = %stored.version(),
        cost = stored.cost().get(),
        verified,
        "Checked password against bcrypt hash"
    );
    verified
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::BcryptVersion;
    use crate::infrastructure::crypto::BcryptHasher;

    #[test]
    fn test_verifies_reference_hashes() {
        let cases = [
            ("password123", "$2a$10$WUHhXETkX0fnYkrqZU3ta.u8pRn9TbW6eClyYLqHLAYAWnXRJpNRS"),
            ("password123", "$2x$10$WUHhXETkX0fnYkrqZU3ta.u8pRn9TbW6eClyYLqHLAYAWnXRJpNRS"),
            ("password", "$2a$04$UuTkLRZZ6QofpDOlMz32MuuxEHA43WOemOYHPz6.SjsVsyO1tDU96"),
            (
                "correctbatteryhorsestapler",
                "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie",
            ),
            (
                "My S3cre7 P@55w0rd!",
                "$2y$05$HlFShUxTu4ZHHfOLJwfmCeDj/kuKFKboanXtDJXxCC7aIPTUgxNDe",
            ),
            ("", "$2a$04$WUHhXETkX0fnYkrqZU3ta.Dei9siemF7Y7u5EXht8HvVA41x1CvnW"),
        ];
        for (password, hash) in cases {
            assert!(compare_password(password, hash), "{hash}");
        }
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let hash = "$2b$04$EGdrhbKUv8Oc9vGiXX0HQOxSg445d458Muh7DAHskb6QbtCvdxcie";
        assert!(!compare_password("wrong", hash));
        assert!(!compare_password("", hash));
        assert!(!compare_password("correctbatteryhorsestaple", hash));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        for hash in [
            "not-a-bcrypt-hash",
            "",
            "$2a$04$tjARW6ZON3PhrAIRW2LG/u9a.",
            "$2c$04$UuTkLRZZ6QofpDOlMz32MuuxEHA43WOemOYHPz6.SjsVsyO1tDU96",
            "$2a$03$UuTkLRZZ6QofpDOlMz32MuuxEHA43WOemOYHPz6.SjsVsyO1tDU96",
            "$2a$04$UuTkLRZZ6QofpDOlMz32MuuxEHA43WOemOYHPz6.SjsVsyO1tDU9$",
            "2a$$$0$OOOOOOOOOOOOOOOOOOOOOÂ£OOOOOOOOOOOOOOOOOOOOOOOOOOOOOO",
        ] {
            assert!(!compare_password("password", hash), "{hash}");
            assert!(!is_valid_bcrypt_hash(hash), "{hash}");
        }
    }

    #[test]
    fn test_verification_ignores_hasher_cost() {
        let low = BcryptHasher::new(BcryptVersion::TwoA, 4).unwrap();
        let high = BcryptHasher::new(BcryptVersion::TwoA, 12).unwrap();

        let low_hash = low.hash("s3cret");
        let high_hash = high.hash("s3cret");

        assert!(compare_password("s3cret", low_hash.hash()));
        assert!(compare_password("s3cret", high_hash.hash()));
    }

    #[test]
    fn test_valid_hash_predicate() {
        assert!(is_valid_bcrypt_hash(
            "$2b$12$ABCDEFGHIJKLMNOPQRSTUuCFhYdCiAggqZiepF1nsJV12FN6KcDEi"
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_hash_then_verify(password in "\\PC{0,40}") {
            let hasher = BcryptHasher::new(BcryptVersion::TwoB, 4).unwrap();
            let hashed = hasher.hash(&password);
            prop_assert!(compare_password(&password, hashed.hash()));
        }

        #[test]
        fn prop_other_password_does_not_verify(
            password in "[a-zA-Z0-9]{1,20}",
            other in "[a-zA-Z0-9]{1,20}",
        ) {
            prop_assume!(password != other);
            let hasher = BcryptHasher::new(BcryptVersion::TwoA, 4).unwrap();
            let hashed = hasher.hash(&password);
            prop_assert!(!compare_password(&other, hashed.hash()));
        }

        #[test]
        fn prop_fixed_salt_is_deterministic(
            password in "\\PC{0,40}",
            salt in proptest::array::uniform16(any::<u8>()),
        ) {
            let hasher = BcryptHasher::new(BcryptVersion::TwoY, 4).unwrap();
            let first = hasher.hash_with_salt(&password, &salt).unwrap();
            let second = hasher.hash_with_salt(&password, &salt).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert!(compare_password(&password, &first));
        }
    }
}
