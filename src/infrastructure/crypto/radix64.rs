//! BCrypt radix-64 codec
//!
//! Same 3-bytes-to-4-characters packing as base64, but with bcrypt's own
//! alphabet (`./A-Za-z0-9`) and no padding. A 16-byte salt encodes to 22
//! characters, a 23-byte digest to 31.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{DecodeError, Engine};

/// Unused low bits of the final character are ignored on decode, as other
/// bcrypt implementations do.
const BCRYPT_RADIX64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::BCRYPT,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Encode bytes with the bcrypt alphabet.
pub fn encode(bytes: &[u8]) -> String {
    BCRYPT_RADIX64.encode(bytes)
}

/// Decode bcrypt radix-64 text.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    BCRYPT_RADIX64.decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes_encode_to_dots() {
        assert_eq!(encode(&[0u8; 16]), "......................");
    }

    #[test]
    fn test_known_salt_encoding() {
        let salt = [
            38, 113, 212, 141, 108, 213, 195, 166, 201, 38, 20, 13, 47, 40, 104, 18,
        ];
        assert_eq!(encode(&salt), "HlFShUxTu4ZHHfOLJwfmCe");
        assert_eq!(encode(b"abcdefghijklmnop"), "WUHhXETkX0fnYkrqZU3ta.");
    }

    #[test]
    fn test_lengths() {
        assert_eq!(encode(&[0xff; 16]).len(), 22);
        assert_eq!(encode(&[0xff; 23]).len(), 31);
        assert_eq!(encode(&[1, 2, 3]).len(), 4);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_trailing_bits_are_ignored() {
        // 'e' and 'f' differ only in the four bits past the 16th byte.
        assert_eq!(
            decode("HlFShUxTu4ZHHfOLJwfmCe").unwrap(),
            decode("HlFShUxTu4ZHHfOLJwfmCf").unwrap()
        );
    }

    #[test]
    fn test_rejects_standard_base64_symbols() {
        assert!(matches!(
            decode("ab+d"),
            Err(DecodeError::InvalidByte(_, b'+'))
        ));
        assert!(decode("abcd==").is_err());
        assert!(decode("abc$").is_err());
    }
}
