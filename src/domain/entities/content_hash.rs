//! Content hash entity
//!
//! MD5 digest of a user id's decimal string. Every other part of an
//! identicon (mosaic and color) is derived from these 16 bytes.

use super::UserId;
use core::{fmt::Display, str::FromStr};
use md5::{Digest, Md5};

/// Length of the raw digest in bytes
pub const CONTENT_HASH_LEN: usize = 16;

/// Length of the digest in hex characters
pub const CONTENT_HASH_HEX_LEN: usize = CONTENT_HASH_LEN * 2;

/// MD5 digest used as the sole entropy source of an identicon
///
/// Must stay MD5: icons already issued to accounts are derived from it.
/// Not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; CONTENT_HASH_LEN]);

impl ContentHash {
    /// Hashes the decimal string form of a user id (`5` hashes `"5"`)
    pub fn of_user(user_id: UserId) -> Self {
        Self::of_bytes(user_id.to_string().as_bytes())
    }

    /// Hashes arbitrary bytes
    pub fn of_bytes(data: &[u8]) -> Self {
        let digest = Md5::digest(data);
        let mut bytes = [0u8; CONTENT_HASH_LEN];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Wraps an already computed digest
    pub const fn from_bytes(bytes: [u8; CONTENT_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw digest
    pub fn as_bytes(&self) -> &[u8; CONTENT_HASH_LEN] {
        &self.0
    }

    /// Returns the digest as 32 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Reads bit `index` of the digest, least-significant bit first within
    /// each byte. Bits past the end of the digest read as unset.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        self.0
            .get(index / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }
}

impl FromStr for ContentHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let mut bytes = [0u8; CONTENT_HASH_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        let hash = ContentHash::of_user(5);
        assert_eq!(hash.to_hex(), "e4da3b7fbbce2345d7772b0674a318d5");
        assert_eq!(hash.to_hex().len(), CONTENT_HASH_HEX_LEN);
    }

    #[test]
    fn test_user_id_hashes_decimal_string() {
        assert_eq!(ContentHash::of_user(-1), ContentHash::of_bytes(b"-1"));
        assert_eq!(
            ContentHash::of_user(9_007_199_254_740_991),
            ContentHash::of_bytes(b"9007199254740991")
        );
    }

    #[test]
    fn test_parse_round_trips_display() {
        let hash: ContentHash = "e4da3b7fbbce2345d7772b0674a318d5".parse().unwrap();
        assert_eq!(hash, ContentHash::of_user(5));
        assert_eq!(hash.to_string(), "e4da3b7fbbce2345d7772b0674a318d5");
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let hash: ContentHash = "E4DA3B7FBBCE2345D7772B0674A318D5".parse().unwrap();
        assert_eq!(hash, ContentHash::of_user(5));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!("e4da3b".parse::<ContentHash>().is_err());
        assert!("".parse::<ContentHash>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(
            "zzda3b7fbbce2345d7772b0674a318d5"
                .parse::<ContentHash>()
                .is_err()
        );
    }

    #[test]
    fn test_bit_order_is_lsb_first() {
        let mut bytes = [0u8; CONTENT_HASH_LEN];
        bytes[0] = 0b0000_0101;
        bytes[1] = 0x80;
        let hash = ContentHash::from_bytes(bytes);
        assert!(hash.bit(0));
        assert!(!hash.bit(1));
        assert!(hash.bit(2));
        assert!(!hash.bit(8));
        assert!(hash.bit(15));
        assert!(!hash.bit(128));
    }
}
