//! Method fingerprint type.
//!
//! A privileged operation is identified by a fixed 4-byte fingerprint
//! derived from its canonical signature. The engine only compares
//! fingerprints for equality; the hashing convention below is the one the
//! host tooling uses, and raw fingerprints from other conventions are
//! accepted via [`MethodId::new`].

use crate::TryNew;
use crate::address::AddressParseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Byte width of a method fingerprint.
pub const METHOD_ID_LEN: usize = 4;

/// A 4-byte fingerprint identifying one privileged operation.
///
/// # Fingerprint Convention
///
/// [`of_signature`](Self::of_signature) hashes the canonical signature
/// string with SHA-256 and keeps the first four bytes:
///
/// ```
/// use rolegate_types::MethodId;
///
/// let transfer = MethodId::of_signature("transfer(address,uint256)");
/// let mint = MethodId::of_signature("mint(address,uint256)");
///
/// assert_ne!(transfer, mint);
/// assert_eq!(transfer, MethodId::of_signature("transfer(address,uint256)"));
/// ```
///
/// # Zero Sentinel
///
/// The all-zero fingerprint is the "no method" sentinel and is rejected
/// by the engine wherever a real method is required.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId([u8; METHOD_ID_LEN]);

impl MethodId {
    /// The all-zero sentinel: "no method".
    pub const ZERO: Self = Self([0u8; METHOD_ID_LEN]);

    /// Creates a fingerprint from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; METHOD_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Derives the fingerprint of a canonical signature string.
    ///
    /// SHA-256 of the signature, truncated to the first four bytes.
    #[must_use]
    pub fn of_signature(signature: &str) -> Self {
        let digest = Sha256::digest(signature.as_bytes());
        let mut bytes = [0u8; METHOD_ID_LEN];
        bytes.copy_from_slice(&digest[..METHOD_ID_LEN]);
        Self(bytes)
    }

    /// Returns `true` for the zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the raw fingerprint bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; METHOD_ID_LEN] {
        &self.0
    }
}

impl TryNew for MethodId {
    type Error = AddressParseError;
    type Args = String;

    fn try_new(hex_string: String) -> Result<Self, Self::Error> {
        hex_string.parse()
    }
}

impl FromStr for MethodId {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::address::decode_fixed(s).map(Self)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodId({self})")
    }
}

impl Serialize for MethodId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MethodId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_signature_is_deterministic() {
        let a = MethodId::of_signature("pause()");
        let b = MethodId::of_signature("pause()");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_signatures_distinct_fingerprints() {
        assert_ne!(
            MethodId::of_signature("pause()"),
            MethodId::of_signature("unpause()")
        );
    }

    #[test]
    fn zero_sentinel() {
        assert!(MethodId::ZERO.is_zero());
        assert!(!MethodId::of_signature("pause()").is_zero());
    }

    #[test]
    fn display_parse_roundtrip() {
        let id = MethodId::new([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(id.to_string(), "0xdeadbeef");
        let parsed: MethodId = "0xdeadbeef".parse().expect("parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "0xdeadbeef00".parse::<MethodId>().unwrap_err();
        assert_eq!(
            err,
            AddressParseError::InvalidLength {
                expected: 4,
                got: 5
            }
        );
    }

    #[test]
    fn serde_roundtrip() {
        let id = MethodId::of_signature("burn(uint256)");
        let json = serde_json::to_string(&id).expect("serialize");
        let back: MethodId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
