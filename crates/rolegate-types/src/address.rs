//! Account and resource identifier types.
//!
//! Wallets and resources are fixed 20-byte identifiers, represented as
//! distinct newtypes so a resource reference can never be passed where a
//! wallet is expected. Both serialize as lowercase `0x`-prefixed hex.
//!
//! # Zero Sentinel
//!
//! The all-zero value is the explicit "no identity" sentinel. The engine
//! rejects it wherever a real identity is required (for example, proposing
//! the zero address as a new owner), so [`is_zero`](WalletAddress::is_zero)
//! is the canonical emptiness check.

use crate::TryNew;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Byte width of wallet and resource identifiers.
pub const ADDRESS_LEN: usize = 20;

/// Error parsing a hex identifier string.
#[derive(Debug, Error, PartialEq)]
pub enum AddressParseError {
    /// Decoded byte length did not match the fixed identifier width.
    #[error("identifier must be {expected} bytes, got {got}")]
    InvalidLength {
        /// Required byte width.
        expected: usize,
        /// Width actually decoded.
        got: usize,
    },

    /// Input contained non-hex characters or an odd digit count.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Decodes a `0x`-prefixed or bare hex string into a fixed-width array.
pub(crate) fn decode_fixed<const N: usize>(input: &str) -> Result<[u8; N], AddressParseError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(digits)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| AddressParseError::InvalidLength { expected: N, got })
}

/// A wallet identity: a fixed 20-byte account identifier.
///
/// The engine treats wallets as opaque identities supplied by the host;
/// authentication of the caller behind an address is a host concern.
///
/// # Example
///
/// ```
/// use rolegate_types::{TryNew, WalletAddress};
///
/// let wallet = WalletAddress::try_new("0x00aa00aa00aa00aa00aa00aa00aa00aa00aa00aa".into())?;
/// assert!(!wallet.is_zero());
/// assert!(WalletAddress::ZERO.is_zero());
/// # Ok::<(), rolegate_types::AddressParseError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalletAddress([u8; ADDRESS_LEN]);

impl WalletAddress {
    /// The all-zero sentinel: "no wallet".
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Creates a wallet address from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns `true` for the zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the raw identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl TryNew for WalletAddress {
    type Error = AddressParseError;
    type Args = String;

    fn try_new(hex_string: String) -> Result<Self, Self::Error> {
        decode_fixed(&hex_string).map(Self)
    }
}

impl FromStr for WalletAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WalletAddress({self})")
    }
}

impl Serialize for WalletAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WalletAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// An opaque external resource reference (a managed asset, a tenant).
///
/// Same 20-byte shape and hex conventions as [`WalletAddress`], but a
/// distinct type: resource-scoped grants are keyed by `(wallet, resource)`
/// and the two halves of that key must not be interchangeable.
///
/// The engine never validates that a resource exists; the identifier is
/// whatever the host supplies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId([u8; ADDRESS_LEN]);

impl ResourceId {
    /// The all-zero sentinel: "no resource".
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Creates a resource identifier from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns `true` for the zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the raw identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl TryNew for ResourceId {
    type Error = AddressParseError;
    type Args = String;

    fn try_new(hex_string: String) -> Result<Self, Self::Error> {
        decode_fixed(&hex_string).map(Self)
    }
}

impl FromStr for ResourceId {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({self})")
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(byte: u8) -> WalletAddress {
        WalletAddress::new([byte; ADDRESS_LEN])
    }

    #[test]
    fn zero_sentinel() {
        assert!(WalletAddress::ZERO.is_zero());
        assert!(ResourceId::ZERO.is_zero());
        assert!(!wallet(1).is_zero());
    }

    #[test]
    fn display_is_prefixed_lowercase_hex() {
        let addr = wallet(0xAB);
        assert_eq!(addr.to_string(), format!("0x{}", "ab".repeat(20)));
    }

    #[test]
    fn parse_roundtrip() {
        let addr = wallet(0x7f);
        let parsed: WalletAddress = addr.to_string().parse().expect("roundtrip parse");
        assert_eq!(parsed, addr);
    }

    #[test]
    fn parse_accepts_bare_hex() {
        let bare = "11".repeat(20);
        let addr: WalletAddress = bare.parse().expect("bare hex parse");
        assert_eq!(addr, wallet(0x11));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "0x1234".parse::<WalletAddress>().unwrap_err();
        assert_eq!(
            err,
            AddressParseError::InvalidLength {
                expected: 20,
                got: 2
            }
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        let err = "zz".repeat(20).parse::<WalletAddress>().unwrap_err();
        assert!(matches!(err, AddressParseError::InvalidHex(_)));
    }

    #[test]
    fn try_new_matches_from_str() {
        let hex = format!("0x{}", "42".repeat(20));
        let a = WalletAddress::try_new(hex.clone()).expect("try_new");
        let b: WalletAddress = hex.parse().expect("parse");
        assert_eq!(a, b);
    }

    #[test]
    fn serde_roundtrip_as_hex_string() {
        let addr = wallet(0x0c);
        let json = serde_json::to_string(&addr).expect("serialize");
        assert_eq!(json, format!("\"0x{}\"", "0c".repeat(20)));
        let back: WalletAddress = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, addr);
    }

    #[test]
    fn resource_id_roundtrip() {
        let res = ResourceId::new([0x5a; ADDRESS_LEN]);
        let parsed: ResourceId = res.to_string().parse().expect("roundtrip parse");
        assert_eq!(parsed, res);
    }
}
