//! Core types for the Rolegate permission engine.
//!
//! This crate provides the foundational identifier types shared by every
//! Rolegate crate. It sits at the bottom of the dependency graph and is
//! safe for host integrations to depend on directly.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  rolegate-types : WalletAddress, ResourceId, MethodId,   │
//! │                   RoleName, TryNew, ErrorCode   ◄── HERE │
//! │  rolegate-event : AuditEvent, AuditSink                  │
//! ├──────────────────────────────────────────────────────────┤
//! │  rolegate-auth  : registries, grant stores, ownership,   │
//! │                   PermissionModule facade                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Identifier Design
//!
//! Wallets and resources are fixed 20-byte account identifiers with a
//! distinguished all-zero sentinel; privileged operations are identified
//! by a 4-byte fingerprint derived from the operation's canonical
//! signature. All identifiers are plain value types:
//!
//! - **Host compatible**: fixed-width, hex-representable, serde-ready
//! - **Sentinel aware**: "no wallet" / "no method" is an explicit zero
//!   value, never a null
//! - **Validated construction**: parsing goes through [`TryNew`] so an
//!   invalid identifier cannot exist
//!
//! # Example
//!
//! ```
//! use rolegate_types::{MethodId, RoleName, TryNew, WalletAddress};
//!
//! let wallet: WalletAddress = "0x00aa00aa00aa00aa00aa00aa00aa00aa00aa00aa".parse()?;
//! assert!(!wallet.is_zero());
//!
//! let method = MethodId::of_signature("transfer(address,uint256)");
//! assert!(!method.is_zero());
//!
//! let role = RoleName::try_new("Issuer".to_string())?;
//! assert_eq!(role.as_str(), "Issuer");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod address;
mod construct;
mod error;
mod method;
mod role;

pub use address::{AddressParseError, ResourceId, WalletAddress, ADDRESS_LEN};
pub use construct::TryNew;
pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use method::{MethodId, METHOD_ID_LEN};
pub use role::{InvalidRoleName, RoleName};
