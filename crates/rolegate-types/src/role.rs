//! Role name type.

use crate::TryNew;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error constructing a [`RoleName`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRoleName {
    /// Role names must contain at least one character.
    #[error("role name must not be empty")]
    Empty,
}

/// A non-empty, case-sensitive role identifier.
///
/// Roles form a tree rooted at the distinguished [`OWNER`](Self::OWNER)
/// role. Names are compared byte-for-byte: `"Issuer"` and `"issuer"` are
/// different roles.
///
/// # Validated Construction
///
/// Constructed through [`TryNew`] so an empty name cannot exist:
///
/// ```
/// use rolegate_types::{RoleName, TryNew};
///
/// let role = RoleName::try_new("Compliance".to_string())?;
/// assert_eq!(role.as_str(), "Compliance");
///
/// assert!(RoleName::try_new(String::new()).is_err());
/// # Ok::<(), rolegate_types::InvalidRoleName>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    /// Name of the distinguished root role.
    pub const OWNER: &'static str = "Owner";

    /// Returns the root role name.
    #[must_use]
    pub fn owner() -> Self {
        Self(Self::OWNER.to_string())
    }

    /// Returns `true` if this is the root role.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.0 == Self::OWNER
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryNew for RoleName {
    type Error = InvalidRoleName;
    type Args = String;

    fn try_new(name: String) -> Result<Self, Self::Error> {
        if name.is_empty() {
            return Err(InvalidRoleName::Empty);
        }
        Ok(Self(name))
    }
}

impl TryFrom<String> for RoleName {
    type Error = InvalidRoleName;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::try_new(name)
    }
}

impl From<RoleName> for String {
    fn from(role: RoleName) -> Self {
        role.0
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hashes and compares exactly like the underlying string, so maps keyed
// by RoleName can be probed with &str.
impl std::borrow::Borrow<str> for RoleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RoleName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoleName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
