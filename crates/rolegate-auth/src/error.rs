//! Engine error taxonomy.
//!
//! Every mutating operation fails with exactly one [`PermissionError`]
//! variant and leaves no partial state behind. Queries never fail: absent
//! roles, methods, and grants read as `false` or as empty slots.
//!
//! The engine performs no retry and no silent recovery; callers surface
//! the failure to their own operator. [`ErrorCode`] gives each variant a
//! stable `PERM_*` code for that purpose.

use rolegate_types::ErrorCode;
use thiserror::Error;

/// Why a mutating operation was rejected.
///
/// # Example
///
/// ```
/// use rolegate_auth::PermissionError;
/// use rolegate_types::ErrorCode;
///
/// let err = PermissionError::limit_exceeded(20);
/// assert_eq!(err.code(), "PERM_LIMIT_EXCEEDED");
/// assert!(err.is_recoverable()); // a slot can be freed and the call retried
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PermissionError {
    /// Empty or malformed name, role, method, or address-like identifier.
    #[error("invalid input: {what}")]
    InvalidInput {
        /// Which argument was rejected.
        what: &'static str,
    },

    /// Caller lacks owner status or the required delegated parent role.
    #[error("unauthorized: {reason}")]
    Unauthorized {
        /// Which authority check failed.
        reason: &'static str,
    },

    /// Referenced role, method attachment, or grant does not exist.
    #[error("not found: {what}")]
    NotFound {
        /// What was looked up.
        what: String,
    },

    /// Attempted duplicate creation or duplicate grant.
    #[error("already exists: {what}")]
    AlreadyExists {
        /// What already existed.
        what: String,
    },

    /// Role already in the requested active/inactive state.
    #[error("invalid state: {message}")]
    InvalidState {
        /// Which state transition was rejected.
        message: &'static str,
    },

    /// The wallet (or wallet+resource pair) already holds the maximum
    /// number of role grants.
    #[error("limit exceeded: already holds {limit} role grants")]
    LimitExceeded {
        /// The configured per-key grant capacity.
        limit: usize,
    },
}

/// Authority-check failure reasons, phrased once so tests and hosts can
/// match on them.
impl PermissionError {
    /// Rejection of a role/method registry mutation by a non-owner.
    pub const ONLY_OWNER: &'static str = "allowed only for the owner";
    /// Rejection of a grant mutation by a caller holding neither the
    /// parent role nor ownership.
    pub const MANAGEMENT_NOT_ALLOWED: &'static str = "role management not allowed";
    /// Rejection of an ownership acceptance by anyone but the candidate.
    pub const ONLY_APPOINTED_OWNER: &'static str = "allowed only for the appointed owner";

    /// A `NotFound` for the given subject.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// An `AlreadyExists` for the given subject.
    #[must_use]
    pub fn already_exists(what: impl Into<String>) -> Self {
        Self::AlreadyExists { what: what.into() }
    }

    /// A `LimitExceeded` at the given capacity.
    #[must_use]
    pub fn limit_exceeded(limit: usize) -> Self {
        Self::LimitExceeded { limit }
    }

    /// An `Unauthorized` with the given reason.
    #[must_use]
    pub fn unauthorized(reason: &'static str) -> Self {
        Self::Unauthorized { reason }
    }

    /// An `InvalidInput` naming the rejected argument.
    #[must_use]
    pub fn invalid_input(what: &'static str) -> Self {
        Self::InvalidInput { what }
    }
}

impl ErrorCode for PermissionError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "PERM_INVALID_INPUT",
            Self::Unauthorized { .. } => "PERM_UNAUTHORIZED",
            Self::NotFound { .. } => "PERM_NOT_FOUND",
            Self::AlreadyExists { .. } => "PERM_ALREADY_EXISTS",
            Self::InvalidState { .. } => "PERM_INVALID_STATE",
            Self::LimitExceeded { .. } => "PERM_LIMIT_EXCEEDED",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Only a full slot table can be remedied (revoke, then retry);
        // every other rejection repeats on an identical call.
        matches!(self, Self::LimitExceeded { .. })
    }
}
