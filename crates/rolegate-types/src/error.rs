//! Unified error-code interface.
//!
//! Every error type in the workspace that crosses the engine boundary
//! implements [`ErrorCode`], giving host integrations a stable,
//! machine-readable code per failure and a recoverability hint for their
//! own retry logic. The engine itself never retries.

/// Unified error code interface.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**: e.g. `"PERM_NOT_FOUND"`
/// - **Domain-prefixed**: engine errors use the `PERM_` prefix
/// - **Stable**: codes are an API contract and do not change once defined
///
/// # Recoverability
///
/// An error is recoverable when the operator can change the system state
/// and retry the same call: a full grant table can be freed up. Invalid
/// input or missing authority will not improve on retry.
///
/// # Example
///
/// ```
/// use rolegate_types::ErrorCode;
///
/// #[derive(Debug)]
/// enum GrantError {
///     SlotsFull,
///     UnknownRole,
/// }
///
/// impl ErrorCode for GrantError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::SlotsFull => "GRANT_SLOTS_FULL",
///             Self::UnknownRole => "GRANT_UNKNOWN_ROLE",
///         }
///     }
///
///     fn is_recoverable(&self) -> bool {
///         matches!(self, Self::SlotsFull)
///     }
/// }
///
/// assert_eq!(GrantError::SlotsFull.code(), "GRANT_SLOTS_FULL");
/// assert!(GrantError::SlotsFull.is_recoverable());
/// ```
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether retrying after operator action can succeed.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows workspace conventions:
/// non-empty, UPPER_SNAKE_CASE, carrying the expected prefix.
///
/// # Panics
///
/// Panics with a descriptive message if validation fails. Intended for
/// tests.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'",
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE",
    );
}

/// Validates every code in a slice; use to cover all variants of an
/// error enum in one assertion.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
