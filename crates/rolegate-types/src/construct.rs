//! Fallible construction trait.
//!
//! [`TryNew`] is the construction pattern for types in this workspace
//! that validate their input: role names must be non-empty, identifiers
//! must decode to the right width. A type that implements `TryNew` has no
//! plain `new` performing the same validation — the `try_` prefix keeps
//! fallibility visible at the call site.
//!
//! | Pattern | Use when |
//! |---------|----------|
//! | `new()` | Construction always succeeds |
//! | [`TryNew`] | Construction validates and may fail |
//! | `TryFrom<T>` | Fallible conversion from another type |

/// Trait for fallible construction with validation.
///
/// # Example
///
/// ```
/// use rolegate_types::TryNew;
///
/// #[derive(Debug)]
/// struct SlotCount(usize);
///
/// #[derive(Debug, PartialEq)]
/// struct ZeroSlots;
///
/// impl TryNew for SlotCount {
///     type Error = ZeroSlots;
///     type Args = usize;
///
///     fn try_new(count: usize) -> Result<Self, Self::Error> {
///         if count == 0 {
///             return Err(ZeroSlots);
///         }
///         Ok(SlotCount(count))
///     }
/// }
///
/// assert!(SlotCount::try_new(20).is_ok());
/// assert_eq!(SlotCount::try_new(0).unwrap_err(), ZeroSlots);
/// ```
pub trait TryNew {
    /// The error type returned when validation fails.
    type Error;

    /// Arguments required for construction; use a tuple for several.
    type Args;

    /// Attempts to create a new instance.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if validation fails.
    fn try_new(args: Self::Args) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
