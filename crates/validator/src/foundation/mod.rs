//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Metadata**: [`ValidatorMetadata`]
//!
//! Every string rule in this crate shares one input contract: absent
//! (`None`), empty and whitespace-only input is invalid. [`require_text`]
//! implements the blank half of that contract and [`check_present`] the
//! absent half.

pub mod error;
pub mod metadata;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use metadata::{ValidationComplexity, ValidatorMetadata};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rejects empty and whitespace-only input with a `blank` error.
///
/// # Examples
///
/// ```
/// use veritas_validator::foundation::require_text;
///
/// assert!(require_text("abc").is_ok());
/// assert_eq!(require_text(" \t").unwrap_err().code, "blank");
/// ```
pub fn require_text(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        Err(ValidationError::blank())
    } else {
        Ok(())
    }
}

/// Applies a string validator to a possibly absent value.
///
/// `None` is invalid; `Some` delegates to [`Validate::is_valid`].
pub fn check_present<V>(validator: &V, input: Option<&str>) -> bool
where
    V: Validate<Input = str> + ?Sized,
{
    input.is_some_and(|value| validator.is_valid(value))
}

/// Runs every validator and collects every failure.
///
/// Unlike [`ValidateExt::and`], this does not stop at the first failure.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result()
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
