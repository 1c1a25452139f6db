//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use crate::foundation::{ValidationError, ValidatorMetadata};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// `validate` returns the detailed result; [`Validate::is_valid`] collapses it
/// to the boolean decision. Validators are stateless after construction, so
/// calling either method twice with the same input gives the same answer.
///
/// # Examples
///
/// ```
/// use veritas_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.len() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.len()))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 3 }.is_valid("abc"));
/// assert!(!MinLength { min: 3 }.is_valid("ab"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first (or every) failure
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean view of [`Validate::validate`].
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// Returns metadata about this validator.
    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(std::any::type_name::<Self>())
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Makes validation conditional on a predicate.
    ///
    /// The validator only runs if the condition returns `true`; otherwise
    /// validation succeeds without running it.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::when::When;
