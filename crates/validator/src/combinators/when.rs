//! WHEN combinator - conditional validation
//!
//! The inner validator only runs if the condition returns `true`; otherwise
//! validation succeeds immediately. The password policy uses this to waive
//! character-class requirements once a passphrase is long enough.

use crate::foundation::{Validate, ValidationError, ValidatorMetadata};

/// Conditionally applies a validator based on a predicate.
///
/// # Examples
///
/// ```
/// use veritas_validator::combinators::When;
/// use veritas_validator::foundation::Validate;
/// use veritas_validator::validators::Numeric;
///
/// // Only strings starting with '#' are checked.
/// let validator = When::new(Numeric, |s: &str| !s.starts_with('#'));
/// assert!(validator.is_valid("#anything"));
/// assert!(validator.is_valid("123"));
/// assert!(!validator.is_valid("12a"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) validator: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.validator.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() >= self.min {
                Ok(())
            } else {
                Err(ValidationError::min_length(self.min, input.len()))
            }
        }
    }

    #[test]
    fn test_when_condition_true() {
        let validator = When::new(MinLength { min: 10 }, |s: &str| s.starts_with("check_"));
        assert!(validator.validate("check_hello").is_ok());
        assert!(validator.validate("check_").is_err());
    }

    #[test]
    fn test_when_condition_false() {
        let validator = When::new(MinLength { min: 5 }, |s: &str| s.starts_with("check_"));
        assert!(validator.validate("hi").is_ok());
        assert!(validator.validate("").is_ok());
    }

    #[test]
    fn test_when_via_ext() {
        let validator = MinLength { min: 10 }.when(|s: &str| !s.is_empty());
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("short").is_err());
        assert!(validator.validate("long_enough!").is_ok());
    }
}
