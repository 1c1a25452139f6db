//! AND combinator - logical conjunction of validators
//!
//! Both validators must pass for the combined validator to succeed. The
//! error of the first failing validator is returned.

use crate::foundation::{Validate, ValidationError, ValidatorMetadata};

/// Combines two validators with logical AND.
///
/// # Examples
///
/// ```
/// use veritas_validator::combinators::And;
/// use veritas_validator::foundation::Validate;
/// use veritas_validator::validators::{Alphanumeric, Numeric};
///
/// let validator = And::new(Alphanumeric, Numeric);
/// assert!(validator.is_valid("12345"));
/// assert!(!validator.is_valid("12a45")); // fails Numeric
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        let left = self.left.metadata();
        let right = self.right.metadata();
        ValidatorMetadata::named(format!("And<{}, {}>", left.name, right.name))
            .with_complexity(left.complexity.max(right.complexity))
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

    struct MaxLength {
        max: usize,
    }

    impl Validate for MaxLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() <= self.max {
                Ok(())
            } else {
                Err(ValidationError::new("max_length", "too long"))
            }
        }
    }

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(MinLength { min: 5 }, MaxLength { max: 10 });
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_reports_first_failure() {
        let validator = And::new(MinLength { min: 5 }, MaxLength { max: 10 });
        assert_eq!(validator.validate("hi").unwrap_err().code, "min_length");
        assert_eq!(
            validator.validate("verylongstring").unwrap_err().code,
            "max_length"
        );
    }

    #[test]
    fn test_and_chain() {
        let validator = MinLength { min: 3 }
            .and(MaxLength { max: 10 })
            .and(MinLength { min: 5 });
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hey").is_err());
    }
}
