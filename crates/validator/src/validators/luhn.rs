//! Standalone Luhn rule.
//!
//! Unlike [`CreditCard`](super::CreditCard), nothing is stripped: the input
//! must already be a bare digit string.

use crate::checksum::luhn::{MIN_LUHN_DIGITS, luhn_sum};
use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata, require_text,
};

/// Validates that a digit string passes the Luhn checksum.
///
/// # Examples
///
/// ```
/// use veritas_validator::validators::Luhn;
/// use veritas_validator::foundation::Validate;
///
/// assert!(Luhn.is_valid("79927398713"));
/// assert!(!Luhn.is_valid("79927398710"));
/// assert!(!Luhn.is_valid("7992 7398 713"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Luhn;

impl Validate for Luhn {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        require_text(input)?;

        let Some(remainder) = luhn_sum(input) else {
            return Err(ValidationError::new(
                "not_digits",
                "Only digits are allowed",
            ));
        };

        if input.len() < MIN_LUHN_DIGITS {
            return Err(ValidationError::min_length(MIN_LUHN_DIGITS, input.len()));
        }

        if remainder == 0 {
            Ok(())
        } else {
            Err(ValidationError::new(
                "luhn_checksum",
                "Number fails the Luhn checksum",
            )
            .with_param("remainder", remainder.to_string()))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Luhn")
            .with_description("Digit string passing the Luhn mod-10 checksum")
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["checksum"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::is_valid_luhn;
    use rstest::rstest;

    #[rstest]
    #[case("79927398713", None)]
    #[case("4532015112830366", None)]
    #[case("4532015112830367", Some("luhn_checksum"))]
    #[case("5", Some("min_length"))]
    #[case("12-3", Some("not_digits"))]
    #[case(" ", Some("blank"))]
    fn codes(#[case] input: &str, #[case] code: Option<&str>) {
        let result = Luhn.validate(input);
        assert_eq!(result.as_ref().err().map(|e| e.code.as_ref()), code);
        assert_eq!(result.is_ok(), is_valid_luhn(input));
    }

    #[test]
    fn checksum_failure_reports_remainder() {
        let err = Luhn.validate("79927398710").unwrap_err();
        assert_eq!(err.param("remainder"), Some("7"));
    }
}
