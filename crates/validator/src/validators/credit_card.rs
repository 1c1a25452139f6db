//! Payment card number validator.
//!
//! Accepts 12 to 19 digits, optionally grouped with spaces or dashes, that
//! pass the Luhn checksum. Issuer BIN ranges are not checked.

use crate::checksum::is_valid_luhn;
use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata, require_text,
};

/// Fewest digits in a card number.
pub const MIN_CARD_DIGITS: usize = 12;

/// Most digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

// ============================================================================
// CREDIT CARD VALIDATOR
// ============================================================================

/// Validates payment card numbers.
///
/// Whitespace and dashes are removed before checking; any other non-digit
/// character makes the number invalid.
///
/// # Examples
///
/// ```
/// use veritas_validator::validators::CreditCard;
/// use veritas_validator::foundation::Validate;
///
/// let validator = CreditCard;
/// assert!(validator.is_valid("4532015112830366"));
/// assert!(validator.is_valid("4532-0151-1283-0366"));
/// assert!(validator.is_valid("4532 0151 1283 0366"));
/// assert!(!validator.is_valid("4532015112830367"));
/// assert!(!validator.is_valid("4532/0151/1283/0366"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CreditCard;

impl CreditCard {
    /// Removes whitespace and dashes, the separators card numbers are
    /// commonly printed with.
    pub fn normalize(input: &str) -> String {
        input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    }
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        require_text(input)?;

        let digits = Self::normalize(input);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                "not_digits",
                "Card number may only contain digits, spaces and dashes",
            ));
        }

        if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
            return Err(ValidationError::length_out_of_range(
                MIN_CARD_DIGITS,
                MAX_CARD_DIGITS,
                digits.len(),
            ));
        }

        if !is_valid_luhn(&digits) {
            return Err(ValidationError::new(
                "luhn_checksum",
                "Card number fails the Luhn checksum",
            )
            .with_help("Check for a mistyped or transposed digit"));
        }

        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("CreditCard")
            .with_description("12-19 digit card number passing the Luhn checksum")
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["checksum", "finance"])
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4532015112830366")]
    #[case("4111 1111 1111 1111")]
    #[case("5555-5555-5555-4444")]
    #[case("378282246310005")]
    #[case("6011111111111117")]
    #[case("  4111111111111111  ")]
    fn accepts_valid_cards(#[case] input: &str) {
        assert!(CreditCard.is_valid(input), "{input} should pass");
    }

    #[rstest]
    #[case("", "blank")]
    #[case("   ", "blank")]
    #[case("4532015112830367", "luhn_checksum")]
    #[case("4111.1111.1111.1111", "not_digits")]
    #[case("4111x111111111111", "not_digits")]
    #[case("42", "length_out_of_range")]
    #[case("00000000000", "length_out_of_range")]
    #[case("00000000000000000000", "length_out_of_range")]
    fn rejects_with_code(#[case] input: &str, #[case] code: &str) {
        assert_eq!(CreditCard.validate(input).unwrap_err().code, code);
    }

    #[test]
    fn boundary_lengths() {
        // all-zero strings always pass Luhn, isolating the length rule
        assert!(CreditCard.is_valid(&"0".repeat(MIN_CARD_DIGITS)));
        assert!(CreditCard.is_valid(&"0".repeat(MAX_CARD_DIGITS)));
    }
}
