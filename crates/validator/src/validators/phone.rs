//! Phone number validator.
//!
//! Two modes: strict E.164 (`+` and digits only) and a lenient mode that
//! also accepts the separators people actually type.

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata, require_text,
};

/// Fewest digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Most digits in a phone number (E.164 limit).
pub const MAX_PHONE_DIGITS: usize = 15;

/// Phone validation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneMode {
    /// `+` followed by digits only.
    E164,
    /// Optional `+`, single separators (space, `-`, `.`) between digit
    /// groups and at most one parenthesised group.
    #[default]
    Lenient,
}

// ============================================================================
// PHONE VALIDATOR
// ============================================================================

/// Validates phone numbers.
///
/// # Examples
///
/// ```
/// use veritas_validator::validators::Phone;
/// use veritas_validator::foundation::Validate;
///
/// let lenient = Phone::lenient();
/// assert!(lenient.is_valid("+1 (415) 555-1234"));
/// assert!(lenient.is_valid("020 7123 4567"));
/// assert!(!lenient.is_valid("555--1234"));
///
/// let e164 = Phone::e164();
/// assert!(e164.is_valid("+14155551234"));
/// assert!(!e164.is_valid("14155551234"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phone {
    mode: PhoneMode,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '.')
}

impl Phone {
    /// Strict E.164 validator.
    #[must_use]
    pub fn e164() -> Self {
        Self {
            mode: PhoneMode::E164,
        }
    }

    /// Lenient validator (the default).
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            mode: PhoneMode::Lenient,
        }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> PhoneMode {
        self.mode
    }

    fn validate_e164(input: &str) -> Result<(), ValidationError> {
        let Some(number) = input.strip_prefix('+') else {
            return Err(ValidationError::new(
                "e164_missing_plus",
                "E.164 phone number must start with '+'",
            ));
        };

        if !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                "e164_invalid_chars",
                "E.164 phone number must contain only digits after '+'",
            ));
        }

        Self::validate_digit_count(number.len())
    }

    fn validate_lenient(input: &str) -> Result<(), ValidationError> {
        let body = input.strip_prefix('+').unwrap_or(input);

        let mut digits = 0;
        let mut groups = 0;
        let mut in_group = false;
        let mut previous: Option<char> = None;

        for c in body.chars() {
            match c {
                '0'..='9' => digits += 1,
                '(' if !in_group && groups == 0 => {
                    in_group = true;
                    groups += 1;
                }
                ')' if in_group && previous.is_some_and(|p| p.is_ascii_digit()) => {
                    in_group = false;
                }
                c if is_separator(c) => {
                    // separators sit between digits or after a closing group
                    if !previous.is_some_and(|p| p.is_ascii_digit() || p == ')') {
                        return Err(ValidationError::new(
                            "phone_separator",
                            "Separators must sit between digit groups",
                        ));
                    }
                }
                _ => {
                    return Err(ValidationError::new(
                        "phone_invalid_chars",
                        "Phone number contains invalid characters",
                    )
                    .with_param("char", c.to_string()));
                }
            }
            previous = Some(c);
        }

        if in_group {
            return Err(ValidationError::new(
                "phone_unbalanced_parens",
                "Phone number has an unclosed parenthesis",
            ));
        }

        if previous.is_some_and(is_separator) {
            return Err(ValidationError::new(
                "phone_separator",
                "Phone number must not end with a separator",
            ));
        }

        Self::validate_digit_count(digits)
    }

    fn validate_digit_count(count: usize) -> Result<(), ValidationError> {
        if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&count) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "phone_digit_count",
                format!(
                    "Phone number must have {MIN_PHONE_DIGITS} to {MAX_PHONE_DIGITS} digits (found {count})"
                ),
            )
            .with_param("actual", count.to_string()))
        }
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        require_text(input)?;

        match self.mode {
            PhoneMode::E164 => Self::validate_e164(input),
            PhoneMode::Lenient => Self::validate_lenient(input),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Phone")
            .with_description(format!(
                "Phone number ({:?} mode, {MIN_PHONE_DIGITS}-{MAX_PHONE_DIGITS} digits)",
                self.mode
            ))
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["string", "contact"])
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod e164 {
        use super::*;

        #[rstest]
        #[case("+14155551234")]
        #[case("+442071234567")]
        #[case("+1234567")]
        fn accepts(#[case] input: &str) {
            assert!(Phone::e164().is_valid(input));
        }

        #[rstest]
        #[case("14155551234", "e164_missing_plus")]
        #[case("+1 415 555 1234", "e164_invalid_chars")]
        #[case("+123456", "phone_digit_count")]
        #[case("+1234567890123456", "phone_digit_count")]
        fn rejects(#[case] input: &str, #[case] code: &str) {
            assert_eq!(Phone::e164().validate(input).unwrap_err().code, code);
        }
    }

    mod lenient {
        use super::*;

        #[rstest]
        #[case("+1 (415) 555-1234")]
        #[case("(415) 555-1234")]
        #[case("415.555.1234")]
        #[case("+44 20 7123 4567")]
        #[case("5551234")]
        fn accepts(#[case] input: &str) {
            assert!(Phone::lenient().is_valid(input), "{input:?}");
        }

        #[rstest]
        #[case("", "blank")]
        #[case("555--1234", "phone_separator")]
        #[case("-5551234", "phone_separator")]
        #[case("5551234-", "phone_separator")]
        #[case("(415 555 1234", "phone_unbalanced_parens")]
        #[case("(415) (555) 1234", "phone_invalid_chars")]
        #[case("415) 555 1234", "phone_invalid_chars")]
        #[case("555-CALL-NOW", "phone_invalid_chars")]
        #[case("1+5551234", "phone_invalid_chars")]
        #[case("555 12", "phone_digit_count")]
        fn rejects(#[case] input: &str, #[case] code: &str) {
            assert_eq!(
                Phone::lenient().validate(input).unwrap_err().code,
                code,
                "{input:?}"
            );
        }
    }

    #[test]
    fn default_is_lenient() {
        assert_eq!(Phone::default().mode(), PhoneMode::Lenient);
    }
}
