//! Character-class validators
//!
//! Both accept any non-blank string made only of the permitted ASCII class;
//! there is no length bound.

use crate::foundation::{ValidationComplexity, ValidationError, ValidatorMetadata, require_text};

// ============================================================================
// ALPHANUMERIC
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII letters and digits.
    ///
    /// ```
    /// use veritas_validator::validators::alphanumeric;
    /// use veritas_validator::foundation::Validate;
    ///
    /// assert!(alphanumeric().is_valid("abc123"));
    /// assert!(!alphanumeric().is_valid("abc 123"));
    /// ```
    pub Alphanumeric for str;
    guard(require_text);
    rule(input) { input.bytes().all(|b| b.is_ascii_alphanumeric()) }
    error(input) {
        ValidationError::new("alphanumeric", "Only letters and digits are allowed")
    }
    metadata {
        ValidatorMetadata::named("Alphanumeric")
            .with_description("ASCII letters and digits only")
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["string", "pattern"])
    }
    fn alphanumeric();
}

// ============================================================================
// NUMERIC
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII digits.
    ///
    /// Signs, decimal points and separators are rejected.
    ///
    /// ```
    /// use veritas_validator::validators::numeric;
    /// use veritas_validator::foundation::Validate;
    ///
    /// assert!(numeric().is_valid("0042"));
    /// assert!(!numeric().is_valid("-42"));
    /// assert!(!numeric().is_valid("4.2"));
    /// ```
    pub Numeric for str;
    guard(require_text);
    rule(input) { input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::new("numeric", "Only digits are allowed") }
    metadata {
        ValidatorMetadata::named("Numeric")
            .with_description("ASCII digits only")
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["string", "pattern"])
    }
    fn numeric();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("abc", true)]
    #[case("ABC123", true)]
    #[case("7", true)]
    #[case("abc_123", false)]
    #[case("abc-123", false)]
    #[case("héllo", false)]
    #[case(" abc", false)]
    #[case("", false)]
    #[case("   ", false)]
    fn alphanumeric_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(Alphanumeric.is_valid(input), expected, "{input:?}");
    }

    #[rstest]
    #[case("0", true)]
    #[case("1234567890", true)]
    #[case("12a", false)]
    #[case("+1", false)]
    #[case("1 2", false)]
    #[case("٣", false)]
    #[case("", false)]
    fn numeric_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(Numeric.is_valid(input), expected, "{input:?}");
    }

    #[test]
    fn blank_reports_blank_code() {
        assert_eq!(numeric().validate("").unwrap_err().code, "blank");
        assert_eq!(alphanumeric().validate("\t").unwrap_err().code, "blank");
    }
}
