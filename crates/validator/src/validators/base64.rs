//! Base64 validator (standard alphabet, padded).

use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata, require_text,
};

/// Most `=` characters a padded base64 string can end with.
const MAX_PADDING: usize = 2;

// ============================================================================
// BASE64 VALIDATOR
// ============================================================================

/// Validates padded base64 in the standard `[A-Za-z0-9+/]` alphabet.
///
/// Rules, checked in order:
/// - length is a multiple of 4
/// - only alphabet characters and `=` appear
/// - `=` only appears as a trailing run of at most two characters
///
/// This is a structural check; it does not decode the data, so non-canonical
/// trailing bits are accepted.
///
/// # Examples
///
/// ```
/// use veritas_validator::validators::Base64;
/// use veritas_validator::foundation::Validate;
///
/// assert!(Base64.is_valid("SGVsbG8="));
/// assert!(Base64.is_valid("SGVsbG8hIQ=="));
/// assert!(!Base64.is_valid("SGVsbG8"));   // truncated padding
/// assert!(!Base64.is_valid("SG=sbG8="));  // padding in the middle
/// assert!(!Base64.is_valid("SGVs_G8="));  // url-safe alphabet
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Base64;

fn is_alphabet(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/'
}

impl Validate for Base64 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        require_text(input)?;

        let bytes = input.as_bytes();
        if bytes.len() % 4 != 0 {
            return Err(ValidationError::new(
                "base64_length",
                "Base64 length must be a multiple of 4",
            )
            .with_param("actual", bytes.len().to_string()));
        }

        if let Some(position) = bytes.iter().position(|&b| !is_alphabet(b) && b != b'=') {
            return Err(ValidationError::new(
                "base64_alphabet",
                "Base64 may only contain A-Z, a-z, 0-9, '+', '/' and '='",
            )
            .with_param("position", position.to_string()));
        }

        let data_len = bytes.iter().rposition(|&b| b != b'=').map_or(0, |i| i + 1);
        let padding = bytes.len() - data_len;
        let stray_padding = bytes[..data_len].contains(&b'=');
        if stray_padding || padding > MAX_PADDING {
            return Err(ValidationError::new(
                "base64_padding",
                "Padding '=' may only appear as the last one or two characters",
            ));
        }

        Ok(())
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Base64")
            .with_description("Padded standard-alphabet base64")
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["string", "encoding"])
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
    #[case("TWFu")]
    #[case("TWE=")]
    #[case("TQ==")]
    #[case("aGVsbG8gd29ybGQ=")]
    #[case("+/+/")]
    fn accepts(#[case] input: &str) {
        assert!(Base64.is_valid(input), "{input:?}");
    }

    #[rstest]
    #[case("", "blank")]
    #[case("    ", "blank")]
    #[case("TWE", "base64_length")]
    #[case("TQ=", "base64_length")]
    #[case("TW u", "base64_alphabet")]
    #[case("TW-_", "base64_alphabet")]
    #[case("====", "base64_padding")]
    #[case("T===", "base64_padding")]
    #[case("T=Fu", "base64_padding")]
    #[case("TW=u", "base64_padding")]
    #[case("TWE=TWE=", "base64_padding")]
    fn rejects_with_code(#[case] input: &str, #[case] code: &str) {
        assert_eq!(Base64.validate(input).unwrap_err().code, code, "{input:?}");
    }
}
