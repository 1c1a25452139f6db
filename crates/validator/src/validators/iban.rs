//! IBAN validator.
//!
//! Structural rule on top of the mod-97 checksum: the shape and, for
//! registered countries, the exact length are checked first, and only a
//! well-formed number reaches the checksum.

use crate::checksum::iban::{MAX_IBAN_LENGTH, MIN_IBAN_LENGTH, has_iban_shape, mod97_remainder};
use crate::foundation::{
    Validate, ValidationComplexity, ValidationError, ValidatorMetadata, require_text,
};

/// IBAN lengths from the SWIFT IBAN registry, sorted by country code.
#[rustfmt::skip]
const COUNTRY_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20),
    ("BE", 16), ("BG", 22), ("BH", 22), ("BI", 27), ("BR", 29), ("BY", 28),
    ("CH", 21), ("CR", 22), ("CY", 28), ("CZ", 24), ("DE", 22), ("DJ", 27),
    ("DK", 18), ("DO", 28), ("EE", 20), ("EG", 29), ("ES", 24), ("FI", 18),
    ("FK", 18), ("FO", 18), ("FR", 27), ("GB", 22), ("GE", 22), ("GI", 23),
    ("GL", 18), ("GR", 27), ("GT", 28), ("HR", 21), ("HU", 28), ("IE", 22),
    ("IL", 23), ("IQ", 23), ("IS", 26), ("IT", 27), ("JO", 30), ("KW", 30),
    ("KZ", 20), ("LB", 28), ("LC", 32), ("LI", 21), ("LT", 20), ("LU", 20),
    ("LV", 21), ("LY", 25), ("MC", 27), ("MD", 24), ("ME", 22), ("MK", 19),
    ("MN", 20), ("MR", 27), ("MT", 31), ("MU", 30), ("NI", 28), ("NL", 18),
    ("NO", 15), ("OM", 23), ("PK", 24), ("PL", 28), ("PS", 29), ("PT", 25),
    ("QA", 29), ("RO", 24), ("RS", 22), ("RU", 33), ("SA", 24), ("SC", 31),
    ("SD", 18), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27), ("SO", 23),
    ("ST", 25), ("SV", 28), ("TL", 23), ("TN", 24), ("TR", 26), ("UA", 29),
    ("VA", 22), ("VG", 24), ("XK", 20), ("YE", 30),
];

/// Registered IBAN length for an upper-case country code.
pub fn country_length(country: &str) -> Option<usize> {
    COUNTRY_LENGTHS
        .binary_search_by(|(code, _)| (*code).cmp(country))
        .ok()
        .map(|index| COUNTRY_LENGTHS[index].1)
}

// ============================================================================
// IBAN VALIDATOR
// ============================================================================

/// Validates International Bank Account Numbers.
///
/// The input is upper-cased and ASCII spaces are removed (IBANs are usually
/// printed in groups of four). Countries missing from the registry table
/// are accepted on the generic 5-34 character shape alone.
///
/// # Examples
///
/// ```
/// use veritas_validator::validators::Iban;
/// use veritas_validator::foundation::Validate;
///
/// let validator = Iban;
/// assert!(validator.is_valid("GB82WEST12345698765432"));
/// assert!(validator.is_valid("GB82 WEST 1234 5698 7654 32"));
/// assert!(validator.is_valid("gb82west12345698765432"));
/// assert!(!validator.is_valid("GB82WEST1234569876543")); // GB is 22 chars
/// assert!(!validator.is_valid("GB82WEST12345698765433"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Iban;

impl Iban {
    /// Upper-cases and drops ASCII spaces.
    pub fn normalize(input: &str) -> String {
        input
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    fn check_shape(iban: &str) -> Result<(), ValidationError> {
        if !(MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(&iban.len()) {
            return Err(ValidationError::length_out_of_range(
                MIN_IBAN_LENGTH,
                MAX_IBAN_LENGTH,
                iban.len(),
            ));
        }

        if !has_iban_shape(iban) {
            return Err(ValidationError::invalid_format("iban").with_help(
                "Expected a 2-letter country code, 2 check digits and up to 30 letters or digits",
            ));
        }

        let country = &iban[..2];
        if let Some(expected) = country_length(country)
            && iban.len() != expected
        {
            return Err(ValidationError::new(
                "iban_country_length",
                format!("{country} IBANs have exactly {expected} characters"),
            )
            .with_param("country", country.to_string())
            .with_param("expected", expected.to_string())
            .with_param("actual", iban.len().to_string()));
        }

        Ok(())
    }
}

impl Validate for Iban {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        require_text(input)?;

        let iban = Self::normalize(input);
        Self::check_shape(&iban)?;

        if mod97_remainder(&iban) == Some(1) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "iban_checksum",
                "IBAN fails the mod-97 checksum",
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Iban")
            .with_description("IBAN with registry length and mod-97 checksum")
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

    #[test]
    fn country_table_is_sorted() {
        assert!(COUNTRY_LENGTHS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(
            COUNTRY_LENGTHS
                .iter()
                .all(|(_, len)| (MIN_IBAN_LENGTH..=MAX_IBAN_LENGTH).contains(len))
        );
    }

    #[test]
    fn country_lookup() {
        assert_eq!(country_length("GB"), Some(22));
        assert_eq!(country_length("NO"), Some(15));
        assert_eq!(country_length("ZZ"), None);
    }

    #[rstest]
    #[case("GB82WEST12345698765432")]
    #[case("DE89 3704 0044 0532 0130 00")]
    #[case("fr1420041010050500013m02606")]
    #[case("NO9386011117947")]
    fn accepts_valid(#[case] input: &str) {
        assert!(Iban.is_valid(input), "{input} should pass");
    }

    #[rstest]
    #[case("", "blank")]
    #[case("GB8", "length_out_of_range")]
    #[case("GB82-WEST-1234-5698-7654-32", "invalid_format")]
    #[case("G182WEST12345698765432", "invalid_format")]
    #[case("GB82WEST123456987654321", "iban_country_length")]
    #[case("GB82WEST12345698765433", "iban_checksum")]
    fn rejects_with_code(#[case] input: &str, #[case] code: &str) {
        assert_eq!(Iban.validate(input).unwrap_err().code, code);
    }

    #[test]
    fn unregistered_country_uses_generic_shape() {
        // "ZZ" is not in the registry: only the checksum decides.
        let body = "123456789";
        let check = 98 - mod97_remainder(&format!("ZZ00{body}")).unwrap();
        let iban = format!("ZZ{check:02}{body}");
        assert!(Iban.is_valid(&iban));
    }
}
