//! Hex color validator (`#RGB` / `#RRGGBB`).

use crate::foundation::{ValidationComplexity, ValidationError, ValidatorMetadata, require_text};

fn is_hex_color(input: &str) -> bool {
    match input.as_bytes() {
        [b'#', digits @ ..] if digits.len() == 3 || digits.len() == 6 => {
            digits.iter().all(u8::is_ascii_hexdigit)
        }
        _ => false,
    }
}

crate::validator! {
    /// Validates CSS-style hex colors: a `#` followed by exactly 3 or 6 hex
    /// digits, in either case.
    ///
    /// ```
    /// use veritas_validator::validators::HexColor;
    /// use veritas_validator::foundation::Validate;
    ///
    /// assert!(HexColor.is_valid("#fff"));
    /// assert!(HexColor.is_valid("#1A2b3C"));
    /// assert!(!HexColor.is_valid("1A2B3C"));
    /// assert!(!HexColor.is_valid("#1A2B3C4D"));
    /// ```
    pub HexColor for str;
    guard(require_text);
    rule(input) { is_hex_color(input) }
    error(input) {
        ValidationError::invalid_format("hex_color")
            .with_help("Use #RGB or #RRGGBB")
    }
    metadata {
        ValidatorMetadata::named("HexColor")
            .with_description("#RGB or #RRGGBB hex color")
            .with_complexity(ValidationComplexity::Constant)
            .with_tags(["string", "color"])
    }
    fn hex_color();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("#000")]
    #[case("#FfF")]
    #[case("#abcdef")]
    #[case("#ABCDEF")]
    #[case("#09af3C")]
    fn accepts(#[case] input: &str) {
        assert!(hex_color().is_valid(input));
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("fff")]
    #[case("#ffff")]
    #[case("#fffff")]
    #[case("#fffffff")]
    #[case("#ggg")]
    #[case("##fff")]
    #[case(" #fff")]
    #[case("#fff ")]
    fn rejects(#[case] input: &str) {
        assert!(!hex_color().is_valid(input), "{input:?}");
    }
}
