//! Single-requirement predicates the password policy is built from.
//!
//! Each predicate checks exactly one property so the policy can report
//! every unmet requirement at once. Character classes are ASCII; anything
//! outside `[A-Za-z0-9]` counts as special.

use crate::foundation::ValidationError;

crate::validator! {
    /// At least `min` characters, counted as Unicode scalar values.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinChars { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_chars(min: usize);
}

crate::validator! {
    /// At least one ASCII uppercase letter.
    pub HasUppercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_uppercase()) }
    error(input) {
        ValidationError::new("missing_uppercase", "Must contain an uppercase letter")
    }
}

crate::validator! {
    /// At least one ASCII lowercase letter.
    pub HasLowercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_lowercase()) }
    error(input) {
        ValidationError::new("missing_lowercase", "Must contain a lowercase letter")
    }
}

crate::validator! {
    /// At least one ASCII digit.
    pub HasDigit for str;
    rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new("missing_digit", "Must contain a digit") }
}

crate::validator! {
    /// At least one character outside `[A-Za-z0-9]`.
    pub HasSpecial for str;
    rule(input) { input.chars().any(|c| !c.is_ascii_alphanumeric()) }
    error(input) {
        ValidationError::new("missing_special", "Must contain a special character")
    }
}
