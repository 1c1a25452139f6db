//! GUID validator (canonical 8-4-4-4-12 form).

use crate::foundation::{ValidationComplexity, ValidationError, ValidatorMetadata, require_text};

const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

fn is_canonical_guid(input: &str) -> bool {
    let mut groups = input.split('-');
    let shape_ok = GROUPS.iter().all(|&len| {
        groups
            .next()
            .is_some_and(|group| group.len() == len && group.bytes().all(|b| b.is_ascii_hexdigit()))
    });
    shape_ok && groups.next().is_none()
}

crate::validator! {
    /// Validates GUIDs in the canonical hyphenated `8-4-4-4-12` hex form,
    /// case-insensitive. Braced, URN and un-hyphenated forms are rejected.
    ///
    /// ```
    /// use veritas_validator::validators::Guid;
    /// use veritas_validator::foundation::Validate;
    ///
    /// assert!(Guid.is_valid("123e4567-e89b-12d3-a456-426614174000"));
    /// assert!(Guid.is_valid("123E4567-E89B-12D3-A456-426614174000"));
    /// assert!(!Guid.is_valid("{123e4567-e89b-12d3-a456-426614174000}"));
    /// assert!(!Guid.is_valid("123e4567e89b12d3a456426614174000"));
    /// ```
    pub Guid for str;
    guard(require_text);
    rule(input) { is_canonical_guid(input) }
    error(input) {
        ValidationError::invalid_format("guid")
            .with_help("Expected xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx")
    }
    metadata {
        ValidatorMetadata::named("Guid")
            .with_description("Hyphenated 8-4-4-4-12 hex GUID")
            .with_complexity(ValidationComplexity::Constant)
            .with_tags(["string", "identifier"])
    }
    fn guid();
}
