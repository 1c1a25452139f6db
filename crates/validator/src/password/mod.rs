//! Configurable password strength policy.
//!
//! A [`PasswordPolicy`] composes the single-purpose predicates in
//! [`predicates`] under a [`PasswordPolicyConfig`]. Unset config fields are
//! resolved to their defaults when the policy evaluates, not when it is
//! built, so [`PasswordPolicy::default()`] always reports the library
//! defaults.
//!
//! Long passphrases bypass the character-class requirements: once the input
//! reaches the bypass length, uppercase, lowercase and special characters are
//! no longer required. The minimum length and the digit requirement always
//! apply.
//!
//! # Examples
//!
//! ```
//! use veritas_validator::password::{PasswordPolicy, PasswordPolicyConfig};
//!
//! let policy = PasswordPolicy::default();
//! assert!(policy.evaluate("Aa1!aaaa"));
//! assert!(!policy.evaluate("short1A"));
//!
//! // 16+ characters: no special character needed
//! assert!(policy.evaluate("Abcdefghijklmno1"));
//!
//! let relaxed = PasswordPolicy::from(PasswordPolicyConfig::new().with_require_special(false));
//! assert!(relaxed.evaluate("Abcdefg1"));
//! ```

pub mod predicates;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    Validate, ValidateExt, ValidationComplexity, ValidationError, ValidatorMetadata,
    check_present, require_text, validate_with_all,
};
pub use predicates::{HasDigit, HasLowercase, HasSpecial, HasUppercase, MinChars, min_chars};

/// Minimum length applied when the config leaves it unset.
pub const DEFAULT_MINIMUM_LENGTH: usize = 8;

/// Length at which character-class requirements are waived, when unset.
pub const DEFAULT_SPECIAL_CHAR_BYPASS_LENGTH: usize = 16;

/// Default minimum length.
#[must_use]
pub const fn default_minimum_length() -> usize {
    DEFAULT_MINIMUM_LENGTH
}

/// Default bypass length.
#[must_use]
pub const fn default_special_char_bypass_length() -> usize {
    DEFAULT_SPECIAL_CHAR_BYPASS_LENGTH
}

// ============================================================================
// CONFIG
// ============================================================================

/// Optional policy parameters. `None` means "use the default".
///
/// Deserializes from a table such as:
///
/// ```toml
/// minimum_length = 12
/// require_special = false
/// ```
///
/// `special_char_bypass_length` is expected to be at least
/// `minimum_length` but this is not enforced. A smaller value makes the
/// bypass apply to passwords that are still too short to pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordPolicyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_char_bypass_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_upper: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_lower: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_special: Option<bool>,
}

impl PasswordPolicyConfig {
    /// A config with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            minimum_length: None,
            special_char_bypass_length: None,
            require_upper: None,
            require_lower: None,
            require_special: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_minimum_length(mut self, length: usize) -> Self {
        self.minimum_length = Some(length);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_special_char_bypass_length(mut self, length: usize) -> Self {
        self.special_char_bypass_length = Some(length);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_require_upper(mut self, required: bool) -> Self {
        self.require_upper = Some(required);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_require_lower(mut self, required: bool) -> Self {
        self.require_lower = Some(required);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_require_special(mut self, required: bool) -> Self {
        self.require_special = Some(required);
        self
    }

    /// Layers `overrides` on top of `self`: every field set in `overrides`
    /// wins.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            minimum_length: overrides.minimum_length.or(self.minimum_length),
            special_char_bypass_length: overrides
                .special_char_bypass_length
                .or(self.special_char_bypass_length),
            require_upper: overrides.require_upper.or(self.require_upper),
            require_lower: overrides.require_lower.or(self.require_lower),
            require_special: overrides.require_special.or(self.require_special),
        }
    }

    /// Fills every unset field with its default.
    #[must_use]
    pub fn resolve(&self) -> ResolvedPolicy {
        ResolvedPolicy {
            minimum_length: self.minimum_length.unwrap_or(DEFAULT_MINIMUM_LENGTH),
            special_char_bypass_length: self
                .special_char_bypass_length
                .unwrap_or(DEFAULT_SPECIAL_CHAR_BYPASS_LENGTH),
            require_upper: self.require_upper.unwrap_or(true),
            require_lower: self.require_lower.unwrap_or(true),
            require_special: self.require_special.unwrap_or(true),
        }
    }
}

/// A config with every default filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedPolicy {
    pub minimum_length: usize,
    pub special_char_bypass_length: usize,
    pub require_upper: bool,
    pub require_lower: bool,
    pub require_special: bool,
}

// ============================================================================
// POLICY
// ============================================================================

/// Password strength rule driven by a [`PasswordPolicyConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    config: PasswordPolicyConfig,
}

impl PasswordPolicy {
    /// Creates a policy from a config.
    #[must_use]
    pub const fn new(config: PasswordPolicyConfig) -> Self {
        Self { config }
    }

    /// The unresolved config this policy was built from.
    #[must_use]
    pub const fn config(&self) -> &PasswordPolicyConfig {
        &self.config
    }

    /// Effective minimum length.
    #[must_use]
    pub fn minimum_length(&self) -> usize {
        self.config.resolve().minimum_length
    }

    /// Effective bypass length.
    #[must_use]
    pub fn special_char_bypass_length(&self) -> usize {
        self.config.resolve().special_char_bypass_length
    }

    /// Boolean decision: `true` only if every applicable requirement holds.
    ///
    /// Empty and whitespace-only input is always rejected.
    #[must_use]
    pub fn evaluate(&self, input: &str) -> bool {
        self.is_valid(input)
    }

    /// Like [`evaluate`](Self::evaluate) but for a possibly absent value.
    #[must_use]
    pub fn evaluate_present(&self, input: Option<&str>) -> bool {
        check_present(self, input)
    }
}

impl From<PasswordPolicyConfig> for PasswordPolicy {
    fn from(config: PasswordPolicyConfig) -> Self {
        Self::new(config)
    }
}

impl Validate for PasswordPolicy {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        require_text(input)?;

        let rules = self.config.resolve();
        let bypass = rules.special_char_bypass_length;
        let below_bypass = move |value: &str| value.chars().count() < bypass;

        let min = MinChars::new(rules.minimum_length);
        let upper = HasUppercase.when(below_bypass);
        let lower = HasLowercase.when(below_bypass);
        let special = HasSpecial.when(below_bypass);

        let mut checks: Vec<&dyn Validate<Input = str>> = Vec::with_capacity(5);
        checks.push(&min);
        if rules.require_upper {
            checks.push(&upper);
        }
        if rules.require_lower {
            checks.push(&lower);
        }
        checks.push(&HasDigit);
        if rules.require_special {
            checks.push(&special);
        }

        validate_with_all(input, checks.as_slice()).map_err(|errors| {
            let failed: Vec<&str> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
            tracing::debug!(
                length = input.chars().count(),
                ?failed,
                "password rejected by policy"
            );
            errors
                .into_single_error("weak_password", "Password does not meet the policy")
                .with_param("minimum_length", rules.minimum_length.to_string())
                .with_param("bypass_length", bypass.to_string())
        })
    }

    fn metadata(&self) -> ValidatorMetadata {
        let rules = self.config.resolve();
        ValidatorMetadata::named("PasswordStrength")
            .with_description(format!(
                "At least {} characters with a digit; upper, lower and special \
                 characters below {} characters",
                rules.minimum_length, rules.special_char_bypass_length
            ))
            .with_complexity(ValidationComplexity::Linear)
            .with_tags(["password", "policy"])
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
    fn default_accessors() {
        assert_eq!(default_minimum_length(), 8);
        assert_eq!(default_special_char_bypass_length(), 16);
        let policy = PasswordPolicy::default();
        assert_eq!(policy.minimum_length(), 8);
        assert_eq!(policy.special_char_bypass_length(), 16);
    }

    #[rstest]
    #[case("Aa1!aaaa", true)]
    #[case("short1A", false)]
    #[case("aa1!aaaa", false)]
    #[case("AA1!AAAA", false)]
    #[case("Aa!aaaaa", false)]
    #[case("Aa1aaaaa", false)]
    #[case("abcdefghijklmno1", true)]
    #[case("abcdefghijklmnop", false)]
    #[case("abcdefghijklmn1", false)]
    #[case("", false)]
    #[case("        ", false)]
    fn default_policy(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(PasswordPolicy::default().evaluate(input), expected);
    }

    #[test]
    fn collects_every_failure_in_order() {
        let err = PasswordPolicy::default().validate("abc").unwrap_err();
        assert_eq!(err.code, "weak_password");
        assert_eq!(
            err.nested_codes(),
            vec!["min_length", "missing_uppercase", "missing_digit", "missing_special"]
        );
    }

    #[test]
    fn blank_is_reported_alone() {
        let err = PasswordPolicy::default().validate("   ").unwrap_err();
        assert_eq!(err.code, "blank");
        assert!(!err.has_nested());
    }

    #[test]
    fn disabled_requirements_are_skipped() {
        let policy = PasswordPolicy::from(
            PasswordPolicyConfig::new()
                .with_require_upper(false)
                .with_require_lower(false)
                .with_require_special(false),
        );
        assert!(policy.evaluate("12345678"));
        assert!(!policy.evaluate("abcdefgh"));
    }

    #[test]
    fn bypass_below_minimum_is_kept_literally() {
        let policy = PasswordPolicy::from(
            PasswordPolicyConfig::new()
                .with_minimum_length(10)
                .with_special_char_bypass_length(4),
        );
        // bypass active, but still too short
        assert_eq!(
            policy.validate("abc12").unwrap_err().nested_codes(),
            vec!["min_length"]
        );
        assert!(policy.evaluate("abcdefghi1"));
    }

    #[test]
    fn merge_prefers_overrides() {
        let base = PasswordPolicyConfig::new()
            .with_minimum_length(12)
            .with_require_upper(false);
        let merged = base.merge(PasswordPolicyConfig::new().with_minimum_length(6));
        assert_eq!(merged.minimum_length, Some(6));
        assert_eq!(merged.require_upper, Some(false));
        assert_eq!(merged.special_char_bypass_length, None);
    }

    #[test]
    fn absent_value_is_invalid() {
        let policy = PasswordPolicy::default();
        assert!(!policy.evaluate_present(None));
        assert!(policy.evaluate_present(Some("Aa1!aaaa")));
    }
}
