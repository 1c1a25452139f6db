//! Name-to-rule registry.
//!
//! [`RuleKind`] maps every built-in string rule to a symbolic name and
//! dispatches to it with a `match`. Rules are constructed on demand; none of
//! them carries state beyond its configuration.
//!
//! ```
//! use veritas_validator::registry::RuleKind;
//!
//! let rule: RuleKind = "credit_card".parse().unwrap();
//! assert_eq!(rule, RuleKind::CreditCard);
//! assert_eq!(rule.name(), "credit-card");
//! assert!(rule.is_valid("4111-1111-1111-1111"));
//! assert!(!rule.check(None));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError, ValidatorMetadata, check_present};
use crate::password::PasswordPolicy;
use crate::validators::{
    Alphanumeric, Base64, CreditCard, Email, Guid, HexColor, Iban, IpAddress, Luhn, Numeric,
    Phone, Url,
};

/// Returned when a rule name is not registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule `{name}`")]
pub struct UnknownRule {
    pub name: String,
}

/// Every built-in string rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    Alphanumeric,
    Base64,
    CreditCard,
    Email,
    Guid,
    HexColor,
    Iban,
    Ip,
    Luhn,
    Numeric,
    PasswordStrength,
    Phone,
    Url,
}

impl RuleKind {
    /// All kinds, in name order.
    pub const ALL: [Self; 13] = [
        Self::Alphanumeric,
        Self::Base64,
        Self::CreditCard,
        Self::Email,
        Self::Guid,
        Self::HexColor,
        Self::Iban,
        Self::Ip,
        Self::Luhn,
        Self::Numeric,
        Self::PasswordStrength,
        Self::Phone,
        Self::Url,
    ];

    /// Symbolic kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Base64 => "base64",
            Self::CreditCard => "credit-card",
            Self::Email => "email",
            Self::Guid => "guid",
            Self::HexColor => "hex-color",
            Self::Iban => "iban",
            Self::Ip => "ip",
            Self::Luhn => "luhn",
            Self::Numeric => "numeric",
            Self::PasswordStrength => "password-strength",
            Self::Phone => "phone",
            Self::Url => "url",
        }
    }

    /// Runs the rule and returns the detailed result.
    pub fn validate(self, input: &str) -> Result<(), ValidationError> {
        tracing::trace!(rule = self.name(), length = input.len(), "dispatching rule");
        match self {
            Self::Alphanumeric => Alphanumeric.validate(input),
            Self::Base64 => Base64.validate(input),
            Self::CreditCard => CreditCard.validate(input),
            Self::Email => Email.validate(input),
            Self::Guid => Guid.validate(input),
            Self::HexColor => HexColor.validate(input),
            Self::Iban => Iban.validate(input),
            Self::Ip => IpAddress::new().validate(input),
            Self::Luhn => Luhn.validate(input),
            Self::Numeric => Numeric.validate(input),
            Self::PasswordStrength => PasswordPolicy::default().validate(input),
            Self::Phone => Phone::default().validate(input),
            Self::Url => Url.validate(input),
        }
    }

    /// Boolean view of [`validate`](Self::validate).
    #[must_use]
    pub fn is_valid(self, input: &str) -> bool {
        self.validate(input).is_ok()
    }

    /// Like [`is_valid`](Self::is_valid); `None` is invalid.
    #[must_use]
    pub fn check(self, input: Option<&str>) -> bool {
        check_present(&self, input)
    }

    /// Metadata of the underlying rule.
    #[must_use]
    pub fn metadata(self) -> ValidatorMetadata {
        match self {
            Self::Alphanumeric => Alphanumeric.metadata(),
            Self::Base64 => Base64.metadata(),
            Self::CreditCard => CreditCard.metadata(),
            Self::Email => Email.metadata(),
            Self::Guid => Guid.metadata(),
            Self::HexColor => HexColor.metadata(),
            Self::Iban => Iban.metadata(),
            Self::Ip => IpAddress::new().metadata(),
            Self::Luhn => Luhn.metadata(),
            Self::Numeric => Numeric.metadata(),
            Self::PasswordStrength => PasswordPolicy::default().metadata(),
            Self::Phone => Phone::default().metadata(),
            Self::Url => Url.metadata(),
        }
    }
}

impl Validate for RuleKind {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        RuleKind::validate(*self, input)
    }

    fn metadata(&self) -> ValidatorMetadata {
        RuleKind::metadata(*self)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| UnknownRule {
                name: s.to_owned(),
            })
    }
}
