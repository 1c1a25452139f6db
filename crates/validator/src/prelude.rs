//! Prelude module for convenient imports.
//!
//! `use veritas_validator::prelude::*;` brings in the traits, error types,
//! every built-in rule, the password policy, the date rules and the registry.

// ============================================================================
// FOUNDATION: Core traits, errors, metadata
// ============================================================================

pub use crate::foundation::{
    Validate, ValidateExt, ValidationComplexity, ValidationError, ValidationErrors,
    ValidatorMetadata, check_present, require_text, validate_with_all,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    Alphanumeric, Base64, CreditCard, Email, Guid, HexColor, Iban, IpAddress, Luhn, Numeric,
    Phone, PhoneMode, Url, alphanumeric, email, guid, hex_color, numeric, url,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, When};

// ============================================================================
// DOMAIN SERVICES
// ============================================================================

pub use crate::checksum::{is_valid_iban, is_valid_luhn};
pub use crate::date::{
    DateRuleError, days_in_month, is_first_day_of_month, is_last_day_of_month, is_leap_year,
};
pub use crate::password::{PasswordPolicy, PasswordPolicyConfig};
pub use crate::registry::{RuleKind, UnknownRule};
