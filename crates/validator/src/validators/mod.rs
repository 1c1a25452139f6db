//! Built-in validators
//!
//! # Categories
//!
//! - **Structural / checksum**: [`CreditCard`], [`Iban`], [`Luhn`]
//! - **Encoding and identifiers**: [`Base64`], [`Guid`], [`HexColor`]
//! - **Character classes**: [`Alphanumeric`], [`Numeric`]
//! - **Contact and network**: [`Email`], [`Url`], [`IpAddress`], [`Phone`]
//!
//! Every validator takes `str` input and rejects empty or whitespace-only
//! strings with a `blank` error before applying its own rules.
//!
//! # Examples
//!
//! ```
//! use veritas_validator::foundation::{Validate, ValidateExt};
//! use veritas_validator::validators::{CreditCard, alphanumeric, numeric};
//!
//! assert!(CreditCard.is_valid("4111 1111 1111 1111"));
//!
//! let pin = numeric().and(alphanumeric());
//! assert!(pin.is_valid("0042"));
//! ```

// Structural / checksum validators
pub mod credit_card;
pub mod iban;
pub mod luhn;

// Encoding and identifier validators
pub mod base64;
pub mod guid;
pub mod hex_color;

// Character classes
pub mod pattern;

// Contact and network validators
pub mod content;
pub mod ip_address;
pub mod phone;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use credit_card::CreditCard;
pub use iban::Iban;
pub use luhn::Luhn;

pub use base64::Base64;
pub use guid::{Guid, guid};
pub use hex_color::{HexColor, hex_color};

pub use pattern::{Alphanumeric, Numeric, alphanumeric, numeric};

pub use content::{Email, Url, email, url};
pub use ip_address::IpAddress;
pub use phone::{Phone, PhoneMode};
