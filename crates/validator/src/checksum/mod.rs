//! Checksum engine
//!
//! Pure numeric algorithms shared by the structural validators:
//!
//! - [`luhn`] - mod-10 double-and-sum check used by payment card numbers
//! - [`iban`] - ISO 7064 mod-97-10 check used by IBANs
//!
//! Both operate on borrowed strings, allocate nothing and never panic.

pub mod iban;
pub mod luhn;

pub use iban::{is_valid_iban, mod97_remainder};
pub use luhn::{is_valid_luhn, luhn_sum};
