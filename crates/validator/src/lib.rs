//! # veritas-validator
//!
//! Stateless validation rules for common data formats, a configurable
//! password strength policy and calendar rules.
//!
//! ## Quick Start
//!
//! ```
//! use veritas_validator::prelude::*;
//!
//! assert!(CreditCard.is_valid("4532 0151 1283 0366"));
//! assert!(Iban.is_valid("DE89 3704 0044 0532 0130 00"));
//! assert!(PasswordPolicy::default().evaluate("Aa1!aaaa"));
//! assert!(is_leap_year(2024));
//!
//! let rule: RuleKind = "hex-color".parse().unwrap();
//! assert!(rule.is_valid("#c0ffee"));
//! ```
//!
//! ## Contract
//!
//! Every string rule rejects absent, empty and whitespace-only input. Rules
//! report failures as [`ValidationError`](foundation::ValidationError) and
//! never panic on untrusted input.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Modules
//!
//! - [`checksum`]: Luhn and IBAN mod-97 arithmetic
//! - [`validators`]: the built-in format rules
//! - [`password`]: [`PasswordPolicy`](password::PasswordPolicy) and its config
//! - [`date`]: leap years, month lengths, month bounds
//! - [`registry`]: [`RuleKind`](registry::RuleKind), name-based dispatch

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod checksum;
pub mod combinators;
pub mod date;
pub mod foundation;
mod macros;
pub mod password;
pub mod prelude;
pub mod registry;
pub mod validators;
