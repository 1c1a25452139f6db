//! Validator combinators
//!
//! - [`And`] - both validators must pass
//! - [`When`] - run a validator only when a predicate holds
//!
//! Both are usually built through [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod when;

pub use and::And;
pub use when::When;
