//! Macros for creating validators with minimal boilerplate.
//!
//! [`validator!`] declares a validator struct, its `Validate` implementation
//! and an optional factory function in one block.
//!
//! ```rust,ignore
//! use veritas_validator::validator;
//! use veritas_validator::foundation::{require_text, ValidationError};
//!
//! // Unit validator (no fields), blank input rejected first
//! validator! {
//!     pub Lowercase for str;
//!     guard(require_text);
//!     rule(input) { input.chars().all(|c| c.is_ascii_lowercase()) }
//!     error(input) { ValidationError::invalid_format("lowercase") }
//!     fn lowercase();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinChars { min: usize } for str;
//!     rule(self, input) { input.chars().count() >= self.min }
//!     error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
//!     fn min_chars(min: usize);
//! }
//! ```

/// Creates a complete validator: struct definition, `Validate`
/// implementation, constructor and (optionally) a factory function.
///
/// Unit validators always derive `Debug, Clone, Copy, PartialEq, Eq, Hash`;
/// struct validators derive `Debug, Clone` and accept extra derives.
///
/// Optional clauses:
/// - `guard(path);` runs `path(input)?` before the rule, so its error wins
/// - `metadata { expr }` overrides [`Validate::metadata`](crate::foundation::Validate::metadata)
/// - `fn name(args);` emits a `#[must_use]` factory function
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        $(guard($guard:path);)?
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        $(metadata $md:block)?
        $(fn $factory:ident();)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                $($guard($inp)?;)?
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            $(
                fn metadata(&self) -> $crate::foundation::ValidatorMetadata $md
            )?
        }

        $(
            #[must_use]
            $vis const fn $factory() -> $name { $name }
        )?
    };

    // ── Struct with fields + auto new ────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        $(guard($guard:path);)?
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(metadata $md:block)?
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                $($guard($inp)?;)?
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            $(
                fn metadata(&$self2) -> $crate::foundation::ValidatorMetadata $md
            )?
        }

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError, require_text};

    validator! {
        /// A test unit validator.
        TestLower for str;
        guard(require_text);
        rule(input) { input.chars().all(|c| c.is_ascii_lowercase()) }
        error(input) { ValidationError::new("lower", "must be lowercase") }
        fn test_lower();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestLower;
        assert!(v.validate("hello").is_ok());
        assert_eq!(v.validate("Hello").unwrap_err().code, "lower");
    }

    #[test]
    fn test_guard_runs_first() {
        assert_eq!(test_lower().validate("  ").unwrap_err().code, "blank");
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMinLen { min: usize } for str;
        rule(self, input) { input.len() >= self.min }
        error(self, input) {
            ValidationError::new("min_len", format!("need {} chars", self.min))
        }
        metadata {
            crate::foundation::ValidatorMetadata::named("TestMinLen")
        }
        fn test_min_len(min: usize);
    }

    #[test]
    fn test_struct_validator() {
        let v = test_min_len(3);
        assert!(v.validate("abc").is_ok());
        let err = v.validate("ab").unwrap_err();
        assert_eq!(err.code, "min_len");
        assert_eq!(err.message, "need 3 chars");
        assert_eq!(TestMinLen::new(1).metadata().name, "TestMinLen");
    }

    validator! {
        TestAlwaysOk for str;
        rule(input) { true }
        error(input) { ValidationError::new("unreachable", "unreachable") }
    }

    #[test]
    fn test_unit_without_factory_or_guard() {
        assert!(TestAlwaysOk.validate("").is_ok());
    }
}
