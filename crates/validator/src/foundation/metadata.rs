//! Descriptive metadata attached to every validator.

use std::borrow::Cow;

use serde::Serialize;

/// How validation cost grows with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationComplexity {
    /// Bounded work regardless of input size.
    Constant,
    /// One or a few passes over the input.
    #[default]
    Linear,
}

/// Name, description and tags describing a validator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidatorMetadata {
    /// Validator name, e.g. `"CreditCard"`.
    pub name: Cow<'static, str>,
    /// One-line description of what is accepted.
    pub description: Option<Cow<'static, str>>,
    /// Cost class.
    pub complexity: ValidationComplexity,
    /// Free-form tags, e.g. `["checksum", "finance"]`.
    pub tags: Vec<Cow<'static, str>>,
}

impl ValidatorMetadata {
    /// Creates metadata with just a name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the complexity class.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_complexity(mut self, complexity: ValidationComplexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Appends tags.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Cow<'static, str>>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}
