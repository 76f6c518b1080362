//! Builder pattern API for enum generation.
//!
//! Provides a fluent interface over [`model::build`](crate::model::build) and
//! [`render::render`](crate::render::render):
//!
//! ```rust,ignore
//! use rkenum_core::prelude::*;
//!
//! let source = EnumSpec::new("colors", "Color")
//!     .values(["red", "green", "blue"])
//!     .alias("r=red")
//!     .generate()?;
//! ```

use crate::error::EnumResult;
use crate::model::{build, EnumModel};
use crate::render::render;

/// Collects generator input before validation.
#[derive(Debug, Clone, Default)]
pub struct EnumSpec {
    /// Package clause of the generated file
    package: String,

    /// Enum type name
    name: String,

    /// Raw value items, split on commas and whitespace at build time
    values: Vec<String>,

    /// Raw `alias=value` tokens
    aliases: Vec<String>,

    /// Suppress the synthesized zero member
    no_unknown: bool,
}

impl EnumSpec {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append one raw value item.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append several raw value items.
    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Append one `alias=value` token.
    pub fn alias(mut self, token: impl Into<String>) -> Self {
        self.aliases.push(token.into());
        self
    }

    /// Append several `alias=value` tokens.
    pub fn aliases(mut self, tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases.extend(tokens.into_iter().map(Into::into));
        self
    }

    pub fn no_unknown(mut self, enabled: bool) -> Self {
        self.no_unknown = enabled;
        self
    }

    /// Validate the input and return the model.
    pub fn build(&self) -> EnumResult<EnumModel> {
        build(
            &self.package,
            &self.name,
            &self.values,
            self.no_unknown,
            &self.aliases,
        )
    }

    /// Validate and render in one step.
    pub fn generate(&self) -> EnumResult<String> {
        render(&self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnumError;

    #[test]
    fn test_builder_generates() {
        let out = EnumSpec::new("colors", "Color")
            .values(["red", "green"])
            .value("blue")
            .alias("r=red")
            .generate()
            .unwrap();
        assert!(out.contains("package colors"));
        assert!(out.contains("\tColorBlue\n"));
        assert!(out.contains("func NewColor(s string)"));
    }

    #[test]
    fn test_builder_propagates_errors() {
        let err = EnumSpec::new("colors", "Color").build().unwrap_err();
        assert_eq!(err, EnumError::MissingValues);

        let err = EnumSpec::new("colors", "Color")
            .value("red")
            .aliases(["r=red", "r=red"])
            .build()
            .unwrap_err();
        assert!(matches!(err, EnumError::DuplicateAlias { .. }));
    }

    #[test]
    fn test_builder_no_unknown() {
        let model = EnumSpec::new("p", "Letter")
            .values(["a,b"])
            .no_unknown(true)
            .build()
            .unwrap();
        assert!(model.no_unknown());
        assert_eq!(model.ordinal("a"), Some(0));
    }
}
