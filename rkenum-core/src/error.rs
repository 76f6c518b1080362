//! Typed error handling for enum generation.
//!
//! Every validation failure names the offending token so callers can fix
//! their input one problem at a time.

use thiserror::Error;

/// Main error type for building and rendering enum definitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// No package name was supplied
    #[error("package name must be set")]
    MissingPackageName,

    /// No enum type name was supplied
    #[error("enum name must be set")]
    MissingEnumName,

    /// No canonical values were supplied
    #[error("enum values must be set")]
    MissingValues,

    /// A token cannot be turned into an identifier
    #[error("invalid {kind} '{token}': {reason}")]
    InvalidIdentifier {
        kind: &'static str,
        token: String,
        reason: &'static str,
    },

    /// Alias token is not of the form `alias=value`
    #[error("invalid alias: {token}")]
    InvalidAliasSyntax { token: String },

    /// The same alias was registered twice
    #[error("duplicate alias: {alias}")]
    DuplicateAlias { alias: String },

    /// Alias points at a value that was never declared
    #[error("alias {alias} must reference a valid value (got '{target}')")]
    UnknownAliasTarget { alias: String, target: String },

    /// Alias is spelled like a declared value
    #[error("alias {alias} cannot be a value")]
    AliasShadowsValue { alias: String },

    /// Two values produce the same constant name
    #[error("duplicate value '{value}' (constant {constant} already declared)")]
    DuplicateValue { value: String, constant: String },

    /// Value collides with a synthesized sentinel constant
    #[error("value '{value}' collides with the generated {constant} constant")]
    ReservedValueName { value: String, constant: String },

    /// The output sink refused a write while rendering
    #[error("failed to write generated source: {source}")]
    Render {
        #[source]
        source: std::fmt::Error,
    },
}

impl EnumError {
    /// Create an identifier error.
    pub fn invalid_identifier(
        kind: &'static str,
        token: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidIdentifier {
            kind,
            token: token.into(),
            reason,
        }
    }

    /// Create an alias syntax error.
    pub fn alias_syntax(token: impl Into<String>) -> Self {
        Self::InvalidAliasSyntax {
            token: token.into(),
        }
    }

    /// True for errors caused by the caller's input, as opposed to the sink.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Render { .. })
    }
}

impl From<std::fmt::Error> for EnumError {
    fn from(source: std::fmt::Error) -> Self {
        Self::Render { source }
    }
}

/// Convenience type alias for generator results.
pub type EnumResult<T> = Result<T, EnumError>;
