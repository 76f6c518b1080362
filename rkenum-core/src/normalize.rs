//! Name normalization for generated identifiers.
//!
//! Free-form value tokens (`dark-red`, `dark red`, `dark_red`) become title
//! cased fragments (`DarkRed`) that are appended to the enum type name to form
//! constant names. Helper visibility is derived from the enum name itself.

use heck::ToUpperCamelCase;

use crate::error::{EnumError, EnumResult};

/// Converts a value token into a title-cased identifier fragment.
///
/// Separators (whitespace, hyphens, underscores, punctuation) become word
/// boundaries and each word is capitalized.
///
/// # Example
/// `"dark-red"` becomes `"DarkRed"`, so enum `Color` gets `ColorDarkRed`.
pub fn to_identifier(token: &str) -> EnumResult<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(EnumError::invalid_identifier("value", token, "empty name"));
    }

    let ident = trimmed.to_upper_camel_case();
    if ident.is_empty() {
        return Err(EnumError::invalid_identifier(
            "value",
            token,
            "no identifier characters",
        ));
    }
    if !ident.chars().all(is_ident_continue) {
        return Err(EnumError::invalid_identifier(
            "value",
            token,
            "contains characters not allowed in identifiers",
        ));
    }
    Ok(ident)
}

/// Checks that a package or type name is usable verbatim as an identifier.
pub fn validate_identifier(kind: &'static str, name: &str) -> EnumResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(EnumError::invalid_identifier(kind, name, "empty name"));
    };
    if !(first.is_alphabetic() || first == '_') {
        return Err(EnumError::invalid_identifier(
            kind,
            name,
            "must start with a letter or underscore",
        ));
    }
    if !chars.all(is_ident_continue) {
        return Err(EnumError::invalid_identifier(
            kind,
            name,
            "may only contain letters, digits and underscores",
        ));
    }
    Ok(())
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Uppercases the first character, leaving the rest untouched.
///
/// `color` becomes `Color`, which is what helper names are built from
/// (`newColorFromString`).
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases one rune at a time, the way Go's `strings.ToLower` does.
///
/// `str::to_lowercase` folds a word-final `Σ` to `ς`; Go always yields `σ`.
/// `İ` (U+0130) maps to plain `i` as in Go, not to `i` plus a combining dot.
pub fn go_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{130}' => out.push('i'),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Flattens raw value items on commas and whitespace, preserving order.
///
/// A single item may carry several values (`"red, green blue"`).
pub fn split_values<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .flat_map(|item| item.as_ref().split(','))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// Whether generated helpers are exported, based on the enum name's casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Enum name starts uppercase: `NewColor`, `String`, `Aliases`
    Exported,
    /// Enum name starts lowercase: `newColor`, `string`, `aliases`
    Unexported,
}

impl Visibility {
    /// Derives visibility from the first character of the enum name.
    pub fn of(enum_name: &str) -> Self {
        match enum_name.chars().next() {
            Some(c) if c.is_uppercase() => Self::Exported,
            _ => Self::Unexported,
        }
    }

    /// Applies this visibility to a capitalized helper word.
    pub fn apply(self, word: &str) -> String {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };
        match self {
            Self::Exported => first.to_uppercase().chain(chars).collect(),
            Self::Unexported => first.to_lowercase().chain(chars).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_identifier_separators() {
        assert_eq!(to_identifier("red").unwrap(), "Red");
        assert_eq!(to_identifier("dark-red").unwrap(), "DarkRed");
        assert_eq!(to_identifier("dark_red").unwrap(), "DarkRed");
        assert_eq!(to_identifier("dark red").unwrap(), "DarkRed");
        assert_eq!(to_identifier("  blue  ").unwrap(), "Blue");
    }

    #[test]
    fn test_to_identifier_keeps_digits() {
        assert_eq!(to_identifier("v2").unwrap(), "V2");
        assert_eq!(to_identifier("3d").unwrap(), "3d");
    }

    #[test]
    fn test_to_identifier_rejects_empty() {
        assert!(matches!(
            to_identifier("   "),
            Err(EnumError::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            to_identifier("---"),
            Err(EnumError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_to_identifier_deterministic() {
        assert_eq!(to_identifier("light-blue"), to_identifier("light-blue"));
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("enum name", "Color").is_ok());
        assert!(validate_identifier("enum name", "_color2").is_ok());
        assert!(validate_identifier("enum name", "2color").is_err());
        assert!(validate_identifier("package name", "my-pkg").is_err());
        assert!(validate_identifier("package name", "").is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("color"), "Color");
        assert_eq!(title_case("Color"), "Color");
        assert_eq!(title_case("httpMethod"), "HttpMethod");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_go_lowercase_per_rune() {
        assert_eq!(go_lowercase("RED"), "red");
        // Word-final sigma is not context folded
        assert_eq!(go_lowercase("ΟΔΟΣ"), "οδοσ");
        assert_ne!(go_lowercase("ΟΔΟΣ"), "ΟΔΟΣ".to_lowercase());
        assert_eq!(go_lowercase("İSTANBUL"), "istanbul");
    }

    #[test]
    fn test_split_values() {
        let raw = vec!["red,green".to_string(), " blue  cyan ".to_string(), ",,".to_string()];
        assert_eq!(split_values(&raw), vec!["red", "green", "blue", "cyan"]);
    }

    #[test]
    fn test_visibility() {
        assert_eq!(Visibility::of("Color"), Visibility::Exported);
        assert_eq!(Visibility::of("color"), Visibility::Unexported);
        assert_eq!(Visibility::of("_color"), Visibility::Unexported);
        assert_eq!(Visibility::Exported.apply("New"), "New");
        assert_eq!(Visibility::Unexported.apply("New"), "new");
        assert_eq!(Visibility::Unexported.apply("Aliases"), "aliases");
    }
}
