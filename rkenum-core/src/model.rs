//! Enum model construction and validation.
//!
//! [`build`] turns raw command input into an immutable [`EnumModel`]. The
//! first violation aborts the build; errors are never accumulated.
//!
//! Validation order:
//! 1. package name, enum name, value list
//! 2. value identifiers, duplicate values, sentinel collisions
//! 3. alias syntax and alias uniqueness (while parsing)
//! 4. alias targets, then alias shadowing (over the full value set)

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{EnumError, EnumResult};
use crate::normalize::{
    go_lowercase, split_values, title_case, to_identifier, validate_identifier, Visibility,
};

/// Constant suffix of the synthesized zero member.
pub const UNKNOWN_SUFFIX: &str = "Unknown";

/// Constant suffix of the synthesized bound member.
pub const MAX_SUFFIX: &str = "Max";

/// One canonical member of the enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Name exactly as declared (used for string rendering)
    pub name: String,
    /// Title-cased fragment appended to the enum name
    pub ident: String,
    /// Aliases in registration order
    pub aliases: Vec<String>,
}

/// A single parsed `alias=value` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub alias: String,
    pub target: String,
}

/// Validated, immutable enum definition. Sole input to rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumModel {
    package: String,
    name: String,
    values: Vec<EnumValue>,
    no_unknown: bool,
}

impl EnumModel {
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Enum type name as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical values in declaration order.
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn no_unknown(&self) -> bool {
        self.no_unknown
    }

    pub fn has_aliases(&self) -> bool {
        self.values.iter().any(|v| !v.aliases.is_empty())
    }

    /// Aliases registered for a canonical value, or `None` if undeclared.
    pub fn aliases_of(&self, value: &str) -> Option<&[String]> {
        self.values
            .iter()
            .find(|v| v.name == value)
            .map(|v| v.aliases.as_slice())
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::of(&self.name)
    }

    /// Enum name with its first letter uppercased, used inside helper names.
    pub fn title_name(&self) -> String {
        title_case(&self.name)
    }

    /// Full constant name for a value, e.g. `ColorDarkRed`.
    pub fn constant(&self, value: &EnumValue) -> String {
        format!("{}{}", self.name, value.ident)
    }

    pub fn unknown_constant(&self) -> String {
        format!("{}{}", self.name, UNKNOWN_SUFFIX)
    }

    pub fn max_constant(&self) -> String {
        format!("{}{}", self.name, MAX_SUFFIX)
    }

    /// Numeric value the generated constant block assigns to a declared value.
    pub fn ordinal(&self, value: &str) -> Option<usize> {
        let offset = usize::from(!self.no_unknown);
        self.values
            .iter()
            .position(|v| v.name == value)
            .map(|idx| idx + offset)
    }

    /// Numeric value of the `Max` sentinel.
    pub fn max_ordinal(&self) -> usize {
        self.values.len() + usize::from(!self.no_unknown)
    }
}

/// Validates raw input and builds an [`EnumModel`].
///
/// `values` items are flattened on commas and whitespace before use.
/// `alias_tokens` are `alias=value` pairs.
pub fn build<V, A>(
    package: &str,
    enum_name: &str,
    values: &[V],
    no_unknown: bool,
    alias_tokens: &[A],
) -> EnumResult<EnumModel>
where
    V: AsRef<str>,
    A: AsRef<str>,
{
    let package = package.trim();
    if package.is_empty() {
        return Err(EnumError::MissingPackageName);
    }
    validate_identifier("package name", package)?;

    let enum_name = enum_name.trim();
    if enum_name.is_empty() {
        return Err(EnumError::MissingEnumName);
    }
    validate_identifier("enum name", enum_name)?;

    let names = split_values(values);
    if names.is_empty() {
        return Err(EnumError::MissingValues);
    }

    let mut members = build_values(enum_name, &names, no_unknown)?;
    let entries = parse_aliases(alias_tokens)?;
    validate_aliases(&entries, &names)?;

    for entry in entries {
        if let Some(member) = members.iter_mut().find(|m| m.name == entry.target) {
            member.aliases.push(entry.alias);
        }
    }

    let model = EnumModel {
        package: package.to_string(),
        name: enum_name.to_string(),
        values: members,
        no_unknown,
    };
    debug!(
        package = %model.package,
        name = %model.name,
        values = model.values.len(),
        has_aliases = model.has_aliases(),
        no_unknown,
        "built enum model"
    );
    Ok(model)
}

fn build_values(enum_name: &str, names: &[String], no_unknown: bool) -> EnumResult<Vec<EnumValue>> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(names.len());
    let mut literals = HashSet::with_capacity(names.len());
    let mut members = Vec::with_capacity(names.len());

    for name in names {
        let ident = to_identifier(name)?;

        if ident == MAX_SUFFIX || (!no_unknown && ident == UNKNOWN_SUFFIX) {
            return Err(EnumError::ReservedValueName {
                value: name.clone(),
                constant: format!("{}{}", enum_name, ident),
            });
        }
        // Parsing is case-insensitive, so "aB" and "ab" would share a case label
        let clash = seen.insert(ident.clone(), name).is_some();
        if clash || !literals.insert(go_lowercase(name)) {
            return Err(EnumError::DuplicateValue {
                value: name.clone(),
                constant: format!("{}{}", enum_name, ident),
            });
        }

        members.push(EnumValue {
            name: name.clone(),
            ident,
            aliases: Vec::new(),
        });
    }
    Ok(members)
}

/// Parses `alias=value` tokens in order, rejecting malformed and repeated aliases.
///
/// Aliases are compared case-insensitively because generated alias parsing
/// lowercases its input.
pub fn parse_aliases<A: AsRef<str>>(tokens: &[A]) -> EnumResult<Vec<AliasEntry>> {
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut entries = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref();
        let mut parts = token.split('=');
        let (Some(alias), Some(target), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EnumError::alias_syntax(token));
        };
        let alias = alias.trim();
        let target = target.trim();
        if alias.is_empty() || target.is_empty() {
            return Err(EnumError::alias_syntax(token));
        }

        if !seen.insert(go_lowercase(alias)) {
            return Err(EnumError::DuplicateAlias {
                alias: alias.to_string(),
            });
        }
        entries.push(AliasEntry {
            alias: alias.to_string(),
            target: target.to_string(),
        });
    }
    Ok(entries)
}

/// Checks every alias target exists, then that no alias spells a value.
fn validate_aliases(entries: &[AliasEntry], names: &[String]) -> EnumResult<()> {
    let declared: HashSet<&str> = names.iter().map(String::as_str).collect();
    if let Some(entry) = entries.iter().find(|e| !declared.contains(e.target.as_str())) {
        return Err(EnumError::UnknownAliasTarget {
            alias: entry.alias.clone(),
            target: entry.target.clone(),
        });
    }

    let lowered: HashSet<String> = names.iter().map(|n| go_lowercase(n)).collect();
    if let Some(entry) = entries.iter().find(|e| lowered.contains(&go_lowercase(&e.alias))) {
        return Err(EnumError::AliasShadowsValue {
            alias: entry.alias.clone(),
        });
    }
    Ok(())
}
