//! Configuration loading from rkenum.toml.
//!
//! An explicit `--config` path must exist. Otherwise the per-user file at
//! `~/.config/rk/rkenum.toml` is used when present.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Main configuration structure for rkenum.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RkenumConfig {
    /// Defaults for `gen` flags.
    pub defaults: Option<DefaultsConfig>,
    /// Log output configuration.
    pub log: Option<LogConfig>,
}

/// Fallbacks used when the matching flag is not given.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub package: Option<String>,
    pub no_unknown: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// "json" (default) or "pretty".
    pub format: Option<String>,
}

/// A parsed config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: RkenumConfig,
}

impl RkenumConfig {
    pub fn default_package(&self) -> Option<&str> {
        self.defaults.as_ref()?.package.as_deref()
    }

    pub fn default_no_unknown(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.no_unknown)
            .unwrap_or(false)
    }

    pub fn log_format(&self) -> Option<&str> {
        self.log.as_ref()?.format.as_deref()
    }
}

/// Per-user config location: `<home>/.config/rk/rkenum.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| user_config_path(&home))
}

fn user_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("rk").join("rkenum.toml")
}

/// Reads and parses a single config file.
pub fn load_config_file(path: &Path) -> Result<RkenumConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let cfg = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(cfg)
}

/// Loads the explicit config file, or the per-user one if it exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<LoadedConfig>> {
    load_config_with_default(explicit, default_config_path())
}

fn load_config_with_default(
    explicit: Option<&Path>,
    fallback: Option<PathBuf>,
) -> Result<Option<LoadedConfig>> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => match fallback {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    let config = load_config_file(&path)?;
    Ok(Some(LoadedConfig { path, config }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("rkenum.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[defaults]\npackage = \"models\"\nno_unknown = true\n\n[log]\nformat = \"pretty\"\n",
        );
        let cfg = load_config_file(&path).unwrap();
        assert_eq!(cfg.default_package(), Some("models"));
        assert!(cfg.default_no_unknown());
        assert_eq!(cfg.log_format(), Some("pretty"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let cfg = load_config_file(&path).unwrap();
        assert_eq!(cfg, RkenumConfig::default());
        assert_eq!(cfg.default_package(), None);
        assert!(!cfg.default_no_unknown());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[defaults]\nnot_a_key = 1\n");
        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_with_default(Some(&missing), None).is_err());
    }

    #[test]
    fn test_missing_default_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config_with_default(None, Some(user_config_path(dir.path()))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_default_location_is_used() {
        let home = tempfile::tempdir().unwrap();
        let path = user_config_path(home.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[defaults]\npackage = \"home\"\n").unwrap();

        let loaded = load_config_with_default(None, Some(path.clone()))
            .unwrap()
            .unwrap();
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.config.default_package(), Some("home"));
    }

    #[test]
    fn test_explicit_wins_over_default() {
        let home = tempfile::tempdir().unwrap();
        let default = user_config_path(home.path());
        fs::create_dir_all(default.parent().unwrap()).unwrap();
        fs::write(&default, "[defaults]\npackage = \"home\"\n").unwrap();

        let other = tempfile::tempdir().unwrap();
        let explicit = write_config(other.path(), "[defaults]\npackage = \"explicit\"\n");

        let loaded = load_config_with_default(Some(&explicit), Some(default))
            .unwrap()
            .unwrap();
        assert_eq!(loaded.config.default_package(), Some("explicit"));
    }
}
