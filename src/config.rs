//! # Configuration Module
//!
//! This module loads the list of rules headerguard evaluates files against.
//!
//! Configuration can be written in YAML (`.headerguard.yml`,
//! `.headerguard.yaml`) or TOML (`.headerguard.toml`), found in the workspace
//! root, passed with `--config`, or named by the `HEADERGUARD_CONFIG`
//! environment variable.
//!
//! ```yaml
//! rules:
//!   - template-path: headers/apache.txt
//!     path-matcher: "\\.go$"
//!     exclude-path-matcher: "^vendor/"
//!   - template: "Copyright (c) Example Corp"
//!     author-matcher: "@example\\.com$"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::rule::RuleConfig;
use crate::rule_set::RuleSet;
use crate::verbose_log;

/// Config file names looked up in the workspace root, in order.
pub const DEFAULT_CONFIG_FILENAMES: [&str; 3] = [".headerguard.yml", ".headerguard.yaml", ".headerguard.toml"];

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADERGUARD_CONFIG";

/// Main configuration struct for headerguard.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
  /// Rules in the order they are tried.
  #[serde(default)]
  pub rules: Vec<RuleConfig>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid YAML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseYaml { path: PathBuf, source: serde_yaml::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseToml { path: PathBuf, source: toml::de::Error },

  /// The config file declares no rules.
  #[error("Config file '{path}' does not declare any rules")]
  NoRules { path: PathBuf },
}

/// Supported config file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
  Yaml,
  Toml,
}

impl Format {
  fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
      _ => Self::Yaml,
    }
  }
}

impl Config {
  /// Load configuration from a file.
  ///
  /// Files ending in `.toml` are parsed as TOML; everything else as YAML.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config = Self::parse(path, &content)?;

    if config.rules.is_empty() {
      return Err(ConfigError::NoRules {
        path: path.to_path_buf(),
      });
    }

    verbose_log!("Loaded {} rules", config.rules.len());

    Ok(config)
  }

  fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
    match Format::from_path(path) {
      Format::Toml => toml::from_str(content).map_err(|e| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: e,
      }),
      // An empty YAML document deserializes to nothing at all
      Format::Yaml if content.trim().is_empty() => Ok(Self::default()),
      Format::Yaml => serde_yaml::from_str(content).map_err(|e| ConfigError::ParseYaml {
        path: path.to_path_buf(),
        source: e,
      }),
    }
  }

  /// Resolve templates and compile every rule, reporting all problems at once.
  pub fn into_rule_set(self) -> Result<RuleSet, crate::error::ErrorList> {
    RuleSet::from_configs(self.rules)
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADERGUARD_CONFIG` environment variable
/// 3. [`DEFAULT_CONFIG_FILENAMES`] in the workspace root
pub fn discover_config_path(explicit_path: Option<&Path>, workspace_root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  for name in DEFAULT_CONFIG_FILENAMES {
    let candidate = workspace_root.join(name);
    if candidate.exists() {
      verbose_log!("Using workspace config: {}", candidate.display());
      return Some(candidate);
    }
  }

  verbose_log!("No config file found");
  None
}

/// Discover and load the configuration, then build the rule set from it.
pub fn load_rule_set(explicit_path: Option<&Path>, workspace_root: &Path) -> Result<RuleSet> {
  let path = discover_config_path(explicit_path, workspace_root).with_context(|| match explicit_path {
    Some(p) => format!("Config file not found: {}", p.display()),
    None => format!(
      "No config file found in {} (looked for {})",
      workspace_root.display(),
      DEFAULT_CONFIG_FILENAMES.join(", ")
    ),
  })?;

  let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;

  config
    .into_rule_set()
    .with_context(|| format!("Invalid rules in {}", path.display()))
}
