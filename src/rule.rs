//! # Rule Module
//!
//! A rule pairs a license header template with the criteria that decide which
//! files it applies to.
//!
//! Rules go through two phases:
//!
//! 1. [`RuleConfig`] is the raw record deserialized from configuration. Its
//!    template can be resolved with [`RuleConfig::load_template`].
//! 2. [`RuleConfig::compile`] parses the matcher patterns and produces a
//!    [`Rule`]. Only a compiled rule can be matched against a [`Source`].
//!
//! ## Example
//!
//! ```rust
//! use headerguard::rule::RuleConfig;
//! use headerguard::source::Source;
//!
//! let config = RuleConfig {
//!   template: "Copyright (c) Example Corp".to_string(),
//!   path_matcher: r"\.rs$".to_string(),
//!   exclude_path_matcher: "^vendor/".to_string(),
//!   ..RuleConfig::default()
//! };
//!
//! let rule = config.compile().expect("patterns are valid");
//! assert!(rule.matches(&Source::new("src/lib.rs", "alice")));
//! assert!(!rule.matches(&Source::new("vendor/dep.rs", "alice")));
//! assert!(!rule.matches(&Source::new("README.md", "alice")));
//! ```

use std::fs;
use std::path::PathBuf;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use tracing::{debug, trace};

use crate::error::{ErrorList, MatcherField, RuleError};
use crate::source::Source;

/// Raw rule configuration.
///
/// All fields are optional in configuration files and default to empty
/// strings; an explicit null (`~`, `null` or a bare key) is read as empty
/// too. An empty pattern means "no constraint".
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuleConfig {
  /// Literal header text. Takes precedence over `template_path`.
  #[serde(deserialize_with = "null_as_empty")]
  pub template: String,

  /// Path to a file holding the header text, read when `template` is empty.
  #[serde(deserialize_with = "null_as_empty")]
  pub template_path: String,

  /// Only paths matching this pattern are accepted.
  #[serde(deserialize_with = "null_as_empty")]
  pub path_matcher: String,

  /// Only authors matching this pattern are accepted.
  #[serde(deserialize_with = "null_as_empty")]
  pub author_matcher: String,

  /// Paths matching this pattern are rejected regardless of other matchers.
  #[serde(deserialize_with = "null_as_empty")]
  pub exclude_path_matcher: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RuleConfig {
  /// Resolve the template text.
  ///
  /// When `template` is empty and `template_path` is set, the file at
  /// `template_path` is read in full and stored in `template`. Bytes that are
  /// not valid UTF-8 are replaced rather than rejected. A non-empty
  /// `template` wins and `template_path` is not touched at all.
  ///
  /// # Errors
  ///
  /// - [`RuleError::TemplateLoad`] if the template file cannot be read
  /// - [`RuleError::TemplateNotProvided`] if no template text could be
  ///   resolved
  pub fn load_template(&mut self) -> Result<(), RuleError> {
    if self.template.is_empty() && !self.template_path.is_empty() {
      debug!("Loading template from: {}", self.template_path);
      let bytes = fs::read(&self.template_path).map_err(|e| RuleError::TemplateLoad {
        path: PathBuf::from(&self.template_path),
        source: e,
      })?;
      self.template = String::from_utf8_lossy(&bytes).into_owned();
    }

    if self.template.is_empty() {
      return Err(RuleError::TemplateNotProvided);
    }

    Ok(())
  }

  /// Compile the matcher patterns into a [`Rule`].
  ///
  /// Every pattern is attempted even if an earlier one failed, so the
  /// returned [`ErrorList`] holds one entry per malformed pattern.
  ///
  /// The template is carried over as-is; call
  /// [`load_template`](Self::load_template) first if it comes from a file.
  pub fn compile(&self) -> Result<Rule, ErrorList> {
    let (matchers, errors) = Matchers::compile(self);
    errors.into_result(Rule {
      template: self.template.clone(),
      matchers,
    })
  }
}

/// Compiled matcher patterns of a rule.
///
/// A `None` matcher imposes no constraint.
#[derive(Debug, Clone, Default)]
pub struct Matchers {
  path: Option<Regex>,
  author: Option<Regex>,
  exclude_path: Option<Regex>,
}

impl Matchers {
  /// Compile whichever patterns of `config` are set.
  ///
  /// Patterns that compile are kept even when others fail, so the partial
  /// result is returned together with the collected errors.
  pub fn compile(config: &RuleConfig) -> (Self, ErrorList) {
    let mut errors = ErrorList::new();

    let path = compile_pattern(MatcherField::Path, &config.path_matcher, &mut errors);
    let author = compile_pattern(MatcherField::Author, &config.author_matcher, &mut errors);
    let exclude_path = compile_pattern(MatcherField::ExcludePath, &config.exclude_path_matcher, &mut errors);

    (
      Self {
        path,
        author,
        exclude_path,
      },
      errors,
    )
  }

  pub const fn path(&self) -> Option<&Regex> {
    self.path.as_ref()
  }

  pub const fn author(&self) -> Option<&Regex> {
    self.author.as_ref()
  }

  pub const fn exclude_path(&self) -> Option<&Regex> {
    self.exclude_path.as_ref()
  }

  /// Whether `source` satisfies every present matcher.
  ///
  /// Checks run in order: path, exclude path, author. Matching is unanchored,
  /// so a pattern only needs to occur somewhere in the string.
  pub fn is_match(&self, source: &Source) -> bool {
    if let Some(path) = &self.path
      && !path.is_match(&source.path)
    {
      trace!("{}: path does not match '{}'", source.path, path.as_str());
      return false;
    }

    if let Some(exclude) = &self.exclude_path
      && exclude.is_match(&source.path)
    {
      trace!("{}: path excluded by '{}'", source.path, exclude.as_str());
      return false;
    }

    if let Some(author) = &self.author
      && !author.is_match(&source.author)
    {
      trace!("{}: author '{}' does not match '{}'", source.path, source.author, author.as_str());
      return false;
    }

    true
  }
}

fn compile_pattern(field: MatcherField, pattern: &str, errors: &mut ErrorList) -> Option<Regex> {
  if pattern.is_empty() {
    return None;
  }

  match Regex::new(pattern) {
    Ok(regex) => Some(regex),
    Err(e) => {
      debug!("Failed to compile {}: {}", field, e);
      errors.push(RuleError::InvalidPattern {
        field,
        pattern: pattern.to_string(),
        source: e,
      });
      None
    }
  }
}

/// A compiled rule, ready for matching.
///
/// Immutable once built; [`matches`](Self::matches) may be called from many
/// threads at once.
#[derive(Debug, Clone)]
pub struct Rule {
  template: String,
  matchers: Matchers,
}

impl Rule {
  /// The header text of this rule.
  pub fn template(&self) -> &str {
    &self.template
  }

  pub const fn matchers(&self) -> &Matchers {
    &self.matchers
  }

  /// Whether this rule applies to `source`.
  pub fn matches(&self, source: &Source) -> bool {
    self.matchers.is_match(source)
  }
}
