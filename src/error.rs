//! # Error Module
//!
//! Error kinds produced while preparing rules, and [`ErrorList`], which
//! collects several of them so that every configuration mistake is reported
//! in a single pass.

use std::fmt;
use std::path::PathBuf;

/// Which pattern of a rule an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherField {
  Path,
  Author,
  ExcludePath,
}

impl MatcherField {
  /// The configuration key of this field.
  pub const fn key(self) -> &'static str {
    match self {
      Self::Path => "path-matcher",
      Self::Author => "author-matcher",
      Self::ExcludePath => "exclude-path-matcher",
    }
  }
}

impl fmt::Display for MatcherField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

/// Error type for rule preparation.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
  /// The file named by `template-path` could not be read.
  #[error("Failed to load template from '{path}': {source}")]
  TemplateLoad { path: PathBuf, source: std::io::Error },

  /// Neither `template` nor `template-path` yielded any text.
  #[error("Template not provided: set either 'template' or 'template-path'")]
  TemplateNotProvided,

  /// One of the matcher patterns is not a valid regular expression.
  #[error("Invalid {field} '{pattern}': {source}")]
  InvalidPattern {
    field: MatcherField,
    pattern: String,
    source: regex::Error,
  },

  /// An error raised by the rule at `index` of a rule set.
  #[error("rule #{index}: {source}")]
  InRule { index: usize, source: Box<RuleError> },
}

impl RuleError {
  /// Tag this error with the position of the rule that produced it.
  pub fn in_rule(self, index: usize) -> Self {
    Self::InRule {
      index,
      source: Box::new(self),
    }
  }
}

/// A growable collection of [`RuleError`]s.
///
/// Displayed as one error per line.
#[derive(Debug, Default)]
pub struct ErrorList {
  errors: Vec<RuleError>,
}

impl ErrorList {
  pub const fn new() -> Self {
    Self { errors: Vec::new() }
  }

  pub fn push(&mut self, error: RuleError) {
    self.errors.push(error);
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, RuleError> {
    self.errors.iter()
  }

  /// `Ok(value)` when no errors were collected, otherwise `Err(self)`.
  pub fn into_result<T>(self, value: T) -> Result<T, Self> {
    if self.errors.is_empty() { Ok(value) } else { Err(self) }
  }
}

impl From<RuleError> for ErrorList {
  fn from(error: RuleError) -> Self {
    Self { errors: vec![error] }
  }
}

impl IntoIterator for ErrorList {
  type Item = RuleError;
  type IntoIter = std::vec::IntoIter<RuleError>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.into_iter()
  }
}

impl<'a> IntoIterator for &'a ErrorList {
  type Item = &'a RuleError;
  type IntoIter = std::slice::Iter<'a, RuleError>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.iter()
  }
}

impl fmt::Display for ErrorList {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, error) in self.errors.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl std::error::Error for ErrorList {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_list_into_result_is_ok() {
    let list = ErrorList::new();
    assert!(list.is_empty());
    assert_eq!(list.into_result(7).expect("no errors"), 7);
  }

  #[test]
  fn test_display_one_error_per_line() {
    let mut list = ErrorList::new();
    list.push(RuleError::TemplateNotProvided);
    list.push(RuleError::TemplateNotProvided.in_rule(3));

    let rendered = list.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Template not provided"));
    assert!(lines[1].starts_with("rule #3: Template not provided"));
  }

  #[test]
  fn test_invalid_pattern_mentions_field_and_pattern() {
    let source = regex::Regex::new("(").expect_err("unbalanced group");
    let err = RuleError::InvalidPattern {
      field: MatcherField::Author,
      pattern: "(".to_string(),
      source,
    };
    let message = err.to_string();
    assert!(message.contains("author-matcher"));
    assert!(message.contains("'('"));
  }
}
