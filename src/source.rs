//! # Source Module
//!
//! A [`Source`] describes a candidate file that rules are evaluated against.
//! Discovery of files and authorship happens elsewhere; this is only the
//! record that gets passed to [`Rule::matches`](crate::rule::Rule::matches).

/// A file under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Source {
  /// Path of the file, as the collaborator that found it reported it.
  pub path: String,
  /// Author attributed to the file.
  pub author: String,
}

impl Source {
  pub fn new(path: impl Into<String>, author: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      author: author.into(),
    }
  }
}
