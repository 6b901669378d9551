//! # Source Collector Module
//!
//! Expands the file and directory patterns given on the command line into
//! [`Source`] records. Paths are reported relative to the workspace root with
//! `/` separators, which is what rule patterns are written against.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::source::Source;

/// Collects [`Source`]s below a workspace root.
pub struct SourceCollector {
  /// Root that patterns are resolved against and paths are made relative to
  workspace_root: PathBuf,
  /// Author attributed to every collected file
  author: String,
}

impl SourceCollector {
  pub fn new(workspace_root: impl Into<PathBuf>, author: impl Into<String>) -> Self {
    Self {
      workspace_root: workspace_root.into(),
      author: author.into(),
    }
  }

  /// Collect sources for the given patterns.
  ///
  /// Files are taken as-is, directories are walked recursively skipping
  /// hidden entries. The result is sorted and free of duplicates.
  ///
  /// # Errors
  ///
  /// Returns an error if a pattern names nothing on disk or a directory
  /// cannot be walked.
  pub fn collect(&self, patterns: &[String]) -> Result<Vec<Source>> {
    let mut paths = Vec::new();

    for pattern in patterns {
      let path = self.resolve(Path::new(pattern));

      if path.is_file() {
        paths.push(path);
      } else if path.is_dir() {
        self.walk(&path, &mut paths)?;
      } else {
        bail!("No such file or directory: {}", pattern);
      }
    }

    let mut sources: Vec<Source> = paths
      .iter()
      .map(|p| Source::new(self.display_path(p), self.author.clone()))
      .collect();
    sources.sort();
    sources.dedup();

    debug!("Collected {} sources", sources.len());

    Ok(sources)
  }

  fn resolve(&self, path: &Path) -> PathBuf {
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.workspace_root.join(path)
    }
  }

  fn walk(&self, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    debug!("Scanning directory: {}", dir.display());

    let walker = WalkDir::new(dir)
      .follow_links(false)
      .into_iter()
      .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
      let entry = entry.with_context(|| format!("Failed to walk directory {}", dir.display()))?;
      if entry.file_type().is_file() {
        out.push(entry.into_path());
      }
    }

    Ok(())
  }

  fn display_path(&self, path: &Path) -> String {
    let relative = if path.starts_with(&self.workspace_root) {
      pathdiff::diff_paths(path, &self.workspace_root).unwrap_or_else(|| path.to_path_buf())
    } else {
      path.to_path_buf()
    };
    to_slash(&relative)
  }
}

fn is_hidden(entry: &DirEntry) -> bool {
  entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
fn to_slash(path: &Path) -> String {
  path.to_string_lossy().replace('\\', "/")
}

#[cfg(not(windows))]
fn to_slash(path: &Path) -> String {
  path.to_string_lossy().into_owned()
}
