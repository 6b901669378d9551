#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Writes `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// Lays out a small Go-style project with a vendor directory and tests.
pub fn setup_project(root: &Path) -> Result<()> {
  write_file(root, "cmd/main.go", "package main\n")?;
  write_file(root, "pkg/rule.go", "package pkg\n")?;
  write_file(root, "pkg/rule_test.go", "package pkg\n")?;
  write_file(root, "vendor/dep/dep.go", "package dep\n")?;
  write_file(root, "scripts/build.sh", "#!/bin/sh\n")?;
  write_file(root, "headers/apache.txt", "Licensed under the Apache License, Version 2.0")?;
  Ok(())
}

/// A config matching Go sources outside vendor/ and leaving everything else
/// unmatched.
pub const GO_ONLY_CONFIG: &str = concat!(
  "rules:\n",
  "  - template-path: headers/apache.txt\n",
  "    path-matcher: \"\\\\.go$\"\n",
  "    exclude-path-matcher: \"^vendor/\"\n",
);
