mod common;

use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

use common::{GO_ONLY_CONFIG, setup_project, write_file};

fn headerguard() -> Result<Command> {
  let mut cmd = Command::cargo_bin("headerguard")?;
  cmd.env_remove("HEADERGUARD_CONFIG").env_remove("RUST_LOG");
  Ok(cmd)
}

#[test]
fn test_match_reports_each_file() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_project(temp_dir.path())?;
  write_file(temp_dir.path(), ".headerguard.yml", GO_ONLY_CONFIG)?;

  headerguard()?
    .current_dir(temp_dir.path())
    .args(["--colors=never", "--author", "alice", "cmd", "pkg", "vendor", "scripts"])
    .assert()
    .success()
    .stdout(predicate::str::contains("cmd/main.go -> rule #0"))
    .stdout(predicate::str::contains("pkg/rule_test.go -> rule #0"))
    .stdout(predicate::str::contains("vendor/dep/dep.go (no matching rule)"))
    .stdout(predicate::str::contains("scripts/build.sh (no matching rule)"))
    .stdout(predicate::str::contains("5 files: 3 matched, 2 unmatched"));

  Ok(())
}

#[test]
fn test_require_match_fails_on_unmatched() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_project(temp_dir.path())?;
  write_file(temp_dir.path(), ".headerguard.yml", GO_ONLY_CONFIG)?;

  headerguard()?
    .current_dir(temp_dir.path())
    .args(["--require-match", "--quiet", "."])
    .assert()
    .failure()
    .stdout(predicate::str::contains("scripts/build.sh"))
    .stdout(predicate::str::contains("cmd/main.go").not());

  headerguard()?
    .current_dir(temp_dir.path())
    .args(["--require-match", "cmd/main.go"])
    .assert()
    .success();

  Ok(())
}

#[test]
fn test_author_matcher_from_cli() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_project(temp_dir.path())?;
  write_file(
    temp_dir.path(),
    "rules.toml",
    concat!("[[rules]]\n", "template = \"Copyright Jane\"\n", "author-matcher = '^Jane\\b'\n",),
  )?;

  headerguard()?
    .current_dir(temp_dir.path())
    .args(["--config", "rules.toml", "--colors=never", "--show-template", "--author", "Jane Doe", "cmd"])
    .assert()
    .success()
    .stdout(predicate::str::contains("cmd/main.go -> rule #0"))
    .stdout(predicate::str::contains("    Copyright Jane"));

  headerguard()?
    .current_dir(temp_dir.path())
    .args(["--config", "rules.toml", "--colors=never", "--author", "John", "cmd"])
    .assert()
    .success()
    .stdout(predicate::str::contains("cmd/main.go (no matching rule)"));

  Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_project(temp_dir.path())?;
  write_file(temp_dir.path(), ".headerguard.yml", GO_ONLY_CONFIG)?;

  let output = headerguard()?
    .current_dir(temp_dir.path())
    .args(["--format", "json", "--author", "bot", "cmd", "scripts"])
    .output()?;
  assert!(output.status.success());

  let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(value["summary"]["total"], 2);
  assert_eq!(value["files"][0]["path"], "cmd/main.go");
  assert_eq!(value["files"][0]["rule"], 0);
  assert_eq!(value["files"][0]["author"], "bot");
  assert!(value["files"][1]["rule"].is_null());

  Ok(())
}

#[test]
fn test_validate_reports_every_error() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(
    temp_dir.path(),
    "bad.yml",
    concat!(
      "rules:\n",
      "  - template-path: missing.txt\n",
      "    path-matcher: \"(\"\n",
      "  - template: ok\n",
      "    author-matcher: \"[\"\n",
      "    exclude-path-matcher: \"*\"\n",
    ),
  )?;

  headerguard()?
    .current_dir(temp_dir.path())
    .args(["validate", "--colors=never", "--config", "bad.yml"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("rule #0: Failed to load template from 'missing.txt'"))
    .stderr(predicate::str::contains("rule #0: Invalid path-matcher"))
    .stderr(predicate::str::contains("rule #1: Invalid author-matcher"))
    .stderr(predicate::str::contains("rule #1: Invalid exclude-path-matcher"));

  Ok(())
}

#[test]
fn test_validate_valid_config() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_project(temp_dir.path())?;
  write_file(temp_dir.path(), ".headerguard.yml", GO_ONLY_CONFIG)?;

  headerguard()?
    .current_dir(temp_dir.path())
    .args(["validate", "--colors=never"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Config is valid: 1 rule"));

  Ok(())
}

#[test]
fn test_missing_config_is_an_error() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_project(temp_dir.path())?;

  headerguard()?
    .current_dir(temp_dir.path())
    .arg("cmd")
    .assert()
    .failure()
    .stderr(predicate::str::contains("No config file found"));

  Ok(())
}

#[test]
fn test_missing_patterns() -> Result<()> {
  let temp_dir = tempdir()?;

  headerguard()?
    .current_dir(temp_dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("Missing required argument"));

  Ok(())
}
