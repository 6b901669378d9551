//! # Output Module
//!
//! This module centralizes all user-facing output for the headerguard tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! - Progressive: more detail with `-v`, silence with `-q`
//! - Scriptable: in quiet mode only unmatched paths reach stdout

use owo_colors::{OwoColorize, Stream};

use crate::error::ErrorList;
use crate::logging::{is_quiet, is_verbose};
use crate::report::{MatchReport, MatchSummary};
use crate::rule_set::RuleSet;

/// Symbols used in output
pub mod symbols {
  /// A rule applies
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// No rule applies, or a rule is invalid
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print one line per report, optionally followed by the matched template.
pub fn print_reports(reports: &[MatchReport], rules: &RuleSet, show_template: bool) {
  for report in reports {
    match report.rule {
      Some(index) => {
        if is_quiet() {
          continue;
        }
        println!(
          "{} {} -> rule #{}",
          symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
          report.path,
          index
        );
        if show_template && let Some(rule) = rules.get(index) {
          for line in rule.template().lines() {
            println!("    {}", line.if_supports_color(Stream::Stdout, |s| s.dimmed()));
          }
        }
      }
      None if is_quiet() => println!("{}", report.path),
      None => println!(
        "{} {} (no matching rule)",
        symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
        report.path
      ),
    }
  }
}

/// Print the final summary line.
pub fn print_summary(summary: &MatchSummary) {
  if is_quiet() {
    return;
  }

  let files_word = if summary.total == 1 { "file" } else { "files" };
  let line = format!(
    "{} {}: {} matched, {} unmatched",
    summary.total, files_word, summary.matched, summary.unmatched
  );

  if summary.unmatched == 0 {
    println!("{}", line.if_supports_color(Stream::Stdout, |s| s.green()));
  } else {
    println!("{}", line.if_supports_color(Stream::Stdout, |s| s.yellow()));
  }
}

/// Print every rule error on its own line to stderr.
pub fn print_rule_errors(errors: &ErrorList) {
  for error in errors {
    eprintln!(
      "{} {}",
      symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
      error
    );
  }
}

/// Print a short description of each rule when verbose.
pub fn print_rules_verbose(rules: &RuleSet) {
  if !is_verbose() {
    return;
  }

  for (index, rule) in rules.iter().enumerate() {
    let matchers = rule.matchers();
    eprintln!(
      "rule #{}: path={} author={} exclude={}",
      index,
      matchers.path().map_or("*", |r| r.as_str()),
      matchers.author().map_or("*", |r| r.as_str()),
      matchers.exclude_path().map_or("-", |r| r.as_str()),
    );
  }
}
