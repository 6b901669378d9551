//! # Report Module
//!
//! Records which rule applied to each [`Source`] and renders the result as
//! JSON for tooling.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

use crate::rule_set::RuleSet;
use crate::source::Source;

/// The outcome of evaluating one source against a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
  pub path: String,
  pub author: String,
  /// Index of the first rule that matched, if any
  pub rule: Option<usize>,
}

impl MatchReport {
  pub const fn is_matched(&self) -> bool {
    self.rule.is_some()
  }
}

/// Evaluate every source against `rules`.
pub fn evaluate(rules: &RuleSet, sources: &[Source]) -> Vec<MatchReport> {
  sources
    .iter()
    .map(|source| MatchReport {
      path: source.path.clone(),
      author: source.author.clone(),
      rule: rules.find(source).map(|(index, _)| index),
    })
    .collect()
}

/// Totals over a set of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
  pub total: usize,
  pub matched: usize,
  pub unmatched: usize,
}

impl MatchSummary {
  pub fn from_reports(reports: &[MatchReport]) -> Self {
    let matched = reports.iter().filter(|r| r.is_matched()).count();
    Self {
      total: reports.len(),
      matched,
      unmatched: reports.len() - matched,
    }
  }
}

/// Render reports and their summary as pretty-printed JSON.
pub fn to_json(reports: &[MatchReport]) -> Result<String> {
  let report = json!({
    "summary": MatchSummary::from_reports(reports),
    "files": reports,
  });
  Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rule::RuleConfig;

  fn rules() -> RuleSet {
    RuleSet::from_configs(vec![RuleConfig {
      template: "go".to_string(),
      path_matcher: r"\.go$".to_string(),
      ..RuleConfig::default()
    }])
    .expect("valid rules")
  }

  #[test]
  fn test_evaluate_and_summarize() {
    let sources = vec![Source::new("a.go", "x"), Source::new("b.rs", "x")];
    let reports = evaluate(&rules(), &sources);

    assert_eq!(reports[0].rule, Some(0));
    assert_eq!(reports[1].rule, None);

    let summary = MatchSummary::from_reports(&reports);
    assert_eq!(
      summary,
      MatchSummary {
        total: 2,
        matched: 1,
        unmatched: 1
      }
    );
  }

  #[test]
  fn test_json_shape() {
    let reports = evaluate(&rules(), &[Source::new("a.go", "x"), Source::new("b.rs", "y")]);
    let rendered = to_json(&reports).expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

    assert_eq!(value["summary"]["matched"], 1);
    assert_eq!(value["files"][0]["path"], "a.go");
    assert_eq!(value["files"][0]["rule"], 0);
    assert!(value["files"][1]["rule"].is_null());
    assert_eq!(value["files"][1]["author"], "y");
  }
}
