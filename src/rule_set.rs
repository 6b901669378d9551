//! # Rule Set Module
//!
//! An ordered collection of compiled [`Rule`]s. Rules are tried in the order
//! they were configured and the first one that matches a [`Source`] wins.

use tracing::debug;

use crate::error::ErrorList;
use crate::rule::{Rule, RuleConfig};
use crate::source::Source;

/// Compiled rules in configuration order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
  rules: Vec<Rule>,
}

impl RuleSet {
  /// Resolve templates and compile patterns for every rule.
  ///
  /// Errors from all rules are collected, each tagged with the zero-based
  /// index of the rule that raised it. Template resolution and pattern
  /// compilation are both attempted for a rule even if the other one fails.
  pub fn from_configs(configs: impl IntoIterator<Item = RuleConfig>) -> Result<Self, ErrorList> {
    let mut errors = ErrorList::new();
    let mut rules = Vec::new();

    for (index, mut config) in configs.into_iter().enumerate() {
      if let Err(e) = config.load_template() {
        errors.push(e.in_rule(index));
      }

      match config.compile() {
        Ok(rule) => rules.push(rule),
        Err(compile_errors) => {
          for e in compile_errors {
            errors.push(e.in_rule(index));
          }
        }
      }
    }

    debug!("Compiled {} rules with {} errors", rules.len(), errors.len());

    errors.into_result(Self { rules })
  }

  /// The first rule that applies to `source`, with its index.
  pub fn find(&self, source: &Source) -> Option<(usize, &Rule)> {
    self.rules.iter().enumerate().find(|(_, rule)| rule.matches(source))
  }

  pub fn get(&self, index: usize) -> Option<&Rule> {
    self.rules.get(index)
  }

  pub fn len(&self) -> usize {
    self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
    self.rules.iter()
  }
}
