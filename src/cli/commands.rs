//! # Commands
//!
//! Implementations of the `match` and `validate` commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use crate::collector::SourceCollector;
use crate::config::load_rule_set;
use crate::error::ErrorList;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_reports, print_rule_errors, print_rules_verbose, print_summary};
use crate::report::{MatchSummary, evaluate, to_json};
use crate::rule_set::RuleSet;

/// Output format for match results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// Human-readable lines
  #[default]
  Text,
  /// A JSON document with a summary and one entry per file
  Json,
}

/// Arguments shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct CommonArgs {
  /// Path to config file (default: .headerguard.yml in the current directory)
  #[arg(long, short = 'c', value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and unmatched files
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl CommonArgs {
  fn init_output(&self) {
    init_tracing(self.quiet, self.verbose);

    if self.verbose > 0 {
      set_verbose();
    } else if self.quiet {
      set_quiet();
    }
    self.colors.apply();
  }
}

/// Arguments for the match command
#[derive(Args, Debug, Default)]
pub struct MatchArgs {
  /// Files or directories to evaluate. Directories are walked recursively.
  #[arg(required = false)]
  pub patterns: Vec<String>,

  /// Author attributed to every evaluated file
  #[arg(long, short = 'a', default_value = "")]
  pub author: String,

  /// Print the template of the matched rule under each file
  #[arg(long)]
  pub show_template: bool,

  /// Exit with a non-zero status if any file has no matching rule
  #[arg(long)]
  pub require_match: bool,

  /// Output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  #[command(flatten)]
  pub common: CommonArgs,
}

/// Arguments for the validate command
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
  #[command(flatten)]
  pub common: CommonArgs,
}

/// Run the match command. Returns `false` when the run should exit non-zero.
pub fn run_match(args: MatchArgs) -> Result<bool> {
  if args.patterns.is_empty() {
    eprintln!("ERROR: Missing required argument: <PATTERNS>...");
    return Ok(false);
  }

  args.common.init_output();

  let workspace_root = std::env::current_dir().context("Failed to get current directory")?;

  let Some(rules) = load_rules(args.common.config.as_deref(), &workspace_root)? else {
    return Ok(false);
  };
  print_rules_verbose(&rules);

  let sources = SourceCollector::new(&workspace_root, args.author).collect(&args.patterns)?;
  debug!("Evaluating {} sources against {} rules", sources.len(), rules.len());

  let reports = evaluate(&rules, &sources);
  let summary = MatchSummary::from_reports(&reports);

  match args.format {
    OutputFormat::Json => println!("{}", to_json(&reports)?),
    OutputFormat::Text => {
      print_reports(&reports, &rules, args.show_template);
      print_summary(&summary);
    }
  }

  Ok(!(args.require_match && summary.unmatched > 0))
}

/// Run the validate command. Returns `false` when the config is invalid.
pub fn run_validate(args: ValidateArgs) -> Result<bool> {
  args.common.init_output();

  let workspace_root = std::env::current_dir().context("Failed to get current directory")?;

  match load_rules(args.common.config.as_deref(), &workspace_root)? {
    Some(rules) => {
      let rules_word = if rules.len() == 1 { "rule" } else { "rules" };
      info_log!("Config is valid: {} {}", rules.len(), rules_word);
      Ok(true)
    }
    None => Ok(false),
  }
}

/// Load the rule set, printing rule errors one per line instead of failing.
///
/// Returns `Ok(None)` if any rule was invalid.
fn load_rules(config: Option<&Path>, workspace_root: &Path) -> Result<Option<RuleSet>> {
  match load_rule_set(config, workspace_root) {
    Ok(rules) => Ok(Some(rules)),
    Err(e) => match e.downcast_ref::<ErrorList>() {
      Some(errors) => {
        eprintln!("ERROR: {e}");
        print_rule_errors(errors);
        Ok(None)
      }
      None => Err(e),
    },
  }
}
