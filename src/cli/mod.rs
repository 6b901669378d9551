//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing; `match` is the default command when no
//! subcommand is given.

mod commands;

pub use commands::{MatchArgs, ValidateArgs, run_match, run_validate};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  args_conflicts_with_subcommands = true,
  after_help = "Examples:
  # Show which rule applies to every file under src/
  headerguard --author \"Jane Doe\" src/

  # Use an explicit config file and print the matched templates
  headerguard --config rules.yml --show-template src/ cmd/

  # Fail when a file has no applicable rule (useful in CI)
  headerguard --require-match --author \"$(git config user.name)\" .

  # Machine-readable output
  headerguard --format json src/

  # Check a config file for invalid rules
  headerguard validate --config rules.yml
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub match_args: MatchArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Report which rule applies to each file (default)
  Match(MatchArgs),
  /// Load the config and report every invalid rule
  Validate(ValidateArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Resolve the command to run, falling back to `match` with the top-level
  /// arguments.
  pub fn into_command(self) -> Command {
    match self.command {
      Some(command) => command,
      None => Command::Match(self.match_args),
    }
  }
}
