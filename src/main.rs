//! # headerguard
//!
//! A tool that decides which license-header template applies to each source
//! file.

mod cli;
mod collector;
mod config;
mod error;
mod logging;
mod output;
mod report;
mod rule;
mod rule_set;
mod source;

use std::process;

use anyhow::Result;

use crate::cli::{Cli, Command, run_match, run_validate};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  let ok = match cli.into_command() {
    Command::Match(args) => run_match(args)?,
    Command::Validate(args) => run_validate(args)?,
  };

  if !ok {
    process::exit(1);
  }

  Ok(())
}
