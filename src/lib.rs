//! # headerguard
//!
//! Decide which license-header template applies to a source file, based on
//! the file's path and author.
//!
//! Rules are loaded from configuration, their templates resolved and their
//! patterns compiled once, and then matched against any number of files.
//! Every configuration mistake is reported in a single pass rather than
//! stopping at the first one.
//!
//! ## Usage as a Library
//!
//! ```rust
//! use headerguard::rule::RuleConfig;
//! use headerguard::rule_set::RuleSet;
//! use headerguard::source::Source;
//!
//! let rules = RuleSet::from_configs(vec![
//!   RuleConfig {
//!     template: "Copyright (c) Example Corp\nSPDX-License-Identifier: MIT".to_string(),
//!     path_matcher: r"\.go$".to_string(),
//!     exclude_path_matcher: "^vendor/".to_string(),
//!     ..RuleConfig::default()
//!   },
//!   RuleConfig {
//!     template: "Copyright (c) Example Corp".to_string(),
//!     ..RuleConfig::default()
//!   },
//! ])
//! .expect("rules are valid");
//!
//! let (index, rule) = rules.find(&Source::new("cmd/main.go", "jane")).expect("a rule applies");
//! assert_eq!(index, 0);
//! assert!(rule.template().contains("MIT"));
//!
//! let (index, _) = rules.find(&Source::new("vendor/dep.go", "jane")).expect("fallback applies");
//! assert_eq!(index, 1);
//! ```
//!
//! ## Modules
//!
//! * [`rule`] - Rule configuration, compilation and matching
//! * [`rule_set`] - Ordered collections of compiled rules
//! * [`source`] - The file record rules are matched against
//! * [`config`] - Config file discovery and loading
//! * [`error`] - Error kinds and error accumulation
//! * [`collector`] - Expanding file and directory patterns into sources
//! * [`report`] - Match results and JSON rendering
//! * [`logging`] - Logging utilities for verbose output

pub mod collector;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod rule;
pub mod rule_set;
pub mod source;
