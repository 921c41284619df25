//! # boilercheck
//!
//! A repository-hygiene checker: it scans a source tree, finds text files by
//! extension, and verifies each begins with the expected license boilerplate
//! comment, skipping generated files and configured exclusions.
//!
//! The pipeline is config loading → file discovery → per-file template
//! matching → reporting. Failing files are listed one per line on stdout and
//! the process exits non-zero, so the tool slots directly into CI gates.
//!
//! ## Features
//!
//! * One boilerplate template per file extension, loaded from a template
//!   directory (`boilerplate.go.txt` applies to `.go` files)
//! * Copyright-year lines match any 4-digit year or year range, so one
//!   template covers files created in different years
//! * Skip directories (vendored and generated trees) pruned before descent
//! * A per-repository `boilerplate.json` config overriding the built-in skip
//!   lists
//! * Fail-open handling of unreadable files so binary or transient files
//!   never falsely fail the gate
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use boilercheck::checker::Checker;
//! use boilercheck::config::Config;
//! use boilercheck::templates::TemplateStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Built-in skip lists; Config::load reads a boilerplate.json instead
//!     let config = Config::default();
//!
//!     // One compiled template per extension found in the directory
//!     let store = TemplateStore::load(Path::new("hack/boilerplate"))?;
//!
//!     let checker = Checker::new(&config, &store);
//!     let report = checker.scan(Path::new("."));
//!
//!     for path in &report.failing {
//!         println!("{}", path.display());
//!     }
//!
//!     std::process::exit(report.exit_code())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`checker`] - Per-file pass/fail decisions and whole-tree scans
//! * [`templates`] - Boilerplate template loading and compilation
//! * [`discovery`] - Candidate-file traversal with skip-dir pruning
//! * [`config`] - The `boilerplate.json` configuration layer
//!
//! [`checker`]: crate::checker
//! [`templates`]: crate::templates
//! [`discovery`]: crate::discovery
//! [`config`]: crate::config

// Re-export modules for public API
pub mod checker;
pub mod config;
pub mod discovery;
pub mod logging;
pub mod output;
pub mod report;
pub mod templates;
