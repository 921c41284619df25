//! # Check Command
//!
//! This module wires the pipeline together: load the effective
//! configuration, load and compile the boilerplate templates, scan (or check
//! the explicitly named files), then report failing paths on stdout and map
//! the result to the process exit code.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, warn};

use crate::checker::Checker;
use crate::config::Config;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_hint, print_summary};
use crate::templates::TemplateStore;
use crate::verbose_log;

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Specific files to check instead of scanning the root directory
  #[arg(value_name = "FILE")]
  pub files: Vec<PathBuf>,

  /// Root directory to scan for files to check
  #[arg(long, default_value = ".", value_name = "DIR")]
  pub rootdir: PathBuf,

  /// Directory holding one boilerplate.<ext>.txt template per extension
  #[arg(long, short = 't', value_name = "DIR")]
  pub template_dir: PathBuf,

  /// Path to config file (default: boilerplate.json in the root directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore a config file even if present, using built-in defaults
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except failing files
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

  /// Write a JSON report of the scan to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the verbose_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // Load configuration: an absent file means defaults, a malformed one is
  // fatal.
  let config = if args.no_config {
    debug!("Config file lookup disabled, using built-in defaults");
    Config::default()
  } else {
    let config_path = args.config.clone().unwrap_or_else(|| Config::path_for_root(&args.rootdir));
    Config::load(&config_path).with_context(|| format!("Failed to load config from {}", config_path.display()))?
  };

  // Load templates before touching any file; a missing template directory is
  // a fatal setup error.
  let store = TemplateStore::load(&args.template_dir).with_context(|| {
    format!(
      "Failed to load boilerplate templates from {}",
      args.template_dir.display()
    )
  })?;

  if store.is_empty() {
    warn!(
      "No boilerplate templates found in {}, nothing will be checked",
      args.template_dir.display()
    );
  }
  verbose_log!(
    "Loaded {} boilerplate templates: {}",
    store.len(),
    store.extensions().collect::<Vec<_>>().join(", ")
  );

  let checker = Checker::new(&config, &store);

  let report = if args.files.is_empty() {
    debug!("Scanning root directory: {}", args.rootdir.display());
    checker.scan(&args.rootdir)
  } else {
    debug!("Checking {} explicitly named files", args.files.len());
    checker.check_files(&args.files)
  };

  // The stdout contract: one failing path per line, nothing else.
  report
    .write_plain(std::io::stdout().lock())
    .context("Failed to write failing files to stdout")?;

  print_summary(&report);
  print_hint(&report);

  if let Some(ref output_path) = args.report_json {
    report.write_json(output_path)?;
    verbose_log!("Wrote JSON report to {}", output_path.display());
  }

  if !report.passed() {
    process::exit(report.exit_code());
  }

  Ok(())
}
