//! # boilercheck
//!
//! A repository-hygiene checker that verifies source files begin with the
//! expected license boilerplate header.

mod checker;
mod cli;
mod config;
mod discovery;
mod logging;
mod output;
mod report;
mod templates;

use anyhow::Result;

use crate::cli::{Cli, run_check};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_check(cli.check_args)
}
