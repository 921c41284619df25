//! # Report Module
//!
//! This module collects the outcome of a scan and renders it for consumers:
//! the plain one-path-per-line listing automation greps, and an optional JSON
//! report for CI artifacts.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Outcome of one scan.
///
/// `failing` holds every file that does not begin with its expected
/// boilerplate, in encounter order, with the root prefix preserved as given
/// on the command line. Running the same scan twice over an unchanged tree
/// yields an identical report.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanReport {
  /// How many candidate files were checked.
  pub checked: usize,

  /// Files missing or diverging from their expected boilerplate.
  pub failing: Vec<PathBuf>,
}

impl ScanReport {
  /// Whether every checked file passed.
  pub fn passed(&self) -> bool {
    self.failing.is_empty()
  }

  /// The process exit code this report maps to: 0 when clean, 1 otherwise.
  pub fn exit_code(&self) -> i32 {
    if self.passed() { 0 } else { 1 }
  }

  /// Write one failing path per line, in encounter order.
  pub fn write_plain<W: Write>(&self, mut out: W) -> std::io::Result<()> {
    for path in &self.failing {
      writeln!(out, "{}", path.display())?;
    }
    Ok(())
  }

  /// Write the report as pretty-printed JSON to a file.
  pub fn write_json(&self, output_path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(self).context("Failed to serialize scan report")?;
    std::fs::write(output_path, content)
      .with_context(|| format!("Failed to write report to {}", output_path.display()))
  }
}
