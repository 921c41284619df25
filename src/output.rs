//! # Output Module
//!
//! This module centralizes user-facing terminal output. The failing-file
//! listing itself goes through [`crate::report::ScanReport::write_plain`] so
//! stdout stays predictable for piping; everything here is the human-oriented
//! framing around it, gated on quiet mode.

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::report::ScanReport;

/// Symbols used in output
pub mod symbols {
  /// All files carry the expected boilerplate
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// At least one file is missing it
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the closing summary line for a scan (respects quiet mode).
pub fn print_summary(report: &ScanReport) {
  if is_quiet() {
    return;
  }

  let files_word = if report.checked == 1 { "file" } else { "files" };

  if report.passed() {
    eprintln!(
      "{} {} {} checked, all carry the expected boilerplate",
      symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()),
      report.checked,
      files_word
    );
  } else {
    eprintln!(
      "{} {} of {} {} missing the expected boilerplate",
      symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
      report.failing.len(),
      report.checked,
      files_word
    );
  }
}

/// Print a hint for fixing failures (respects quiet mode).
pub fn print_hint(report: &ScanReport) {
  if is_quiet() || report.passed() {
    return;
  }

  eprintln!(
    "{}",
    "Add the boilerplate header from the template directory to each listed file."
      .if_supports_color(Stream::Stderr, |s| s.dimmed())
  );
}
