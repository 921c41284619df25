//! # Checker Module
//!
//! This module decides pass/fail per file and drives whole-tree scans. The
//! per-file decision order is:
//!
//! 1. A basename in the not-generated skip list passes unconditionally; the
//!    file is never opened.
//! 2. A file whose extension has no template passes unconditionally.
//! 3. Otherwise the file's leading lines, as many as the template has, must
//!    match the template line by line: literal lines byte for byte, the
//!    copyright-year line against its tolerant pattern.
//!
//! Reading is fail-open: a file that cannot be opened or read (missing,
//! permission denied, not valid UTF-8) is treated as passing, so binary and
//! transient files never falsely fail the gate.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::discovery::discover;
use crate::report::ScanReport;
use crate::templates::{TemplateStore, template_key};
use crate::verbose_log;

/// Checks files against the loaded boilerplate templates.
///
/// Holds references to the immutable configuration and template store for the
/// duration of one run; all state is threaded explicitly, nothing is global.
pub struct Checker<'a> {
  config: &'a Config,
  store: &'a TemplateStore,
}

impl<'a> Checker<'a> {
  /// Create a checker over a loaded configuration and template store.
  pub const fn new(config: &'a Config, store: &'a TemplateStore) -> Self {
    Self { config, store }
  }

  /// Decide whether a single file carries the expected boilerplate.
  ///
  /// Returns `true` when the file passes. See the module docs for the full
  /// decision order.
  pub fn file_passes(&self, path: &Path) -> bool {
    if let Some(name) = path.file_name() {
      if self.config.not_generated_files_to_skip.contains(name.to_string_lossy().as_ref()) {
        verbose_log!("Skipping: {} (exempt file)", path.display());
        return true;
      }
    }

    let Some(template) = template_key(path).and_then(|key| self.store.get(&key)) else {
      // Not a candidate: nothing to hold the file to.
      return true;
    };

    let leading = match read_leading_lines(path, template.line_count()) {
      Ok(lines) => lines,
      Err(error) => {
        debug!("Could not read {}, treating as passing: {}", path.display(), error);
        return true;
      }
    };

    if leading.len() < template.line_count() {
      verbose_log!("Failing: {} (shorter than the expected header)", path.display());
      return false;
    }

    let passes = template
      .lines()
      .iter()
      .zip(leading.iter())
      .all(|(expected, actual)| expected.matches(actual));

    if !passes {
      verbose_log!("Failing: {} (header does not match template)", path.display());
    }

    passes
  }

  /// Scan a directory tree and collect every failing file.
  ///
  /// Failing paths keep the root prefix as given, so a scan rooted at `.`
  /// reports `./fail.go`. Order is encounter order.
  pub fn scan(&self, root: &Path) -> ScanReport {
    let mut report = ScanReport::default();

    for candidate in discover(root, self.config, self.store) {
      let path = root.join(&candidate.path);
      report.checked += 1;
      if !self.file_passes(&path) {
        report.failing.push(path);
      }
    }

    report
  }

  /// Check an explicit list of files, bypassing discovery.
  ///
  /// The skip-list and no-template rules still apply, so passing a file the
  /// scan would never have selected reports it as passing rather than
  /// erroring.
  pub fn check_files(&self, files: &[PathBuf]) -> ScanReport {
    let mut report = ScanReport::default();

    for path in files {
      report.checked += 1;
      if !self.file_passes(path) {
        report.failing.push(path.clone());
      }
    }

    report
  }
}

/// Read up to `count` leading lines of a file.
///
/// The file handle is scoped to this call: acquired, read, and released
/// before the next file is processed, including on error.
fn read_leading_lines(path: &Path, count: usize) -> std::io::Result<Vec<String>> {
  let file = File::open(path)?;
  let reader = BufReader::new(file);

  let mut lines = Vec::with_capacity(count);
  for line in reader.lines().take(count) {
    lines.push(line?);
  }

  Ok(lines)
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;
  use crate::templates::Template;

  fn store_with(extension: &str, text: &str) -> TemplateStore {
    let mut store = TemplateStore::default();
    store.insert(extension, Template::compile(text).unwrap());
    store
  }

  #[test]
  fn test_skip_list_wins_over_content() {
    let mut config = Config::default();
    config.not_generated_files_to_skip.insert("version.go".to_string());
    let store = store_with("go", "// Copyright YEAR Acme.");
    let checker = Checker::new(&config, &store);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("version.go");
    std::fs::write(&path, "package main\n").unwrap();

    assert!(checker.file_passes(&path));
  }

  #[test]
  fn test_no_template_passes() {
    let config = Config::default();
    let store = store_with("go", "// Copyright YEAR Acme.");
    let checker = Checker::new(&config, &store);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "anything\n").unwrap();

    assert!(checker.file_passes(&path));
  }

  #[test]
  fn test_unreadable_file_passes() {
    let config = Config::default();
    let store = store_with("go", "// Copyright YEAR Acme.");
    let checker = Checker::new(&config, &store);

    let dir = tempfile::tempdir().unwrap();
    assert!(checker.file_passes(&dir.path().join("does_not_exist.go")));
  }

  #[test]
  fn test_short_file_fails() {
    let config = Config::default();
    let store = store_with("go", "// Copyright YEAR Acme.\n// All rights reserved.");
    let checker = Checker::new(&config, &store);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.go");
    std::fs::write(&path, "// Copyright 2024 Acme.\n").unwrap();

    assert!(!checker.file_passes(&path));
  }

  #[test]
  fn test_matching_header_passes_and_one_line_flips_it() {
    let config = Config::default();
    let store = store_with("go", "// Copyright YEAR Acme.\n// All rights reserved.");
    let checker = Checker::new(&config, &store);

    let dir = tempfile::tempdir().unwrap();

    let good = dir.path().join("good.go");
    let mut file = std::fs::File::create(&good).unwrap();
    writeln!(file, "// Copyright 2019 Acme.").unwrap();
    writeln!(file, "// All rights reserved.").unwrap();
    writeln!(file, "package main").unwrap();
    drop(file);
    assert!(checker.file_passes(&good));

    let bad = dir.path().join("bad.go");
    std::fs::write(&bad, "// Copyright 2019 Acme.\n// Some rights reserved.\npackage main\n").unwrap();
    assert!(!checker.file_passes(&bad));
  }
}
