//! # Templates Module
//!
//! This module provides functionality for loading reference boilerplate
//! templates and compiling them into per-line matchers.
//!
//! A template directory holds one file per supported extension, named
//! `boilerplate.<ext>.txt` (so `boilerplate.go.txt` applies to `.go` files).
//! Template content is the literal license header text for that language's
//! comment syntax, except the copyright-year line, which is compiled into a
//! pattern that accepts any 4-digit year or year range so the same template
//! matches files created in different years.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use boilercheck::templates::TemplateStore;
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = TemplateStore::load(Path::new("hack/boilerplate"))?;
//!
//! if let Some(template) = store.get("go") {
//!   println!("go headers span {} lines", template.line_count());
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::warn;

use crate::verbose_log;

/// Template files must be named `boilerplate.<ext>.txt`.
const TEMPLATE_PREFIX: &str = "boilerplate.";
const TEMPLATE_SUFFIX: &str = ".txt";

/// Matches the year token inside a template line: either a literal `YEAR`
/// placeholder or a concrete 4-digit year baked into the template text.
const YEAR_TOKEN_PATTERN: &str = r"\bYEAR\b|\b(?:19|20)\d{2}\b";

/// What a checked file's line may put where the template names a year: a
/// 4-digit year, optionally extended to a range like `2016-2026`.
const YEAR_MATCH_PATTERN: &str = r"\d{4}(-\d{4})?";

/// A single compiled line of a boilerplate template.
#[derive(Debug, Clone)]
pub enum TemplateLine {
  /// Must match the file's line byte for byte.
  Literal(String),

  /// The copyright-year line, matched by a tolerant pattern.
  Year(Regex),
}

impl TemplateLine {
  /// Whether a line read from a checked file satisfies this template line.
  pub fn matches(&self, line: &str) -> bool {
    match self {
      TemplateLine::Literal(expected) => expected == line,
      TemplateLine::Year(pattern) => pattern.is_match(line),
    }
  }
}

/// A compiled boilerplate template for one file extension.
#[derive(Debug, Clone)]
pub struct Template {
  lines: Vec<TemplateLine>,
}

impl Template {
  /// Compile template text into per-line matchers.
  ///
  /// Each line is kept as a literal except lines naming a copyright year,
  /// which become anchored patterns accepting any 4-digit year or year range
  /// in the year's position.
  pub fn compile(text: &str) -> Result<Self, regex::Error> {
    let year_token = Regex::new(YEAR_TOKEN_PATTERN)?;

    let mut lines = Vec::new();
    for line in text.lines() {
      lines.push(compile_line(line, &year_token)?);
    }

    Ok(Self { lines })
  }

  /// Number of lines a checked file must begin with.
  pub fn line_count(&self) -> usize {
    self.lines.len()
  }

  /// The compiled per-line matchers, in order.
  pub fn lines(&self) -> &[TemplateLine] {
    &self.lines
  }
}

fn compile_line(line: &str, year_token: &Regex) -> Result<TemplateLine, regex::Error> {
  let Some(found) = year_token.find(line) else {
    return Ok(TemplateLine::Literal(line.to_string()));
  };

  let pattern = format!(
    "^{}{}{}$",
    regex::escape(&line[..found.start()]),
    YEAR_MATCH_PATTERN,
    regex::escape(&line[found.end()..])
  );
  Ok(TemplateLine::Year(Regex::new(&pattern)?))
}

/// Error type for template loading. Any of these is a fatal setup error: the
/// run aborts before a single file is checked.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
  /// The template directory is missing or unreadable.
  #[error("Failed to read template directory '{path}': {source}")]
  ReadDir { path: PathBuf, source: std::io::Error },

  /// A template file could not be read.
  #[error("Failed to read template file '{path}': {source}")]
  ReadFile { path: PathBuf, source: std::io::Error },

  /// A template line could not be compiled into a year pattern.
  #[error("Failed to compile template '{path}': {source}")]
  Compile { path: PathBuf, source: regex::Error },
}

/// Store of compiled boilerplate templates, keyed by file extension.
///
/// Loaded once at startup and read-only thereafter. Extensions with no
/// template are never checked.
#[derive(Debug, Default)]
pub struct TemplateStore {
  templates: BTreeMap<String, Template>,
}

impl TemplateStore {
  /// Load every template from a directory.
  ///
  /// Files not following the `boilerplate.<ext>.txt` naming convention are
  /// skipped with a warning rather than aborting the load.
  ///
  /// # Errors
  ///
  /// Returns a [`TemplateError`] if the directory is missing or unreadable,
  /// or if any template file cannot be read or compiled.
  pub fn load(template_dir: &Path) -> Result<Self, TemplateError> {
    let entries = fs::read_dir(template_dir).map_err(|e| TemplateError::ReadDir {
      path: template_dir.to_path_buf(),
      source: e,
    })?;

    let mut templates = BTreeMap::new();
    for entry in entries {
      let entry = entry.map_err(|e| TemplateError::ReadDir {
        path: template_dir.to_path_buf(),
        source: e,
      })?;
      let path = entry.path();
      if !path.is_file() {
        continue;
      }

      let file_name = entry.file_name();
      let Some(extension) = extension_for_template(&file_name.to_string_lossy()) else {
        warn!("Ignoring non-template file in template directory: {}", path.display());
        continue;
      };

      let text = fs::read_to_string(&path).map_err(|e| TemplateError::ReadFile {
        path: path.clone(),
        source: e,
      })?;
      let template = Template::compile(&text).map_err(|e| TemplateError::Compile {
        path: path.clone(),
        source: e,
      })?;

      verbose_log!("Loaded {}-line template for .{} from {}", template.line_count(), extension, path.display());
      templates.insert(extension, template);
    }

    Ok(Self { templates })
  }

  /// Register a template for an extension directly, replacing any existing
  /// one. Library callers can use this to build a store without a template
  /// directory on disk.
  pub fn insert(&mut self, extension: impl Into<String>, template: Template) {
    self.templates.insert(extension.into(), template);
  }

  /// Look up the template for an extension.
  pub fn get(&self, extension: &str) -> Option<&Template> {
    self.templates.get(extension)
  }

  /// Whether a template exists for an extension.
  pub fn contains(&self, extension: &str) -> bool {
    self.templates.contains_key(extension)
  }

  /// Number of loaded templates.
  pub fn len(&self) -> usize {
    self.templates.len()
  }

  /// Whether the store holds no templates at all.
  pub fn is_empty(&self) -> bool {
    self.templates.is_empty()
  }

  /// The extensions with a loaded template, in sorted order.
  pub fn extensions(&self) -> impl Iterator<Item = &str> {
    self.templates.keys().map(String::as_str)
  }
}

/// The lookup key a checked file resolves to: its extension, or its full
/// basename for extensionless files so a `boilerplate.Makefile.txt` template
/// can cover `Makefile`.
pub fn template_key(path: &Path) -> Option<String> {
  match path.extension() {
    Some(ext) => Some(ext.to_string_lossy().into_owned()),
    None => path.file_name().map(|name| name.to_string_lossy().into_owned()),
  }
}

/// Derive the target extension from a template file name, e.g.
/// `boilerplate.go.txt` applies to `.go` files.
fn extension_for_template(file_name: &str) -> Option<String> {
  let extension = file_name.strip_prefix(TEMPLATE_PREFIX)?.strip_suffix(TEMPLATE_SUFFIX)?;
  if extension.is_empty() {
    return None;
  }
  Some(extension.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_extension_for_template() {
    assert_eq!(extension_for_template("boilerplate.go.txt"), Some("go".to_string()));
    assert_eq!(extension_for_template("boilerplate.py.txt"), Some("py".to_string()));
    assert_eq!(extension_for_template("boilerplate.txt"), None);
    assert_eq!(extension_for_template("README.md"), None);
    assert_eq!(extension_for_template("boilerplate..txt"), None);
  }

  #[test]
  fn test_template_key() {
    assert_eq!(template_key(Path::new("src/main.go")), Some("go".to_string()));
    assert_eq!(template_key(Path::new("Makefile")), Some("Makefile".to_string()));
    assert_eq!(template_key(Path::new("a/b/script.py")), Some("py".to_string()));
  }

  #[test]
  fn test_year_placeholder_line_matches_any_year() {
    let template = Template::compile("// Copyright YEAR The Project Authors.\n// All rights reserved.").unwrap();
    assert_eq!(template.line_count(), 2);

    assert!(template.lines()[0].matches("// Copyright 2016 The Project Authors."));
    assert!(template.lines()[0].matches("// Copyright 2026 The Project Authors."));
    assert!(template.lines()[0].matches("// Copyright 2016-2026 The Project Authors."));
    assert!(!template.lines()[0].matches("// Copyright 20x6 The Project Authors."));
    assert!(!template.lines()[0].matches("// Copyright 2016 Some Other Authors."));
  }

  #[test]
  fn test_concrete_year_in_template_is_tolerant() {
    let template = Template::compile("# Copyright 2016 The Project Authors.").unwrap();
    assert!(template.lines()[0].matches("# Copyright 2024 The Project Authors."));
    assert!(template.lines()[0].matches("# Copyright 2016-2024 The Project Authors."));
  }

  #[test]
  fn test_literal_lines_require_exact_match() {
    let template = Template::compile("# License text.").unwrap();
    assert!(template.lines()[0].matches("# License text."));
    assert!(!template.lines()[0].matches("# license text."));
    assert!(!template.lines()[0].matches("# License text. "));
  }

  #[test]
  fn test_year_pattern_is_anchored() {
    let template = Template::compile("// Copyright YEAR Acme.").unwrap();
    assert!(!template.lines()[0].matches("prefix // Copyright 2020 Acme."));
    assert!(!template.lines()[0].matches("// Copyright 2020 Acme. trailing"));
  }
}
