//! # Configuration Module
//!
//! This module provides configuration support for boilercheck, allowing
//! repositories to customize which directories are pruned from the scan and
//! which files are exempt from header checks.
//!
//! Configuration lives in a `boilerplate.json` file at the scan root. A
//! missing file is not an error: the built-in defaults apply. A present but
//! malformed file aborts the run.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// The config file name looked up under the scan root.
pub const DEFAULT_CONFIG_FILENAME: &str = "boilerplate.json";

/// Directory names pruned from the scan unless a config file overrides the
/// list. Matched against both the directory's own name and its root-relative
/// path.
pub const DEFAULT_DIRS_TO_SKIP: &[&str] = &[".git", "Godeps", "_output", "third_party", "vendor"];

/// Files exempt from header checks even though they are not mechanically
/// generated, matched by basename. Release tooling stamps these.
pub const DEFAULT_NOT_GENERATED_FILES_TO_SKIP: &[&str] = &["version.go", "version.py"];

/// Effective configuration for one run.
///
/// Immutable once loaded; threaded by reference into the discovery and
/// checking stages rather than held in process-global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Directory names or root-relative paths whose subtrees are never
  /// descended into.
  pub dirs_to_skip: BTreeSet<String>,

  /// Basenames that always pass the header check regardless of content.
  pub not_generated_files_to_skip: BTreeSet<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      dirs_to_skip: DEFAULT_DIRS_TO_SKIP.iter().map(ToString::to_string).collect(),
      not_generated_files_to_skip: DEFAULT_NOT_GENERATED_FILES_TO_SKIP
        .iter()
        .map(ToString::to_string)
        .collect(),
    }
  }
}

/// On-disk shape of the config file. Both keys are optional; a present key
/// replaces the corresponding default list wholesale.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
  #[serde(default)]
  dirs_to_skip: Option<Vec<String>>,

  #[serde(default)]
  not_generated_files_to_skip: Option<Vec<String>>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file exists but could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid JSON.
  #[error("Failed to parse config file '{path}': {source}")]
  Parse { path: PathBuf, source: serde_json::Error },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// A nonexistent path yields the built-in defaults. A file that exists but
  /// cannot be read or parsed is a fatal error, propagated to the caller.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      verbose_log!("No config file at {}, using built-in defaults", path.display());
      return Ok(Self::default());
    }

    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    let raw: RawConfig = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config = Self::default();
    if let Some(dirs) = raw.dirs_to_skip {
      config.dirs_to_skip = dirs.into_iter().collect();
    }
    if let Some(files) = raw.not_generated_files_to_skip {
      config.not_generated_files_to_skip = files.into_iter().collect();
    }

    Ok(config)
  }

  /// The config file path consulted for a given scan root.
  pub fn path_for_root(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILENAME)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_path_for_root() {
    assert_eq!(
      Config::path_for_root(Path::new("/tmp/some/path")),
      PathBuf::from("/tmp/some/path/boilerplate.json")
    );
    assert_eq!(Config::path_for_root(Path::new(".")), PathBuf::from("./boilerplate.json"));
  }

  #[test]
  fn test_nonexistent_path_yields_defaults() {
    let config = Config::load(Path::new("/nonexistent/boilerplate.json")).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_defaults_contain_vendor_dirs() {
    let config = Config::default();
    assert!(config.dirs_to_skip.contains("vendor"));
    assert!(config.dirs_to_skip.contains("third_party"));
  }
}
