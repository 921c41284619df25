//! # Discovery Module
//!
//! This module walks the scan root and yields candidate files: regular files
//! whose extension has a known boilerplate template, outside any pruned
//! directory.
//!
//! Skip directories are pruned before descent, so nothing inside them is ever
//! read. A directory is pruned when its own name or its root-relative path is
//! in the configured skip set; the scan root itself carries the relative path
//! `.`, so a skip set containing `.` yields an empty scan.
//!
//! Traversal is best-effort: an unreadable entry or broken symlink is skipped
//! with a debug log and has no effect on the rest of the scan.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::templates::{TemplateStore, template_key};

/// A file produced by discovery and consumed once by the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
  /// Path relative to the scan root.
  pub path: PathBuf,

  /// The template lookup key the file resolved to.
  pub extension: String,
}

/// Walk `root` and lazily yield every candidate file.
///
/// Files with unrecognized extensions are silently omitted; they are not
/// candidates, not failures. Entries are visited in file-name order so two
/// scans of an unchanged tree yield the same sequence.
pub fn discover<'a>(
  root: &'a Path,
  config: &'a Config,
  store: &'a TemplateStore,
) -> impl Iterator<Item = CandidateFile> + 'a {
  WalkDir::new(root)
    .follow_links(false)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(move |entry| !should_prune(entry, root, config))
    .filter_map(|result| match result {
      Ok(entry) => Some(entry),
      Err(error) => {
        debug!("Skipping unreadable entry during traversal: {}", error);
        None
      }
    })
    .filter(|entry| entry.file_type().is_file())
    .filter_map(move |entry| {
      let extension = template_key(entry.path())?;
      if !store.contains(&extension) {
        return None;
      }
      Some(CandidateFile {
        path: relative_to_root(entry.path(), root),
        extension,
      })
    })
}

/// Whether a directory entry's subtree is excluded from the scan.
fn should_prune(entry: &DirEntry, root: &Path, config: &Config) -> bool {
  if !entry.file_type().is_dir() {
    return false;
  }

  let name = entry.file_name().to_string_lossy();
  if config.dirs_to_skip.contains(name.as_ref()) {
    debug!("Pruning skipped directory: {}", entry.path().display());
    return true;
  }

  let relative = relative_to_root(entry.path(), root);
  let relative = relative.to_string_lossy().replace('\\', "/");
  if config.dirs_to_skip.contains(relative.as_str()) {
    debug!("Pruning skipped directory: {}", entry.path().display());
    return true;
  }

  false
}

/// The root-relative form of a walked path. The root itself maps to `.`.
fn relative_to_root(path: &Path, root: &Path) -> PathBuf {
  match path.strip_prefix(root) {
    Ok(stripped) if stripped.as_os_str().is_empty() => PathBuf::from("."),
    Ok(stripped) => stripped.to_path_buf(),
    Err(_) => path.to_path_buf(),
  }
}
