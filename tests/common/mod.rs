#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// The go template used across the integration tests.
pub const GO_TEMPLATE: &str = "/*\nCopyright YEAR The Example Authors.\n\nLicensed under the Apache License, Version 2.0 (the \"License\");\n*/\n";

/// The python template used across the integration tests.
pub const PY_TEMPLATE: &str = "# Copyright YEAR The Example Authors.\n#\n# Licensed under the Apache License, Version 2.0 (the \"License\");\n";

/// A go source file carrying the expected header with a concrete year.
pub const PASSING_GO: &str = "/*\nCopyright 2019 The Example Authors.\n\nLicensed under the Apache License, Version 2.0 (the \"License\");\n*/\n\npackage main\n";

/// A python source file carrying the expected header with a year range.
pub const PASSING_PY: &str = "# Copyright 2019-2024 The Example Authors.\n#\n# Licensed under the Apache License, Version 2.0 (the \"License\");\n\nprint(\"ok\")\n";

/// A go source file with no header at all.
pub const FAILING_GO: &str = "package main\n\nfunc main() {}\n";

/// A python source file whose header diverges on a non-year line.
pub const FAILING_PY: &str = "# Copyright 2019 The Example Authors.\n#\n# Licensed under some other terms entirely;\n\nprint(\"no\")\n";

/// Writes a template file following the `boilerplate.<ext>.txt` convention.
pub fn write_template(template_dir: &Path, extension: &str, text: &str) -> Result<()> {
  fs::create_dir_all(template_dir)?;
  fs::write(template_dir.join(format!("boilerplate.{extension}.txt")), text)?;
  Ok(())
}

/// Creates a template directory with the standard go and py templates.
pub fn standard_template_dir(base: &Path) -> Result<PathBuf> {
  let template_dir = base.join("boilerplate");
  write_template(&template_dir, "go", GO_TEMPLATE)?;
  write_template(&template_dir, "py", PY_TEMPLATE)?;
  Ok(template_dir)
}

/// Creates the standard fixture tree: a passing and a failing file per
/// templated extension, one untemplated file, and a vendored failing file
/// that the default skip list must hide.
pub fn standard_tree() -> Result<TempDir> {
  let temp_dir = tempfile::tempdir()?;
  let root = temp_dir.path();

  standard_template_dir(root)?;

  fs::write(root.join("pass.go"), PASSING_GO)?;
  fs::write(root.join("pass.py"), PASSING_PY)?;
  fs::write(root.join("fail.go"), FAILING_GO)?;
  fs::write(root.join("fail.py"), FAILING_PY)?;
  fs::write(root.join("README.md"), "# readme\n")?;

  let vendor = root.join("vendor");
  fs::create_dir_all(&vendor)?;
  fs::write(vendor.join("vendored.go"), FAILING_GO)?;

  Ok(temp_dir)
}
