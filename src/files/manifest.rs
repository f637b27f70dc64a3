//! Version editor for Cargo manifests
//!
//! `toml_edit` locates the `[package]` version; the new value is spliced into
//! the original text at that span, so comments, line endings and every other
//! `version` key in the file stay byte-identical.

use crate::core::error::{SyncError, SyncResult};
use std::path::Path;
use toml_edit::{Document, Formatted, Item};

/// Replace the quoted `version` value inside `[package]`
pub fn set_package_version(content: &str, version: &str) -> SyncResult<String> {
  let doc = Document::parse(content)?;

  let package = doc
    .as_table()
    .get("package")
    .and_then(Item::as_table_like)
    .ok_or_else(|| SyncError::message("No [package] section in manifest"))?;

  let current = package
    .get("version")
    .and_then(Item::as_value)
    .filter(|v| v.is_str())
    .ok_or_else(|| SyncError::message("No quoted `version` in [package] section"))?;

  let span = current
    .span()
    .ok_or_else(|| SyncError::message("Could not locate the [package] version in manifest"))?;

  let mut updated = content.to_string();
  updated.replace_range(span, &Formatted::new(version.to_string()).display_repr());
  Ok(updated)
}

/// Update a Cargo manifest in place, reporting instead of propagating failures
pub fn update_cargo_toml(path: &Path, display: &str, version: &str) -> bool {
  super::rewrite(path, display, version, set_package_version)
}
