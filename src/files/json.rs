//! Version editor for JSON documents (package.json, tauri.conf.json, app defaults)

use crate::core::error::{SyncError, SyncResult};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Set the top-level `"version"` key, keeping every other key in place
///
/// The key keeps its position when it already exists and is appended otherwise.
pub fn set_version(content: &str, version: &str) -> SyncResult<String> {
  let mut doc: Value = serde_json::from_str(content)?;

  let object = doc
    .as_object_mut()
    .ok_or_else(|| SyncError::message("top-level JSON value is not an object"))?;
  object.insert("version".to_string(), Value::String(version.to_string()));

  to_pretty_string(&doc)
}

/// Serialize with tab indentation and a trailing newline
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> SyncResult<String> {
  let mut buf = Vec::new();
  let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
  let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
  value.serialize(&mut ser)?;

  let mut out = String::from_utf8(buf)?;
  out.push('\n');
  Ok(out)
}

/// Update a JSON file in place, reporting instead of propagating failures
pub fn update_json_file(path: &Path, display: &str, version: &str) -> bool {
  super::rewrite(path, display, version, set_version)
}
