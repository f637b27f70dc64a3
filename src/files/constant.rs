//! Version editor for the frontend constants module (`export const VERSION = "..."`)

use crate::core::error::{SyncError, SyncResult};
use regex::{Captures, Regex};
use std::path::Path;

const VERSION_DECL: &str = r#"(export\s+const\s+VERSION\s*=\s*")[^"]*(")"#;

/// Replace the quoted value of the exported `VERSION` constant
pub fn set_version_constant(content: &str, version: &str) -> SyncResult<String> {
  let re = Regex::new(VERSION_DECL)?;
  if !re.is_match(content) {
    return Err(SyncError::message("No `export const VERSION = \"...\"` declaration found"));
  }

  let out = re.replace(content, |caps: &Captures| format!("{}{}{}", &caps[1], version, &caps[2]));
  Ok(out.into_owned())
}

/// Update a constants source file in place, reporting instead of propagating failures
pub fn update_consts_file(path: &Path, display: &str, version: &str) -> bool {
  super::rewrite(path, display, version, set_version_constant)
}
