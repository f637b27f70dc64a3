//! File editors that stamp a version into the project's manifests
//!
//! Each editor is a pure `&str -> String` transform plus an `update_*`
//! wrapper that reads the file, applies the transform and writes it back.
//! The wrappers never propagate: they print a ✓/✗ line and return a bool
//! so one broken file does not stop the rest.

pub mod constant;
pub mod json;
pub mod manifest;

use crate::core::config::{FileKind, TargetFile};
use crate::core::error::{ResultExt, SyncResult};
use std::fs;
use std::path::Path;

pub use constant::update_consts_file;
pub use json::update_json_file;
pub use manifest::update_cargo_toml;

/// Per-file result of a version sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
  Updated,
  Failed,
  /// The file does not exist, so no editor ran
  Missing,
}

/// Tally of a version sync across all targets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummary {
  pub updated: usize,
  pub failed: usize,
}

impl UpdateSummary {
  pub fn record(&mut self, outcome: UpdateOutcome) {
    match outcome {
      UpdateOutcome::Updated => self.updated += 1,
      UpdateOutcome::Failed | UpdateOutcome::Missing => self.failed += 1,
    }
  }

  pub fn total(&self) -> usize {
    self.updated + self.failed
  }

  pub fn is_success(&self) -> bool {
    self.failed == 0
  }
}

/// Run the matching editor for one target file
pub fn update_target(root: &Path, target: &TargetFile, version: &str) -> UpdateOutcome {
  let full_path = root.join(&target.path);
  let display = target.path.display().to_string();

  if !full_path.exists() {
    println!("⚠ File not found: {}", display);
    return UpdateOutcome::Missing;
  }

  let ok = match target.kind {
    FileKind::Json => update_json_file(&full_path, &display, version),
    FileKind::Cargo => update_cargo_toml(&full_path, &display, version),
    FileKind::Consts => update_consts_file(&full_path, &display, version),
  };

  if ok { UpdateOutcome::Updated } else { UpdateOutcome::Failed }
}

/// Stamp the version into every target, in order, tallying the outcomes
pub fn update_all(root: &Path, targets: &[TargetFile], version: &str) -> UpdateSummary {
  let mut summary = UpdateSummary::default();
  for target in targets {
    summary.record(update_target(root, target, version));
  }
  summary
}

/// Read, transform and write back a file, printing the outcome
fn rewrite(path: &Path, display: &str, version: &str, transform: fn(&str, &str) -> SyncResult<String>) -> bool {
  match try_rewrite(path, version, transform) {
    Ok(()) => {
      println!("✓ Updated {}", display);
      true
    }
    Err(e) => {
      println!("✗ Failed to update {}: {}", display, e);
      false
    }
  }
}

fn try_rewrite(path: &Path, version: &str, transform: fn(&str, &str) -> SyncResult<String>) -> SyncResult<()> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let updated = transform(&content, version)?;
  fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
  Ok(())
}
