//! `-v <version>`: stamp a version into every target file
//!
//! Also patches the release descriptor (version, signature, URL) when one
//! exists, leaving its notes and pub_date alone.

use crate::core::context::Context;
use crate::core::error::{ResultExt, SyncError, SyncResult};
use crate::files::{UpdateOutcome, update_all};
use crate::release::{DescriptorDocument, probe_signature};
use crate::ui::Prompt;
use regex::Regex;

const SEMVER_LIKE: &str = r"^\d+\.\d+\.\d+(-[\w.]+)?$";

/// Loose `x.y.z[-pre]` check; a mismatch only warns
pub fn is_semver_like(version: &str) -> SyncResult<bool> {
  Ok(Regex::new(SEMVER_LIKE)?.is_match(version))
}

/// Run the version update flow
pub fn run_bump(ctx: &Context, version: &str, prompt: &mut impl Prompt) -> SyncResult<()> {
  if !is_semver_like(version)? {
    println!("Warning: Version '{}' doesn't follow semantic versioning (x.y.z)", version);
    if !prompt.confirm("Continue anyway?")? {
      return Err(SyncError::Aborted);
    }
  }

  println!("\nUpdating version to: {}\n", version);
  let mut summary = update_all(&ctx.root, &ctx.config.targets, version);

  println!("\n{}", "=".repeat(50));
  println!(
    "Summary: {} files updated, {} files failed",
    summary.updated, summary.failed
  );
  println!("{}", "=".repeat(50));

  let descriptor_path = ctx.descriptor_path();
  if descriptor_path.exists() {
    let outcome = match patch_descriptor(ctx, version) {
      Ok(()) => {
        println!("✓ Updated {}", descriptor_path.display());
        UpdateOutcome::Updated
      }
      Err(e) => {
        println!("✗ Failed to update {}: {}", descriptor_path.display(), e);
        UpdateOutcome::Failed
      }
    };
    summary.record(outcome);
  }

  if !summary.is_success() {
    return Err(SyncError::FilesFailed {
      failed: summary.failed,
      total: summary.total(),
    });
  }
  Ok(())
}

/// Point the existing descriptor at `version`
fn patch_descriptor(ctx: &Context, version: &str) -> SyncResult<()> {
  let path = ctx.descriptor_path();
  let mut doc = DescriptorDocument::load(&path)?;
  doc.set_version(version);

  let release = &ctx.config.release;
  let signature = probe_signature(&ctx.signature_dir(), &release.bump_signature, version);
  let url = ctx.config.download_url(version);
  if !doc.set_platform(&release.platform, &signature, &url) {
    println!(
      "⚠ platform {} not in descriptor, signature/url left unchanged",
      release.platform
    );
  }

  doc
    .save(&path)
    .with_context(|| format!("Failed to write {}", path.display()))
}
