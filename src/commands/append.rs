//! `-la`: append changelog entries to the published release
//!
//! Version, pub_date and platforms are left exactly as they are; only the
//! nested notes string is rewritten.

use crate::core::context::Context;
use crate::core::error::{ResultExt, SyncResult};
use crate::release::DescriptorDocument;
use crate::ui::{Prompt, print_banner, print_rule};

/// Run the append flow
pub fn run_append(ctx: &Context, prompt: &mut impl Prompt) -> SyncResult<()> {
  println!("\n=== Appending to Existing Release ===\n");

  let path = ctx.descriptor_path();
  let mut doc = DescriptorDocument::load(&path)?;
  let mut notes = doc.notes()?;

  let version = doc.version().to_string();
  println!("Current version: {}", version);
  println!("Current major changes: {:?}", notes.major);
  println!("Current minor changes: {:?}", notes.minor);
  println!("Current patch changes: {:?}", notes.patch);
  println!();

  let major = prompt.list("Additional Major Changes")?;
  let minor = prompt.list("Additional Minor Changes")?;
  let patch = prompt.list("Additional Patches")?;

  notes.append(major, minor, patch);
  doc.set_notes(&notes)?;

  print_banner("UPDATED SUMMARY:");
  println!("version: {}", version);
  println!("major: {:?}", notes.major);
  println!("minor: {:?}", notes.minor);
  println!("patch: {:?}", notes.patch);
  print_rule();

  doc
    .save(&path)
    .with_context(|| format!("Failed to update {}", path.display()))?;
  println!("\n✓ Updated {}", path.display());

  Ok(())
}
