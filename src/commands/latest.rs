//! `-l`: build a fresh release descriptor from operator input
//!
//! Only the descriptor is written; target files are not touched. Run `-v`
//! separately to sync the version into the manifests.

use crate::core::config::NoticeDefaults;
use crate::core::context::Context;
use crate::core::error::{ResultExt, SyncError, SyncResult};
use crate::release::{
  ChangeLogNotes, NoticeDescriptor, Platform, ReleaseDescriptor, current_pub_date, probe_signature,
};
use crate::ui::{Prompt, print_banner, print_rule};
use std::str::FromStr;

/// Run the full release flow
pub fn run_latest(ctx: &Context, prompt: &mut impl Prompt) -> SyncResult<()> {
  println!("\n=== Creating Full Release ===\n");

  let version = prompt.ask("Version (str): ")?;
  if version.is_empty() {
    return Err(SyncError::input("Version", ""));
  }

  let major = prompt.list("Major Changes")?;
  let minor = prompt.list("Minor Changes")?;
  let patch = prompt.list("Patches")?;

  let notice = collect_notice(prompt, &ctx.config.notice, &version)?;

  let release = &ctx.config.release;
  let signature = probe_signature(&ctx.signature_dir(), &release.release_signature, &version);
  let url = ctx.config.download_url(&version);

  let shown = notice.clone().unwrap_or_else(NoticeDescriptor::placeholder);
  print_banner("SUMMARY:");
  println!("version: {}", version);
  println!("major: {:?}", major);
  println!("minor: {:?}", minor);
  println!("patch: {:?}", patch);
  println!("noticeId: {}", shown.id);
  println!("noticeHeading: {}", shown.heading);
  println!("noticeSubH: {}", shown.subheading);
  println!("noticeIgnore: {}", shown.ignoreable);
  println!("noticeTimer: {}", shown.timer);
  println!("sig: {}", if signature.is_empty() { "<blank>" } else { "<present>" });
  println!("url: {}", url);
  print_rule();

  let notes = ChangeLogNotes::new(major, minor, patch, notice.as_ref());
  let descriptor = ReleaseDescriptor::new(
    &version,
    &notes,
    current_pub_date()?,
    &release.platform,
    Platform { signature, url },
  )?;

  let path = ctx.descriptor_path();
  descriptor
    .save(&path)
    .with_context(|| format!("Failed to update {}", path.display()))?;
  println!("\n✓ Updated {}", path.display());

  Ok(())
}

/// Ask for the release notice; `None` when the operator gives no id
fn collect_notice(
  prompt: &mut impl Prompt,
  defaults: &NoticeDefaults,
  version: &str,
) -> SyncResult<Option<NoticeDescriptor>> {
  println!("\n--- Notice Configuration ---");

  let id = prompt.ask("Notice Id (int, leave blank to skip): ")?;
  if id.is_empty() {
    return Ok(None);
  }
  let id = parse_field::<i64>("notice id", &id)?;

  let heading = or_default(
    prompt.ask(&format!("Notice Heading (default: {}): ", defaults.heading))?,
    &defaults.heading,
  );
  let subheading = or_default(
    prompt.ask(&format!("Notice Subheading (default: {}): ", defaults.subheading))?,
    &defaults.subheading,
  );

  let ignoreable = prompt.ask(&format!("Ignoreable (0, 1 or 2, default {}): ", defaults.ignoreable))?;
  let ignoreable = if ignoreable.is_empty() {
    defaults.ignoreable
  } else {
    match parse_field::<u8>("notice ignoreable level", &ignoreable)? {
      level @ 0..=2 => level,
      _ => return Err(SyncError::input("notice ignoreable level", ignoreable)),
    }
  };

  let timer = prompt.ask(&format!("Timer (int, default {}): ", defaults.timer))?;
  let timer = if timer.is_empty() {
    i64::from(defaults.timer)
  } else {
    parse_field::<i64>("notice timer", &timer)?
  };

  Ok(Some(NoticeDescriptor {
    id,
    heading,
    subheading,
    ignoreable,
    timer,
    ver: version.to_string(),
  }))
}

fn parse_field<T: FromStr>(field: &str, raw: &str) -> SyncResult<T> {
  raw.parse().map_err(|_| SyncError::input(field, raw))
}

fn or_default(answer: String, default: &str) -> String {
  if answer.is_empty() { default.to_string() } else { answer }
}
