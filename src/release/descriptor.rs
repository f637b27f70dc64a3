//! Release descriptor read/write
//!
//! The updater reads `notes` as a *string* holding JSON, not as a nested
//! object. Notes are therefore encoded twice: once into that string, then
//! again as part of the descriptor.

use crate::core::error::{DescriptorError, SyncError, SyncResult};
use crate::files::json::to_pretty_string;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// In-app alert shown to users after they update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDescriptor {
  pub id: i64,
  pub heading: String,
  pub subheading: String,
  /// 0 = cannot be dismissed, 1 = dismissible after `timer`, 2 = freely dismissible
  pub ignoreable: u8,
  /// Seconds
  pub timer: i64,
  /// Release the notice belongs to
  pub ver: String,
}

impl NoticeDescriptor {
  /// Test notice published when the operator skips notice configuration
  pub fn placeholder() -> Self {
    Self {
      id: 0,
      heading: "Test".to_string(),
      subheading: "How are you able to see this?".to_string(),
      ignoreable: 2,
      timer: 10,
      ver: "2.1.1".to_string(),
    }
  }

  /// Notice as stored in the notes string
  pub fn to_value(&self) -> Value {
    json!({
      "id": self.id,
      "heading": self.heading,
      "subheading": self.subheading,
      "ignoreable": self.ignoreable,
      "timer": self.timer,
      "ver": self.ver,
    })
  }

  /// The placeholder as published, with `id` written last
  pub fn placeholder_value() -> Value {
    let notice = Self::placeholder();
    json!({
      "heading": notice.heading,
      "subheading": notice.subheading,
      "ignoreable": notice.ignoreable,
      "timer": notice.timer,
      "ver": notice.ver,
      "id": notice.id,
    })
  }
}

/// Changelog payload carried in the descriptor's `notes` string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeLogNotes {
  #[serde(default)]
  pub major: Vec<String>,
  #[serde(default)]
  pub minor: Vec<String>,
  #[serde(default)]
  pub patch: Vec<String>,
  /// Kept as raw JSON so appends write back exactly what was read
  #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
  pub notice: Option<Value>,
  // Localized changelogs, reserved by the updater and always empty for now
  #[serde(default)]
  pub cn: Map<String, Value>,
  #[serde(default)]
  pub ru: Map<String, Value>,
  #[serde(default)]
  pub jp: Map<String, Value>,
  #[serde(default)]
  pub kr: Map<String, Value>,
  /// Keys this tool does not know about, carried through untouched
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

// `"notice": null` reads as `Some(Value::Null)`, not as an absent notice
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
  Value::deserialize(deserializer).map(Some)
}

impl ChangeLogNotes {
  /// Notes for a new release; a skipped notice publishes the placeholder
  pub fn new(major: Vec<String>, minor: Vec<String>, patch: Vec<String>, notice: Option<&NoticeDescriptor>) -> Self {
    let notice = notice.map_or_else(NoticeDescriptor::placeholder_value, NoticeDescriptor::to_value);
    Self {
      major,
      minor,
      patch,
      notice: Some(notice),
      ..Default::default()
    }
  }

  /// Decode the `notes` string of a descriptor
  pub fn decode(notes: &str) -> SyncResult<Self> {
    serde_json::from_str(notes).map_err(|e| SyncError::Descriptor(DescriptorError::Notes { reason: e.to_string() }))
  }

  /// Encode into the single-line string stored in `notes`
  ///
  /// Uses `", "` / `": "` separators and keeps non-ASCII text verbatim,
  /// matching descriptors already published.
  pub fn encode(&self) -> SyncResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    self.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
  }

  /// Append entries to each tier; existing entries keep their order
  pub fn append(&mut self, major: Vec<String>, minor: Vec<String>, patch: Vec<String>) {
    self.major.extend(major);
    self.minor.extend(minor);
    self.patch.extend(patch);
  }
}

/// Compact JSON with a space after every `,` and `:`
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
  fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
  where
    W: ?Sized + io::Write,
  {
    if first { Ok(()) } else { writer.write_all(b", ") }
  }

  fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
  where
    W: ?Sized + io::Write,
  {
    if first { Ok(()) } else { writer.write_all(b", ") }
  }

  fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
  where
    W: ?Sized + io::Write,
  {
    writer.write_all(b": ")
  }
}

/// Download entry for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
  /// Detached installer signature, empty when the build was not signed
  pub signature: String,
  pub url: String,
}

/// The "latest release" document the updater polls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
  pub version: String,
  /// JSON-encoded [`ChangeLogNotes`]
  pub notes: String,
  pub pub_date: String,
  pub platforms: BTreeMap<String, Platform>,
}

impl ReleaseDescriptor {
  pub fn new(
    version: impl Into<String>,
    notes: &ChangeLogNotes,
    pub_date: impl Into<String>,
    platform: impl Into<String>,
    entry: Platform,
  ) -> SyncResult<Self> {
    let mut platforms = BTreeMap::new();
    platforms.insert(platform.into(), entry);

    Ok(Self {
      version: version.into(),
      notes: notes.encode()?,
      pub_date: pub_date.into(),
      platforms,
    })
  }

  /// Overwrite the descriptor file
  pub fn save(&self, path: &Path) -> SyncResult<()> {
    fs::write(path, to_pretty_string(self)?)?;
    Ok(())
  }
}

/// A descriptor loaded for in-place edits
///
/// Kept as a generic JSON object so fields this tool does not model, and the
/// key order, survive a load/save cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorDocument {
  fields: Map<String, Value>,
}

impl DescriptorDocument {
  /// Load an existing descriptor
  pub fn load(path: &Path) -> SyncResult<Self> {
    if !path.exists() {
      return Err(SyncError::Descriptor(DescriptorError::NotFound {
        path: path.to_path_buf(),
      }));
    }

    let unreadable = |reason: String| {
      SyncError::Descriptor(DescriptorError::Unreadable {
        path: path.to_path_buf(),
        reason,
      })
    };

    let content = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| unreadable(e.to_string()))?;
    match value {
      Value::Object(fields) => Ok(Self { fields }),
      _ => Err(unreadable("top-level JSON value is not an object".to_string())),
    }
  }

  /// Released version, or `unknown` when the field is absent
  pub fn version(&self) -> &str {
    self.fields.get("version").and_then(Value::as_str).unwrap_or("unknown")
  }

  pub fn set_version(&mut self, version: &str) {
    self.fields.insert("version".to_string(), Value::String(version.to_string()));
  }

  /// Decode the nested notes; a missing `notes` field reads as empty notes
  pub fn notes(&self) -> SyncResult<ChangeLogNotes> {
    match self.fields.get("notes") {
      None => ChangeLogNotes::decode("{}"),
      Some(Value::String(notes)) => ChangeLogNotes::decode(notes),
      Some(other) => Err(SyncError::Descriptor(DescriptorError::Notes {
        reason: format!("expected a string, found {}", other),
      })),
    }
  }

  pub fn set_notes(&mut self, notes: &ChangeLogNotes) -> SyncResult<()> {
    self.fields.insert("notes".to_string(), Value::String(notes.encode()?));
    Ok(())
  }

  /// Update signature and URL of an existing platform entry
  ///
  /// Returns `false` and changes nothing when the platform is not listed.
  pub fn set_platform(&mut self, platform: &str, signature: &str, url: &str) -> bool {
    let Some(entry) = self
      .fields
      .get_mut("platforms")
      .and_then(Value::as_object_mut)
      .and_then(|platforms| platforms.get_mut(platform))
      .and_then(Value::as_object_mut)
    else {
      return false;
    };

    entry.insert("signature".to_string(), Value::String(signature.to_string()));
    entry.insert("url".to_string(), Value::String(url.to_string()));
    true
  }

  /// Overwrite the descriptor file
  pub fn save(&self, path: &Path) -> SyncResult<()> {
    fs::write(path, to_pretty_string(&self.fields)?)?;
    Ok(())
  }
}
