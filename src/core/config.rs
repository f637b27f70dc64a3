use crate::core::error::{ConfigError, ResultExt, SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder substituted with the release version in path and URL templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Configuration for release-sync
/// Searched in order: release-sync.toml, .release-sync.toml, .config/release-sync.toml
///
/// Every section is optional; a missing file or section falls back to the
/// defaults of the Integrated Mod Installer project layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
  #[serde(default)]
  pub release: ReleaseConfig,
  #[serde(default)]
  pub notice: NoticeDefaults,
  #[serde(default = "default_targets")]
  pub targets: Vec<TargetFile>,
}

/// Where the release descriptor lives and how its platform entry is built
///
/// # Example
///
/// ```toml
/// [release]
/// descriptor = "latest.json"
/// platform = "windows-x86_64"
/// url_template = "https://example.com/download/App_{version}_x64-setup.exe"
/// signature_dir = "src-tauri/target/release/bundle/nsis"
/// release_signature = "App_{version}_x64-setup.exe.sig"
/// bump_signature = "App_{version}_x64-setup.exe.sig"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
  /// Release descriptor path (relative to root)
  #[serde(default = "default_descriptor")]
  pub descriptor: PathBuf,

  /// Platform id keyed under `platforms` in the descriptor
  #[serde(default = "default_platform")]
  pub platform: String,

  /// Download URL template
  #[serde(default = "default_url_template")]
  pub url_template: String,

  /// Directory the packaging step drops signature files into (relative to root)
  #[serde(default = "default_signature_dir")]
  pub signature_dir: PathBuf,

  /// Signature file name probed by the full release flow (`-l`)
  #[serde(default = "default_release_signature")]
  pub release_signature: String,

  /// Signature file name probed by the version update flow (`-v`)
  #[serde(default = "default_bump_signature")]
  pub bump_signature: String,
}

fn default_descriptor() -> PathBuf {
  PathBuf::from("latest.json")
}

fn default_platform() -> String {
  "windows-x86_64".to_string()
}

fn default_url_template() -> String {
  "https://github.com/jpbhatt21/integrated-mod-installer/releases/latest/download/Integrated.Mod.Installer.IMI._{version}_x64-setup.exe".to_string()
}

fn default_signature_dir() -> PathBuf {
  ["src-tauri", "target", "release", "bundle", "nsis"].iter().collect()
}

// The two flows have always used differently spelled installer names.
// Kept apart until the packaging output confirms which one is right.
fn default_release_signature() -> String {
  "Integrated Mod Manager (IMM)_{version}_x64-setup.exe.sig".to_string()
}

fn default_bump_signature() -> String {
  "Integrated Mod Installer (IMI)_{version}_x64-setup.exe.sig".to_string()
}

impl Default for ReleaseConfig {
  fn default() -> Self {
    Self {
      descriptor: default_descriptor(),
      platform: default_platform(),
      url_template: default_url_template(),
      signature_dir: default_signature_dir(),
      release_signature: default_release_signature(),
      bump_signature: default_bump_signature(),
    }
  }
}

/// Defaults offered while collecting a release notice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeDefaults {
  #[serde(default = "default_heading")]
  pub heading: String,
  #[serde(default = "default_subheading")]
  pub subheading: String,
  /// 0 = cannot be dismissed, 1 = dismissible after timer, 2 = freely dismissible
  #[serde(default = "default_ignoreable")]
  pub ignoreable: u8,
  /// Seconds
  #[serde(default = "default_timer")]
  pub timer: u32,
}

fn default_heading() -> String {
  "Notice".to_string()
}

fn default_subheading() -> String {
  "Critical update released, please update IMM".to_string()
}

fn default_ignoreable() -> u8 {
  2
}

fn default_timer() -> u32 {
  10
}

impl Default for NoticeDefaults {
  fn default() -> Self {
    Self {
      heading: default_heading(),
      subheading: default_subheading(),
      ignoreable: default_ignoreable(),
      timer: default_timer(),
    }
  }
}

/// A file whose version gets synchronized by `-v`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFile {
  /// Path relative to root
  pub path: PathBuf,
  pub kind: FileKind,
}

impl TargetFile {
  pub fn new(path: impl Into<PathBuf>, kind: FileKind) -> Self {
    Self {
      path: path.into(),
      kind,
    }
  }
}

/// How a target file stores its version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
  /// JSON document with a top-level "version" key
  Json,
  /// Cargo manifest with `version` under `[package]`
  Cargo,
  /// Source file exporting `VERSION = "..."`
  Consts,
}

fn default_targets() -> Vec<TargetFile> {
  vec![
    TargetFile::new("package.json", FileKind::Json),
    TargetFile::new("src/default.json", FileKind::Json),
    TargetFile::new("src/defaultXX.json", FileKind::Json),
    TargetFile::new("src-tauri/Cargo.toml", FileKind::Cargo),
    TargetFile::new("src-tauri/tauri.conf.json", FileKind::Json),
    TargetFile::new("src/utils/consts.ts", FileKind::Consts),
  ]
}

impl Default for SyncConfig {
  fn default() -> Self {
    Self::new()
  }
}

/// Substitute `{version}` in a template
pub fn render_template(template: &str, version: &str) -> String {
  template.replace(VERSION_PLACEHOLDER, version)
}

impl SyncConfig {
  /// Find config file in search order: release-sync.toml, .release-sync.toml, .config/release-sync.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("release-sync.toml"),
      path.join(".release-sync.toml"),
      path.join(".config").join("release-sync.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from the root, or the built-in defaults when no file exists
  pub fn load(path: &Path) -> SyncResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      return Ok(Self::new());
    };

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: SyncConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config.validate(&config_path)?;

    Ok(config)
  }

  /// Create the default config
  pub fn new() -> Self {
    Self {
      release: ReleaseConfig::default(),
      notice: NoticeDefaults::default(),
      targets: default_targets(),
    }
  }

  /// Validate templates, notice defaults and the target list
  pub fn validate(&self, config_path: &Path) -> SyncResult<()> {
    let templates = [
      ("release.url_template", &self.release.url_template),
      ("release.release_signature", &self.release.release_signature),
      ("release.bump_signature", &self.release.bump_signature),
    ];
    for (field, template) in templates {
      if !template.contains(VERSION_PLACEHOLDER) {
        return Err(SyncError::Config(ConfigError::MissingPlaceholder {
          field: field.to_string(),
        }));
      }
    }

    if self.notice.ignoreable > 2 {
      return Err(SyncError::Config(ConfigError::InvalidValue {
        field: "notice.ignoreable".to_string(),
        reason: format!("{} is not one of 0, 1 or 2", self.notice.ignoreable),
      }));
    }

    if self.targets.is_empty() {
      return Err(SyncError::Config(ConfigError::NoTargets {
        path: config_path.to_path_buf(),
      }));
    }

    Ok(())
  }

  /// Download URL for a version
  pub fn download_url(&self, version: &str) -> String {
    render_template(&self.release.url_template, version)
  }

  /// Absolute path of the release descriptor
  pub fn descriptor_path(&self, root: &Path) -> PathBuf {
    root.join(&self.release.descriptor)
  }
}
