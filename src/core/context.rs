//! Run context - resolve once, pass everywhere
//!
//! The root directory and the loaded configuration are the only global
//! state the tool has. `main` builds a [`Context`] once and hands it to the
//! command that runs.

use crate::core::config::SyncConfig;
use crate::core::error::SyncResult;
use std::path::{Path, PathBuf};

/// Root directory plus configuration for a single run
#[derive(Debug, Clone)]
pub struct Context {
  /// Project root every configured path is relative to
  pub root: PathBuf,

  /// Loaded configuration (defaults when no release-sync.toml exists)
  pub config: SyncConfig,
}

impl Context {
  /// Build the context for a root directory, loading release-sync.toml if present
  pub fn build(root: &Path) -> SyncResult<Self> {
    let config = SyncConfig::load(root)?;
    Ok(Self::new(root.to_path_buf(), config))
  }

  pub fn new(root: PathBuf, config: SyncConfig) -> Self {
    Self { root, config }
  }

  /// Absolute path of the release descriptor
  pub fn descriptor_path(&self) -> PathBuf {
    self.config.descriptor_path(&self.root)
  }

  /// Absolute path of the signature directory
  pub fn signature_dir(&self) -> PathBuf {
    self.root.join(&self.config.release.signature_dir)
  }
}
