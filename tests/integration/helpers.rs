//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub const DESCRIPTOR: &str = "latest.json";
pub const SIGNATURE_DIR: &str = "src-tauri/target/release/bundle/nsis";

/// A throwaway copy of the app's layout with every default target file
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create a project whose target files are all at `version`
  pub fn new(version: &str) -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    let project = Self { _root: root, path };

    project.write(
      "package.json",
      &format!(
        "{{\n\t\"name\": \"integrated-mod-manager\",\n\t\"private\": true,\n\t\"version\": \"{}\",\n\t\"type\": \"module\"\n}}\n",
        version
      ),
    )?;
    project.write(
      "src/default.json",
      &format!("{{\n\t\"version\": \"{}\",\n\t\"theme\": \"dark\"\n}}\n", version),
    )?;
    project.write(
      "src/defaultXX.json",
      &format!("{{\n\t\"lang\": \"en\",\n\t\"version\": \"{}\"\n}}\n", version),
    )?;
    project.write(
      "src-tauri/Cargo.toml",
      &format!(
        r#"[package]
name = "integrated-mod-manager"
version = "{}"
description = "Integrated Mod Manager"
edition = "2021"

[build-dependencies]
tauri-build = {{ version = "2", features = [] }}

[dependencies]
serde = {{ version = "1.0.0", features = ["derive"] }}
"#,
        version
      ),
    )?;
    project.write(
      "src-tauri/tauri.conf.json",
      &format!(
        "{{\n\t\"productName\": \"IMM\",\n\t\"version\": \"{}\",\n\t\"identifier\": \"com.imm.app\",\n\t\"app\": {{\n\t\t\"windows\": []\n\t}}\n}}\n",
        version
      ),
    )?;
    project.write(
      "src/utils/consts.ts",
      &format!(
        "import {{ getCurrentWindow }} from \"@tauri-apps/api/window\";\n\nexport const VERSION = \"{}\";\nexport const window = getCurrentWindow();\n",
        version
      ),
    )?;

    Ok(project)
  }

  /// Write a file relative to the project root, creating parent directories
  pub fn write(&self, rel: &str, content: &str) -> Result<()> {
    let file = self.path.join(rel);
    if let Some(parent) = file.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file, content)?;
    Ok(())
  }

  /// Read a file relative to the project root
  pub fn read(&self, rel: &str) -> Result<String> {
    std::fs::read_to_string(self.path.join(rel)).with_context(|| format!("Failed to read {}", rel))
  }

  /// Check if a file exists
  pub fn exists(&self, rel: &str) -> bool {
    self.path.join(rel).exists()
  }

  /// Remove a file
  pub fn remove(&self, rel: &str) -> Result<()> {
    std::fs::remove_file(self.path.join(rel))?;
    Ok(())
  }

  /// Read and parse the release descriptor
  pub fn descriptor(&self) -> Result<serde_json::Value> {
    Ok(serde_json::from_str(&self.read(DESCRIPTOR)?)?)
  }

  /// Read the descriptor's nested notes
  pub fn notes(&self) -> Result<serde_json::Value> {
    let descriptor = self.descriptor()?;
    let notes = descriptor["notes"].as_str().context("notes is not a string")?;
    Ok(serde_json::from_str(notes)?)
  }
}

/// Run release-sync in `cwd`, feeding `stdin` to its prompts
///
/// Does not fail on a non-zero exit; callers assert on the status.
pub fn run_release_sync(cwd: &Path, args: &[&str], stdin: &str) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_release-sync");

  let mut child = Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .context("Failed to run release-sync")?;

  // The process may exit before reading everything (usage errors, aborts)
  let mut pipe = child.stdin.take().context("stdin not piped")?;
  if let Err(e) = pipe.write_all(stdin.as_bytes())
    && e.kind() != std::io::ErrorKind::BrokenPipe
  {
    return Err(e.into());
  }
  drop(pipe);

  Ok(child.wait_with_output()?)
}

/// Stdout of a run as text
pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a run as text
pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).to_string()
}
