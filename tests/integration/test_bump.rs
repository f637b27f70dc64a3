//! Integration tests for `release-sync -v <version>`

use crate::helpers::{DESCRIPTOR, SIGNATURE_DIR, TestProject, run_release_sync, stderr, stdout};
use anyhow::Result;

const TARGETS: [&str; 6] = [
  "package.json",
  "src/default.json",
  "src/defaultXX.json",
  "src-tauri/Cargo.toml",
  "src-tauri/tauri.conf.json",
  "src/utils/consts.ts",
];

#[test]
fn test_bump_updates_every_target() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  let before: Vec<String> = TARGETS.iter().map(|t| project.read(t)).collect::<Result<_>>()?;

  let output = run_release_sync(&project.path, &["-v", "2.1.3"], "")?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(stdout(&output).contains("Summary: 6 files updated, 0 files failed"));

  for (target, old) in TARGETS.iter().zip(&before) {
    let new = project.read(target)?;
    assert_eq!(new, old.replacen("\"1.0.0\"", "\"2.1.3\"", 1), "{}", target);
  }

  let cargo = project.read("src-tauri/Cargo.toml")?;
  assert!(cargo.contains("version = \"2.1.3\"\ndescription"));
  assert!(cargo.contains(r#"serde = { version = "1.0.0", features = ["derive"] }"#));

  Ok(())
}

#[test]
fn test_bump_twice_is_byte_identical() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  run_release_sync(&project.path, &["-v", "1.2.0"], "")?;
  let first: Vec<String> = TARGETS.iter().map(|t| project.read(t)).collect::<Result<_>>()?;
  let output = run_release_sync(&project.path, &["-v", "1.2.0"], "")?;
  assert!(output.status.success());
  let second: Vec<String> = TARGETS.iter().map(|t| project.read(t)).collect::<Result<_>>()?;

  assert_eq!(first, second);
  Ok(())
}

#[test]
fn test_missing_target_fails_but_others_update() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.remove("src/defaultXX.json")?;

  let output = run_release_sync(&project.path, &["-v", "1.1.0"], "")?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stdout(&output).contains("⚠ File not found: src/defaultXX.json"));
  assert!(stdout(&output).contains("Summary: 5 files updated, 1 files failed"));
  assert!(project.read("package.json")?.contains("\"version\": \"1.1.0\""));
  assert!(project.read("src/utils/consts.ts")?.contains("VERSION = \"1.1.0\""));

  Ok(())
}

#[test]
fn test_bump_patches_existing_descriptor() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  let notes = r#"{"major": ["Added feature X"], "minor": [], "patch": [], "cn": {}, "ru": {}, "jp": {}, "kr": {}}"#;
  let descriptor = serde_json::json!({
    "version": "1.0.0",
    "notes": notes,
    "pub_date": "2025-01-01T00:00:00Z",
    "platforms": {
      "windows-x86_64": { "signature": "old", "url": "https://example.com/old.exe" }
    }
  });
  project.write(DESCRIPTOR, &serde_json::to_string_pretty(&descriptor)?)?;
  project.write(
    &format!("{}/Integrated Mod Installer (IMI)_1.1.0_x64-setup.exe.sig", SIGNATURE_DIR),
    "bmV3IHNpZw==\n",
  )?;

  let output = run_release_sync(&project.path, &["-v", "1.1.0"], "")?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let saved = project.descriptor()?;
  assert_eq!(saved["version"], "1.1.0");
  assert_eq!(saved["notes"], notes);
  assert_eq!(saved["pub_date"], "2025-01-01T00:00:00Z");
  let platform = &saved["platforms"]["windows-x86_64"];
  assert_eq!(platform["signature"], "bmV3IHNpZw==");
  assert!(platform["url"].as_str().unwrap().ends_with("_1.1.0_x64-setup.exe"));

  Ok(())
}

#[test]
fn test_bump_warns_when_platform_is_not_listed() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  let descriptor = serde_json::json!({
    "version": "1.0.0",
    "notes": "{}",
    "pub_date": "2025-01-01T00:00:00Z",
    "platforms": {
      "darwin-aarch64": { "signature": "old", "url": "https://example.com/old.dmg" }
    }
  });
  project.write(DESCRIPTOR, &serde_json::to_string_pretty(&descriptor)?)?;

  let output = run_release_sync(&project.path, &["-v", "1.1.0"], "")?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(stdout(&output).contains("⚠ platform windows-x86_64 not in descriptor, signature/url left unchanged"));

  let saved = project.descriptor()?;
  assert_eq!(saved["version"], "1.1.0");
  assert_eq!(saved["platforms"]["darwin-aarch64"]["signature"], "old");
  assert!(saved["platforms"].get("windows-x86_64").is_none());

  Ok(())
}

#[test]
fn test_bump_keeps_crlf_manifest_line_endings() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  let crlf = project.read("src-tauri/Cargo.toml")?.replace('\n', "\r\n");
  project.write("src-tauri/Cargo.toml", &crlf)?;

  let output = run_release_sync(&project.path, &["-v", "1.1.0"], "")?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(
    project.read("src-tauri/Cargo.toml")?,
    crlf.replacen("\"1.0.0\"", "\"1.1.0\"", 1)
  );

  Ok(())
}

#[test]
fn test_bump_without_descriptor_does_not_create_one() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  let output = run_release_sync(&project.path, &["-v", "1.1.0"], "")?;
  assert!(output.status.success());
  assert!(!project.exists(DESCRIPTOR));

  Ok(())
}

#[test]
fn test_non_semver_declined_aborts() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  let before = project.read("package.json")?;

  let output = run_release_sync(&project.path, &["-v", "1.1"], "n\n")?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stdout(&output).contains("doesn't follow semantic versioning"));
  assert_eq!(project.read("package.json")?, before);

  Ok(())
}

#[test]
fn test_non_semver_confirmed_proceeds() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  let output = run_release_sync(&project.path, &["-v", "1.1"], "y\n")?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(project.read("package.json")?.contains("\"version\": \"1.1\""));

  Ok(())
}

#[test]
fn test_pre_release_version_needs_no_confirmation() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  let output = run_release_sync(&project.path, &["-v", "2.0.0-beta.1"], "")?;
  assert!(output.status.success());
  assert!(!stdout(&output).contains("Continue anyway?"));
  assert!(project.read("src/utils/consts.ts")?.contains("VERSION = \"2.0.0-beta.1\""));

  Ok(())
}

#[test]
fn test_config_file_overrides_targets() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  project.write(
    "release-sync.toml",
    r#"
[[targets]]
path = "package.json"
kind = "json"
"#,
  )?;

  let output = run_release_sync(&project.path, &["-v", "3.0.0"], "")?;
  assert!(output.status.success());
  assert!(stdout(&output).contains("Summary: 1 files updated, 0 files failed"));
  assert!(project.read("package.json")?.contains("\"version\": \"3.0.0\""));
  assert!(project.read("src/utils/consts.ts")?.contains("VERSION = \"1.0.0\""));

  Ok(())
}
