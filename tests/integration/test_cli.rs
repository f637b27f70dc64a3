//! Integration tests for argument handling and exit codes

use crate::helpers::{TestProject, run_release_sync, stdout};
use anyhow::Result;

#[test]
fn test_no_arguments_prints_usage() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  let output = run_release_sync(&project.path, &[], "")?;
  assert_eq!(output.status.code(), Some(1));
  let out = stdout(&output);
  assert!(out.contains("Usage"));
  assert!(out.contains("-v"));

  Ok(())
}

#[test]
fn test_unknown_flag_fails_without_side_effects() -> Result<()> {
  let project = TestProject::new("1.0.0")?;
  let before = project.read("package.json")?;

  let output = run_release_sync(&project.path, &["-x"], "")?;
  assert_eq!(output.status.code(), Some(1));
  assert_eq!(project.read("package.json")?, before);

  Ok(())
}

#[test]
fn test_version_flag_arity() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  let missing = run_release_sync(&project.path, &["-v"], "")?;
  assert_eq!(missing.status.code(), Some(1));

  let extra = run_release_sync(&project.path, &["-v", "1.1.0", "1.2.0"], "")?;
  assert_eq!(extra.status.code(), Some(1));
  assert!(project.read("package.json")?.contains("\"version\": \"1.0.0\""));

  Ok(())
}

#[test]
fn test_help_exits_cleanly() -> Result<()> {
  let project = TestProject::new("1.0.0")?;

  let output = run_release_sync(&project.path, &["--help"], "")?;
  assert!(output.status.success());
  assert!(stdout(&output).contains("release-sync -la"));

  Ok(())
}
