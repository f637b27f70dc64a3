use crate::core::config::render_template;
use std::fs;
use std::path::Path;

/// Look up the detached signature the packaging step wrote for `version`
///
/// The signature is optional: a missing or unreadable file yields an empty
/// string and the release goes out unsigned.
pub fn probe_signature(dir: &Path, template: &str, version: &str) -> String {
  let name = render_template(template, version);
  println!("\nChecking for signature file: {}", name);

  let path = dir.join(&name);
  if !path.is_file() {
    println!("exe sig not found, leaving it blank");
    return String::new();
  }

  match fs::read_to_string(&path) {
    Ok(content) => {
      println!("✓ Found signature file: {}", name);
      content.trim().to_string()
    }
    Err(e) => {
      println!("⚠ Error reading signature file: {}", e);
      println!("exe sig not found, leaving it blank");
      String::new()
    }
  }
}
