//! Terminal interaction: operator prompts and summary banners

pub mod prompt;

pub use prompt::{Prompt, Terminal};

const RULE_WIDTH: usize = 60;

/// Print a titled banner framed by rules
pub fn print_banner(title: &str) {
  println!("\n{}", "=".repeat(RULE_WIDTH));
  println!("{}", title);
  println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print a closing rule under a banner's body
pub fn print_rule() {
  println!("{}", "=".repeat(RULE_WIDTH));
}
