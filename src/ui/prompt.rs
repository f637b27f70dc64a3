//! Blocking line prompts
//!
//! Commands only talk to the operator through the [`Prompt`] trait, so they
//! can be driven by any reader/writer pair. Every answer is trimmed and end
//! of input reads as an empty answer.

use crate::core::error::SyncResult;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of operator answers
pub trait Prompt {
  /// Show `label` and read one trimmed line
  fn ask(&mut self, label: &str) -> SyncResult<String>;

  /// Show an informational line
  fn say(&mut self, line: &str) -> SyncResult<()>;

  /// Collect entries until the first empty answer
  ///
  /// Entries are kept verbatim (after trimming) and in order; duplicates are allowed.
  fn list(&mut self, title: &str) -> SyncResult<Vec<String>> {
    self.say(&format!("{} (press Enter on empty line to finish):", title))?;

    let mut items = Vec::new();
    loop {
      let line = self.ask(&format!("  [{}]: ", items.len()))?;
      if line.is_empty() {
        break;
      }
      items.push(line);
    }
    Ok(items)
  }

  /// Ask a yes/no question; only `y` (any case) counts as yes
  fn confirm(&mut self, question: &str) -> SyncResult<bool> {
    let answer = self.ask(&format!("{} (y/n): ", question))?;
    Ok(answer.eq_ignore_ascii_case("y"))
  }
}

/// Prompt over a reader/writer pair, normally stdin/stdout
pub struct Terminal<R, W> {
  input: R,
  output: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
  /// Prompt on the process's stdin/stdout
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Everything written to the operator so far
  #[cfg(test)]
  pub fn into_output(self) -> W {
    self.output
  }
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
  fn ask(&mut self, label: &str) -> SyncResult<String> {
    write!(self.output, "{}", label)?;
    self.output.flush()?;

    let mut line = String::new();
    self.input.read_line(&mut line)?;
    Ok(line.trim().to_string())
  }

  fn say(&mut self, line: &str) -> SyncResult<()> {
    writeln!(self.output, "{}", line)?;
    Ok(())
  }
}
