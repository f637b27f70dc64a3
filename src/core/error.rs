//! Error types for release-sync with contextual messages and exit codes
//!
//! Every fatal path in the tool funnels through [`SyncError`]. Errors carry an
//! optional help line that `print_error` renders under the message.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Everything requested was done
  Success = 0,
  /// Bad usage, missing input, declined confirmation or any failed file update
  Failure = 1,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-sync
#[derive(Debug)]
pub enum SyncError {
  /// Configuration errors
  Config(ConfigError),

  /// A value the operator had to provide was blank or unparsable
  Input { field: String, value: String },

  /// The operator declined a confirmation prompt
  Aborted,

  /// The persisted release descriptor is missing or cannot be decoded
  Descriptor(DescriptorError),

  /// One or more target files could not be updated
  FilesFailed { failed: usize, total: usize },

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl SyncError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    SyncError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create a required-input error
  pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
    SyncError::Input {
      field: field.into(),
      value: value.into(),
    }
  }

  /// Add context to an existing error
  ///
  /// Structured variants are folded into a message so the context is never dropped.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      SyncError::Message { message, context, help } => SyncError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      SyncError::Io(e) => SyncError::Message {
        message: format!("{}: {}", ctx_str, e),
        context: None,
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    ExitCode::Failure
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SyncError::Config(e) => e.help_message(),
      SyncError::Descriptor(e) => e.help_message(),
      SyncError::Input { field, .. } => Some(format!("Run the command again and provide a valid {}.", field)),
      SyncError::FilesFailed { .. } => {
        Some("Check the lines marked ✗ or ⚠ above, fix the files and run `release-sync -v` again.".to_string())
      }
      SyncError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for SyncError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SyncError::Config(e) => write!(f, "{}", e),
      SyncError::Input { field, value } => {
        if value.is_empty() {
          write!(f, "{} is required", field)
        } else {
          write!(f, "Invalid {}: '{}'", field, value)
        }
      }
      SyncError::Aborted => write!(f, "Aborted by user"),
      SyncError::Descriptor(e) => write!(f, "{}", e),
      SyncError::FilesFailed { failed, total } => {
        write!(f, "{} of {} file update(s) failed", failed, total)
      }
      SyncError::Io(e) => write!(f, "I/O error: {}", e),
      SyncError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for SyncError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SyncError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for SyncError {
  fn from(err: io::Error) -> Self {
    SyncError::Io(err)
  }
}

impl From<String> for SyncError {
  fn from(msg: String) -> Self {
    SyncError::message(msg)
  }
}

impl From<&str> for SyncError {
  fn from(msg: &str) -> Self {
    SyncError::message(msg)
  }
}

impl From<toml_edit::TomlError> for SyncError {
  fn from(err: toml_edit::TomlError) -> Self {
    SyncError::message(format!("TOML parse error: {}", err))
  }
}

impl From<toml_edit::de::Error> for SyncError {
  fn from(err: toml_edit::de::Error) -> Self {
    SyncError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for SyncError {
  fn from(err: serde_json::Error) -> Self {
    SyncError::message(format!("JSON error: {}", err))
  }
}

impl From<regex::Error> for SyncError {
  fn from(err: regex::Error) -> Self {
    SyncError::message(format!("Pattern error: {}", err))
  }
}

impl From<chrono::RoundingError> for SyncError {
  fn from(err: chrono::RoundingError) -> Self {
    SyncError::message(format!("Timestamp rounding error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for SyncError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    SyncError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// A path template lacks the `{version}` placeholder
  MissingPlaceholder { field: String },

  /// A value is outside its allowed range
  InvalidValue { field: String, reason: String },

  /// No target files configured
  NoTargets { path: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::MissingPlaceholder { field } => Some(format!(
        "Add `{{version}}` to `{}` in release-sync.toml so each release gets its own value.",
        field
      )),
      ConfigError::NoTargets { .. } => {
        Some("Add at least one `[[targets]]` entry or remove the section to use the defaults.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::MissingPlaceholder { field } => {
        write!(f, "Config field `{}` must contain a {{version}} placeholder", field)
      }
      ConfigError::InvalidValue { field, reason } => {
        write!(f, "Invalid value for `{}`: {}", field, reason)
      }
      ConfigError::NoTargets { path } => {
        write!(f, "No target files configured in {}", path.display())
      }
    }
  }
}

/// Release descriptor errors
#[derive(Debug)]
pub enum DescriptorError {
  /// Descriptor file does not exist
  NotFound { path: PathBuf },

  /// Descriptor file exists but could not be read or parsed
  Unreadable { path: PathBuf, reason: String },

  /// The nested notes string is not a valid notes document
  Notes { reason: String },
}

impl DescriptorError {
  fn help_message(&self) -> Option<String> {
    match self {
      DescriptorError::NotFound { .. } => {
        Some("Use `release-sync -l` to create a new release first.".to_string())
      }
      DescriptorError::Notes { .. } => {
        Some("The `notes` field must be a JSON-encoded object string. Recreate the release with `-l`.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for DescriptorError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DescriptorError::NotFound { path } => write!(f, "{} not found", path.display()),
      DescriptorError::Unreadable { path, reason } => {
        write!(f, "Error reading {}: {}", path.display(), reason)
      }
      DescriptorError::Notes { reason } => write!(f, "Error parsing notes: {}", reason),
    }
  }
}

/// Result type alias for release-sync
pub type SyncResult<T> = Result<T, SyncError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> SyncResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<SyncError>,
{
  fn with_context<F>(self, f: F) -> SyncResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SyncError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
