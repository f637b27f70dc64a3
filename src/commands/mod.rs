//! CLI commands for release-sync
//!
//! - **bump** (`-v <version>`): sync a version into every target file and the release descriptor
//! - **latest** (`-l`): build a new release descriptor with changelog and notice
//! - **append** (`-la`): append changelog entries to the existing release descriptor
//!
//! All commands take the run [`Context`](crate::core::context::Context) and a
//! [`Prompt`](crate::ui::Prompt) for operator input.

pub mod append;
pub mod bump;
pub mod latest;

pub use append::run_append;
pub use bump::run_bump;
pub use latest::run_latest;
