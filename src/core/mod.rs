//! Core building blocks shared by every command
//!
//! - **config**: release-sync.toml parsing, defaults and validation
//! - **context**: root directory + config, built once in main.rs
//! - **error**: error types with contextual help messages

pub mod config;
pub mod context;
pub mod error;
