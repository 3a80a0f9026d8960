//! Command-line adapter for campus.
//!
//! The `campus` binary starts the HTTP API and offers a handful of
//! administrative commands that operate on the same database through
//! `AppCore`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Only used by the binary entry point.
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, CourseCommand, StudentCommand, WebArgs};
pub use error::CliError;
pub use parser::Cli;
