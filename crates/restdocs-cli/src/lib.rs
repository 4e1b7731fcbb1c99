//! Command-line adapter for `restdocs-core`.
//!
//! Reads a recorded operation and a snippet manifest from JSON files, then
//! verifies or renders the snippets the manifest lists.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary's tracing setup only
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use manifest::SnippetManifest;
pub use parser::Cli;
