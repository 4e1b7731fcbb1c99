//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Check documented names against a recorded operation without writing anything
    Verify {
        /// Recorded operation (JSON)
        operation: PathBuf,
        /// Snippet manifest listing the descriptors to check (JSON)
        manifest: PathBuf,
    },

    /// Verify and write every snippet in the manifest
    Document {
        /// Recorded operation (JSON)
        operation: PathBuf,
        /// Snippet manifest listing the descriptors to document (JSON)
        manifest: PathBuf,
    },

    /// List the built-in snippet templates
    Templates,
}
