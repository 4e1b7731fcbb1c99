//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use restdocs_core::TemplateFormat;

use crate::commands::Commands;

/// Command-line interface for verifying and rendering documentation snippets.
///
/// Global options override values from the settings file.
#[derive(Parser)]
#[command(name = "restdocs")]
#[command(about = "Verify and render API documentation snippets from recorded HTTP operations")]
#[command(version)]
pub struct Cli {
    /// JSON settings file
    #[arg(long = "config", env = "RESTDOCS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory snippets are written to
    #[arg(long = "output-dir", env = "RESTDOCS_OUTPUT_DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Snippet markup: asciidoctor or markdown
    #[arg(long = "format", global = true)]
    pub format: Option<TemplateFormat>,

    /// Do not fail on undocumented request or path parameters
    #[arg(long = "relaxed", global = true)]
    pub relaxed: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
