//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Load the input files
//!   2. Call into `restdocs-core`
//!   3. Format output for the terminal

pub mod document;
pub mod templates;
pub mod verify;
