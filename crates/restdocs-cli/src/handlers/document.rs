//! `restdocs document`: verify and write every snippet of a manifest.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::manifest::{load_manifest, load_operation};

/// Write every snippet, stopping at the first failure. Returns the written paths.
pub fn write_all(ctx: &CliContext, operation: &Path, manifest: &Path) -> Result<Vec<PathBuf>> {
    let operation = load_operation(operation)?;
    let manifest = load_manifest(manifest)?;

    let mut written = Vec::new();
    for snippet in manifest.snippets(ctx.settings.effective_relaxed()) {
        let path = snippet
            .document(&operation, &ctx.snippets)
            .map_err(CliError::from)
            .with_context(|| {
                format!(
                    "Failed to document {} for operation '{}'",
                    snippet.name(),
                    operation.name
                )
            })?;
        tracing::info!(snippet = snippet.name(), path = %path.display(), "Documented snippet");
        written.push(path);
    }
    Ok(written)
}

/// Execute the document command.
pub fn execute(ctx: &CliContext, operation: &Path, manifest: &Path) -> Result<()> {
    let written = write_all(ctx, operation, manifest)?;
    if written.is_empty() {
        println!("Manifest {} documents no snippets", manifest.display());
    }
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
