//! `restdocs verify`: check every snippet of a manifest without writing.

use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::manifest::{load_manifest, load_operation};

/// Outcome of verifying one snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetCheck {
    pub snippet: &'static str,
    pub error: Option<String>,
}

/// Verify every snippet and collect the outcomes.
///
/// Unlike [`execute`], a failing snippet does not stop the remaining ones.
pub fn check(ctx: &CliContext, operation: &Path, manifest: &Path) -> Result<Vec<SnippetCheck>> {
    let operation = load_operation(operation)?;
    let manifest = load_manifest(manifest)?;

    let checks = manifest
        .snippets(ctx.settings.effective_relaxed())
        .iter()
        .map(|snippet| SnippetCheck {
            snippet: snippet.name(),
            error: snippet.verify(&operation).err().map(|err| err.to_string()),
        })
        .collect();
    Ok(checks)
}

/// Execute the verify command.
pub fn execute(ctx: &CliContext, operation: &Path, manifest: &Path) -> Result<()> {
    let checks = check(ctx, operation, manifest)?;

    if checks.is_empty() {
        println!("Manifest {} documents no snippets", manifest.display());
        return Ok(());
    }

    for check in &checks {
        match &check.error {
            None => println!("✓ {}", check.snippet),
            Some(error) => println!("✗ {}: {error}", check.snippet),
        }
    }

    let failed = checks.iter().filter(|check| check.error.is_some()).count();
    if failed > 0 {
        return Err(CliError::Verification(format!(
            "{failed} of {} snippets failed verification",
            checks.len()
        ))
        .into());
    }
    Ok(())
}
