//! Writing rendered snippets to disk.
//!
//! Snippets land at `<output_dir>/<operation>/<snippet>.<ext>`. Operation
//! names may contain `/` to nest output directories.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::snippet::SnippetError;
use crate::template::TemplateFormat;

/// Resolves snippet paths and writes rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetWriter {
    output_dir: PathBuf,
    format: TemplateFormat,
}

impl SnippetWriter {
    pub fn new(output_dir: impl Into<PathBuf>, format: TemplateFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Path the snippet named `snippet` of `operation` is written to.
    pub fn resolve(&self, operation: &str, snippet: &str) -> Result<PathBuf, SnippetError> {
        let relative = Path::new(operation);
        let valid = !operation.trim().is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !valid {
            return Err(SnippetError::InvalidOperationName(operation.to_string()));
        }
        Ok(self
            .output_dir
            .join(relative)
            .join(format!("{snippet}.{}", self.format.file_extension())))
    }

    /// Write `content`, creating parent directories as needed.
    pub fn write(
        &self,
        operation: &str,
        snippet: &str,
        content: &str,
    ) -> Result<PathBuf, SnippetError> {
        let path = self.resolve(operation, snippet)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SnippetError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| SnippetError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote snippet");
        Ok(path)
    }
}
