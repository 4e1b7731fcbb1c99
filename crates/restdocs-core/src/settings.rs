//! Settings types and validation.
//!
//! Pure configuration values; loading them from a file is left to the
//! adapter that owns the file system layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::template::TemplateFormat;

/// Default directory snippets are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "target/generated-snippets";

/// Snippet generation settings.
///
/// All fields are optional to support partial configuration files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Root directory for generated snippets.
    pub output_dir: Option<PathBuf>,

    /// Markup of the rendered snippets.
    pub format: Option<TemplateFormat>,

    /// Tolerate undocumented request and path parameters.
    pub relaxed: Option<bool>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            output_dir: Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
            format: Some(TemplateFormat::Asciidoctor),
            relaxed: Some(false),
        }
    }

    /// Get the effective output directory (with default fallback).
    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn effective_format(&self) -> TemplateFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_relaxed(&self) -> bool {
        self.relaxed.unwrap_or(false)
    }

    /// Merge an update into these settings, only touching fields that are Some.
    pub fn merge(&mut self, update: &SettingsUpdate) {
        if let Some(ref dir) = update.output_dir {
            self.output_dir.clone_from(dir);
        }
        if let Some(format) = update.format {
            self.format = format;
        }
        if let Some(relaxed) = update.relaxed {
            self.relaxed = relaxed;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset the field to its default
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub output_dir: Option<Option<PathBuf>>,
    pub format: Option<Option<TemplateFormat>>,
    pub relaxed: Option<Option<bool>>,
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Output directory cannot be empty")]
    EmptyOutputDir,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings
        .output_dir
        .as_ref()
        .is_some_and(|dir| dir.as_os_str().to_string_lossy().trim().is_empty())
    {
        return Err(SettingsError::EmptyOutputDir);
    }

    Ok(())
}
