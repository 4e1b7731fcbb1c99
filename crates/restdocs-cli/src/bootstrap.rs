//! CLI bootstrap - the composition root.
//!
//! Settings are resolved here (file, then command-line overrides) and the
//! snippet context is built from them. Handlers only see [`CliContext`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use restdocs_core::{Settings, SettingsUpdate, SnippetContext, validate_settings};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Settings file to load, if any.
    pub config_path: Option<PathBuf>,
    /// Overrides applied on top of the loaded settings.
    pub overrides: SettingsUpdate,
}

impl CliConfig {
    /// Collect settings overrides from the global command-line options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            overrides: SettingsUpdate {
                output_dir: cli.output_dir.clone().map(Some),
                format: cli.format.map(Some),
                relaxed: cli.relaxed.then_some(Some(true)),
            },
        }
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug)]
pub struct CliContext {
    /// Effective settings after overrides.
    pub settings: Settings,
    /// Template engine and writer configured from `settings`.
    pub snippets: SnippetContext,
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = serde_json::from_str(&content)
        .map_err(|err| CliError::Config(err.to_string()))
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    Ok(settings)
}

/// Resolve settings and build the CLI context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let mut settings = Settings::with_defaults();
    if let Some(path) = &config.config_path {
        let loaded = load_settings(path)?;
        settings.merge(&SettingsUpdate {
            output_dir: loaded.output_dir.map(Some),
            format: loaded.format.map(Some),
            relaxed: loaded.relaxed.map(Some),
        });
    }
    settings.merge(&config.overrides);
    validate_settings(&settings).map_err(CliError::from)?;

    tracing::debug!(
        output_dir = %settings.effective_output_dir().display(),
        format = %settings.effective_format(),
        relaxed = settings.effective_relaxed(),
        "Resolved settings"
    );

    let snippets = SnippetContext::from_settings(&settings);
    Ok(CliContext { settings, snippets })
}
