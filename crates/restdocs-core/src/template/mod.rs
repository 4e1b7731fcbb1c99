//! Template port and the built-in snippet templates.
//!
//! Snippets hand a JSON model to a [`TemplateEngine`] together with their
//! template identifier. The crate ships [`BuiltinTemplates`], which renders
//! every snippet this crate defines as a table in either Asciidoctor or
//! Markdown.

mod builtin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use builtin::{BuiltinTemplates, TEMPLATE_NAMES};

/// Errors raised while rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Invalid model for template '{template}': {reason}")]
    InvalidModel { template: String, reason: String },
}

/// Port for rendering a snippet model.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateEngine: Send + Sync {
    /// Render the template named `template` with `model`.
    fn render(&self, template: &str, model: &Value) -> Result<String, TemplateError>;
}

/// Markup the built-in templates produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    #[default]
    Asciidoctor,
    Markdown,
}

impl TemplateFormat {
    /// File extension of rendered snippets.
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Asciidoctor => "adoc",
            Self::Markdown => "md",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asciidoctor => "asciidoctor",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asciidoctor" | "asciidoc" | "adoc" => Ok(Self::Asciidoctor),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(format!(
                "Unknown template format '{other}' (expected 'asciidoctor' or 'markdown')"
            )),
        }
    }
}
