//! Snippet error types.

use std::path::PathBuf;

use thiserror::Error;

use super::verifier::VerificationFailure;
use crate::template::TemplateError;

/// Errors raised while documenting an operation.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// Documented and observed items disagree.
    #[error(transparent)]
    Verification(#[from] VerificationFailure),

    /// Path parameters were requested for an operation recorded without a
    /// URL template.
    #[error("URL template not found for operation '{operation}'")]
    UrlTemplateMissing { operation: String },

    /// The operation name cannot be turned into an output directory.
    #[error("Invalid operation name '{0}'")]
    InvalidOperationName(String),

    /// Rendering the snippet template failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Writing the rendered snippet failed.
    #[error("Failed to write snippet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnippetError {
    /// The verification failure, if this error is one.
    pub const fn as_verification(&self) -> Option<&VerificationFailure> {
        match self {
            Self::Verification(failure) => Some(failure),
            _ => None,
        }
    }
}
