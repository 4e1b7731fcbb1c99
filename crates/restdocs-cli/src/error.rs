//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use restdocs_core::{SettingsError, SnippetError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Documented and observed names disagree.
    #[error("{0}")]
    Verification(String),

    /// Snippet could not be produced for a reason other than verification.
    #[error("{0}")]
    Snippet(String),

    /// An input file is not valid JSON of the expected shape.
    #[error("Invalid input: {0}")]
    Input(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Verification or snippet failure
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Verification(_) | Self::Snippet(_) => 1,
            Self::Input(_) => 65,  // EX_DATAERR
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<SnippetError> for CliError {
    fn from(err: SnippetError) -> Self {
        match err {
            SnippetError::Verification(failure) => Self::Verification(failure.message),
            SnippetError::Io { .. } => Self::Io(err.to_string()),
            other => Self::Snippet(other.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restdocs_core::VerificationFailure;
    use std::collections::BTreeSet;

    #[test]
    fn test_verification_maps_to_exit_one() {
        let failure = VerificationFailure {
            message: "Request parameters with the following names were not documented: [size]"
                .to_string(),
            undocumented: BTreeSet::from(["size".to_string()]),
            missing: BTreeSet::new(),
        };
        let err = CliError::from(SnippetError::Verification(failure));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().ends_with("[size]"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Input(String::new()).exit_code(), 65);
        assert_eq!(CliError::Io(String::new()).exit_code(), 74);
        assert_eq!(CliError::from(SettingsError::EmptyOutputDir).exit_code(), 78);
    }

    #[test]
    fn test_missing_url_template_is_snippet_error() {
        let err = CliError::from(SnippetError::UrlTemplateMissing {
            operation: "get-user".to_string(),
        });
        assert!(matches!(err, CliError::Snippet(ref msg) if msg.contains("get-user")));
    }
}
