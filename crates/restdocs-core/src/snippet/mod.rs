//! Snippets: verified, rendered documentation fragments.
//!
//! A [`Snippet`] turns an [`Operation`] into a template model, verifying on
//! the way that what the caller documented matches what the operation
//! contains. [`Snippet::document`] then renders the model through the
//! context's [`TemplateEngine`] and writes the result with its
//! [`SnippetWriter`].

mod error;
mod table;
mod verifier;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::operation::Operation;
use crate::settings::Settings;
use crate::template::{BuiltinTemplates, TemplateEngine};
use crate::writer::SnippetWriter;

pub use error::SnippetError;
pub use table::{DescriptorTable, DocumentedItem};
pub use verifier::{
    DescribeFailure, Discrepancies, ExpectedNames, ExtractNames, NameMatching, NamedItemVerifier,
    VerificationFailure, describe_discrepancies, format_names,
};

/// Extra values merged into a template model.
pub type Attributes = BTreeMap<String, Value>;

/// A documentation fragment produced from an operation.
pub trait Snippet: Send + Sync {
    /// Template identifier, also used as the output file stem.
    fn name(&self) -> &'static str;

    /// Verify `operation` and build the template model.
    fn create_model(&self, operation: &Operation) -> Result<Value, SnippetError>;

    /// Verify without rendering.
    fn verify(&self, operation: &Operation) -> Result<(), SnippetError> {
        self.create_model(operation).map(|_| ())
    }

    /// Verify, render and write the snippet. Returns the written path.
    fn document(
        &self,
        operation: &Operation,
        context: &SnippetContext,
    ) -> Result<PathBuf, SnippetError> {
        let model = self.create_model(operation)?;
        let rendered = context.engine().render(self.name(), &model)?;
        context.writer().write(&operation.name, self.name(), &rendered)
    }
}

/// Collaborators a snippet needs to render and write itself.
#[derive(Clone)]
pub struct SnippetContext {
    engine: Arc<dyn TemplateEngine>,
    writer: SnippetWriter,
}

impl SnippetContext {
    pub fn new(engine: Arc<dyn TemplateEngine>, writer: SnippetWriter) -> Self {
        Self { engine, writer }
    }

    /// Built-in templates and a writer configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let format = settings.effective_format();
        Self::new(
            Arc::new(BuiltinTemplates::new(format)),
            SnippetWriter::new(settings.effective_output_dir(), format),
        )
    }

    pub fn engine(&self) -> &dyn TemplateEngine {
        self.engine.as_ref()
    }

    pub const fn writer(&self) -> &SnippetWriter {
        &self.writer
    }
}

impl std::fmt::Debug for SnippetContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetContext")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationRequest;
    use crate::request::{parameter_with_name, request_parameters};
    use crate::template::{MockTemplateEngine, TemplateError, TemplateFormat};
    use mockall::predicate::eq;
    use serde_json::json;
    use tempfile::tempdir;

    fn operation() -> Operation {
        Operation::new(
            "users/list",
            OperationRequest::new("GET", "/users?page=1").with_parameter("page", "1"),
        )
    }

    #[test]
    fn test_document_renders_and_writes() {
        let dir = tempdir().unwrap();
        let mut engine = MockTemplateEngine::new();
        engine
            .expect_render()
            .with(
                eq("request-parameters"),
                eq(json!({
                    "parameters": [ { "name": "page", "description": "Page", "optional": false } ]
                })),
            )
            .times(1)
            .returning(|_, _| Ok("rendered".to_string()));

        let context = SnippetContext::new(
            Arc::new(engine),
            SnippetWriter::new(dir.path(), TemplateFormat::Markdown),
        );
        let snippet = request_parameters([parameter_with_name("page").description("Page")]);
        let path = snippet.document(&operation(), &context).unwrap();

        assert_eq!(path, dir.path().join("users/list/request-parameters.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "rendered");
    }

    #[test]
    fn test_failed_verification_skips_rendering() {
        let dir = tempdir().unwrap();
        let mut engine = MockTemplateEngine::new();
        engine.expect_render().times(0);

        let context = SnippetContext::new(
            Arc::new(engine),
            SnippetWriter::new(dir.path(), TemplateFormat::Asciidoctor),
        );
        let snippet = request_parameters([parameter_with_name("size")]);
        let err = snippet.document(&operation(), &context).unwrap_err();

        assert!(err.as_verification().is_some());
        assert!(!dir.path().join("users").exists());
    }

    #[test]
    fn test_template_errors_propagate() {
        let dir = tempdir().unwrap();
        let mut engine = MockTemplateEngine::new();
        engine
            .expect_render()
            .returning(|name, _| Err(TemplateError::NotFound(name.to_string())));

        let context = SnippetContext::new(
            Arc::new(engine),
            SnippetWriter::new(dir.path(), TemplateFormat::Asciidoctor),
        );
        let snippet = request_parameters([parameter_with_name("page")]);
        let err = snippet.document(&operation(), &context).unwrap_err();
        assert!(matches!(err, SnippetError::Template(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_context_from_settings() {
        let settings = Settings {
            format: Some(TemplateFormat::Markdown),
            ..Settings::with_defaults()
        };
        let context = SnippetContext::from_settings(&settings);
        let path = context.writer().resolve("op", "request-headers").unwrap();
        assert!(path.ends_with("op/request-headers.md"));
    }
}
