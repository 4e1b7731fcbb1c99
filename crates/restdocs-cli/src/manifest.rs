//! Snippet manifests and recorded operation files.
//!
//! A manifest lists, per snippet, the descriptors to check for one
//! operation. A section that is absent is skipped; a section that is present
//! but empty documents "no items", so any observed item is undocumented.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use restdocs_core::{
    Attributes, HeaderDescriptor, HeadersSnippet, Operation, ParameterDescriptor,
    PathParametersSnippet, RequestParametersSnippet, Snippet,
};

use crate::error::CliError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetManifest {
    pub request_parameters: Option<Vec<ParameterDescriptor>>,
    pub path_parameters: Option<Vec<ParameterDescriptor>>,
    pub request_headers: Option<Vec<HeaderDescriptor>>,
    pub response_headers: Option<Vec<HeaderDescriptor>>,
    /// Attributes added to every snippet's template model.
    pub attributes: Attributes,
}

impl SnippetManifest {
    /// Build the snippets this manifest describes, in a fixed order.
    pub fn snippets(&self, relaxed: bool) -> Vec<Box<dyn Snippet>> {
        let mut snippets: Vec<Box<dyn Snippet>> = Vec::new();
        let attributes = || self.attributes.clone();

        if let Some(descriptors) = &self.request_parameters {
            let descriptors = descriptors.iter().cloned();
            snippets.push(Box::new(if relaxed {
                RequestParametersSnippet::relaxed(descriptors, attributes())
            } else {
                RequestParametersSnippet::new(descriptors, attributes())
            }));
        }
        if let Some(descriptors) = &self.path_parameters {
            let descriptors = descriptors.iter().cloned();
            snippets.push(Box::new(if relaxed {
                PathParametersSnippet::relaxed(descriptors, attributes())
            } else {
                PathParametersSnippet::new(descriptors, attributes())
            }));
        }
        if let Some(descriptors) = &self.request_headers {
            snippets.push(Box::new(HeadersSnippet::request(
                descriptors.iter().cloned(),
                attributes(),
            )));
        }
        if let Some(descriptors) = &self.response_headers {
            snippets.push(Box::new(HeadersSnippet::response(
                descriptors.iter().cloned(),
                attributes(),
            )));
        }
        snippets
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to read {what} {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to parse {what} {}", path.display()))?;
    Ok(value)
}

/// Load a manifest file.
pub fn load_manifest(path: &Path) -> Result<SnippetManifest> {
    read_json(path, "manifest")
}

/// Load a recorded operation, deriving parameters from the URI and form
/// body when none were recorded.
pub fn load_operation(path: &Path) -> Result<Operation> {
    let mut operation: Operation = read_json(path, "operation")?;
    operation.request.populate_parameters();
    Ok(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sections_become_snippets() {
        let manifest: SnippetManifest = serde_json::from_str(
            r#"{
                "request_parameters": [{"name": "page", "description": "Page"}],
                "response_headers": [{"name": "Location"}]
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = manifest.snippets(false).iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["request-parameters", "response-headers"]);
    }

    #[test]
    fn test_empty_section_is_kept() {
        let manifest: SnippetManifest = serde_json::from_str(r#"{"path_parameters": []}"#).unwrap();
        assert_eq!(manifest.snippets(false).len(), 1);
        assert!(SnippetManifest::default().snippets(false).is_empty());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = serde_json::from_str::<SnippetManifest>(r#"{"request_fields": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_operation_derives_parameters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("op.json");
        fs::write(
            &path,
            r#"{"name": "search", "request": {"method": "GET", "uri": "/books?q=rust"}}"#,
        )
        .unwrap();
        let operation = load_operation(&path).unwrap();
        assert!(operation.request.parameters.contains("q"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_manifest(Path::new("/nonexistent/manifest.json")).unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().map(CliError::exit_code), Some(74));
    }
}
