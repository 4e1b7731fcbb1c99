//! The `path-parameters` snippet.
//!
//! Path parameters are the `{name}` placeholders of the URL template the
//! request was built from, so the operation must carry its template.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::ParameterDescriptor;
use crate::operation::Operation;
use crate::snippet::{
    Attributes, DescriptorTable, Discrepancies, NamedItemVerifier, Snippet, SnippetError,
    describe_discrepancies,
};

const TEMPLATE: &str = "path-parameters";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^/]+?)\}").expect("placeholder pattern is valid"));

fn url_template(operation: &Operation) -> Result<&str, SnippetError> {
    operation
        .url_template
        .as_deref()
        .ok_or_else(|| SnippetError::UrlTemplateMissing {
            operation: operation.name.clone(),
        })
}

/// The template with any query string removed.
fn template_path(template: &str) -> &str {
    template.split_once('?').map_or(template, |(path, _)| path)
}

/// Placeholder names of a URL template.
///
/// A placeholder of the form `{name:pattern}` contributes `name`. Blank
/// placeholders such as `{ }` or `{:pattern}` contribute nothing.
///
/// ```rust
/// use restdocs_core::request::placeholder_names;
///
/// let names = placeholder_names("/users/{id}/posts/{post:\\d+}");
/// assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["id", "post"]);
/// ```
pub fn placeholder_names(template: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(template_path(template))
        .filter_map(|captures| captures.get(1))
        .map(|placeholder| {
            let placeholder = placeholder.as_str();
            placeholder
                .split_once(':')
                .map_or(placeholder, |(name, _)| name)
                .trim()
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// The names of the path parameters in the operation's URL template.
pub fn extract_path_parameters(operation: &Operation) -> Result<BTreeSet<String>, SnippetError> {
    url_template(operation).map(placeholder_names)
}

/// Failure message for undocumented or missing path parameters.
pub fn path_parameters_failure(discrepancies: &Discrepancies) -> String {
    describe_discrepancies("Path parameters", "the request", discrepancies)
}

/// Documents the path parameters supported by a resource.
#[derive(Debug, Clone)]
pub struct PathParametersSnippet {
    table: DescriptorTable<ParameterDescriptor>,
    verifier: NamedItemVerifier,
}

impl PathParametersSnippet {
    pub fn new(
        descriptors: impl IntoIterator<Item = ParameterDescriptor>,
        attributes: Attributes,
    ) -> Self {
        Self {
            table: DescriptorTable::new(descriptors, attributes),
            verifier: NamedItemVerifier::from_fns(extract_path_parameters, path_parameters_failure),
        }
    }

    /// Like [`new`](Self::new), but undocumented placeholders are not reported.
    pub fn relaxed(
        descriptors: impl IntoIterator<Item = ParameterDescriptor>,
        attributes: Attributes,
    ) -> Self {
        let mut snippet = Self::new(descriptors, attributes);
        snippet.verifier = snippet.verifier.relaxed();
        snippet
    }

    #[must_use]
    pub fn and(&self, additional: impl IntoIterator<Item = ParameterDescriptor>) -> Self {
        Self {
            table: self.table.extended(additional),
            verifier: self.verifier.clone(),
        }
    }

    pub fn descriptors(&self) -> &[ParameterDescriptor] {
        self.table.descriptors()
    }
}

impl Snippet for PathParametersSnippet {
    fn name(&self) -> &'static str {
        TEMPLATE
    }

    fn create_model(&self, operation: &Operation) -> Result<Value, SnippetError> {
        self.verifier.verify(operation, &self.table.expected_names())?;
        let mut model = self.table.model("parameters");
        let path = template_path(url_template(operation)?);
        model.insert("path".to_string(), Value::String(path.to_string()));
        Ok(Value::Object(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationRequest;
    use crate::request::parameter_with_name;

    fn operation(template: Option<&str>) -> Operation {
        let operation =
            Operation::new("get-post", OperationRequest::new("GET", "/users/1/posts/2"));
        match template {
            Some(template) => operation.with_url_template(template),
            None => operation,
        }
    }

    #[test]
    fn test_placeholder_names() {
        let names = placeholder_names("/users/{id}/posts/{post:\\d+}?expand={expand}");
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["id", "post"]);
        assert!(placeholder_names("/health").is_empty());
    }

    #[test]
    fn test_blank_placeholders_are_skipped() {
        assert!(placeholder_names("/a/{ }/{:x}").is_empty());

        let snippet = PathParametersSnippet::new([parameter_with_name("id")], Attributes::new());
        assert!(snippet.verify(&operation(Some("/users/{id}/{ }"))).is_ok());
    }

    #[test]
    fn test_documented_placeholders_pass() {
        let snippet = PathParametersSnippet::new(
            [parameter_with_name("id"), parameter_with_name("post")],
            Attributes::new(),
        );
        let model = snippet
            .create_model(&operation(Some("/users/{id}/posts/{post}?draft=true")))
            .unwrap();
        assert_eq!(model["path"], "/users/{id}/posts/{post}");
        assert_eq!(model["parameters"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_undocumented_placeholder() {
        let snippet = PathParametersSnippet::new([parameter_with_name("id")], Attributes::new());
        let err = snippet
            .create_model(&operation(Some("/users/{id}/posts/{post}")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Path parameters with the following names were not documented: [post]"
        );
    }

    #[test]
    fn test_missing_placeholder() {
        let snippet = PathParametersSnippet::new(
            [parameter_with_name("id"), parameter_with_name("slug")],
            Attributes::new(),
        );
        let err = snippet.verify(&operation(Some("/users/{id}"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Path parameters with the following names were not found in the request: [slug]"
        );
    }

    #[test]
    fn test_missing_url_template() {
        let snippet = PathParametersSnippet::new([parameter_with_name("id")], Attributes::new());
        let err = snippet.verify(&operation(None)).unwrap_err();
        assert!(matches!(
            err,
            SnippetError::UrlTemplateMissing { ref operation } if operation == "get-post"
        ));
    }

    #[test]
    fn test_relaxed_allows_undocumented_placeholder() {
        let snippet =
            PathParametersSnippet::relaxed([parameter_with_name("id")], Attributes::new());
        assert!(snippet.verify(&operation(Some("/users/{id}/posts/{post}"))).is_ok());
    }
}
