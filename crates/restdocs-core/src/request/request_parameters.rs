//! The `request-parameters` snippet.
//!
//! Request parameters are sent as part of the query string or as
//! URL-encoded form data.

use std::collections::BTreeSet;

use serde_json::Value;

use super::ParameterDescriptor;
use crate::operation::Operation;
use crate::snippet::{
    Attributes, DescriptorTable, Discrepancies, NamedItemVerifier, Snippet, SnippetError,
    describe_discrepancies,
};

const TEMPLATE: &str = "request-parameters";

/// The names of the parameters present in the operation's request.
pub fn extract_request_parameters(operation: &Operation) -> Result<BTreeSet<String>, SnippetError> {
    Ok(operation.request.parameters.names())
}

/// Failure message for undocumented or missing request parameters.
pub fn request_parameters_failure(discrepancies: &Discrepancies) -> String {
    describe_discrepancies("Request parameters", "the request", discrepancies)
}

/// Documents the request parameters supported by a resource.
#[derive(Debug, Clone)]
pub struct RequestParametersSnippet {
    table: DescriptorTable<ParameterDescriptor>,
    verifier: NamedItemVerifier,
}

impl RequestParametersSnippet {
    pub fn new(
        descriptors: impl IntoIterator<Item = ParameterDescriptor>,
        attributes: Attributes,
    ) -> Self {
        Self {
            table: DescriptorTable::new(descriptors, attributes),
            verifier: NamedItemVerifier::from_fns(
                extract_request_parameters,
                request_parameters_failure,
            ),
        }
    }

    /// Like [`new`](Self::new), but parameters the request carries without a
    /// descriptor are not reported.
    pub fn relaxed(
        descriptors: impl IntoIterator<Item = ParameterDescriptor>,
        attributes: Attributes,
    ) -> Self {
        let mut snippet = Self::new(descriptors, attributes);
        snippet.verifier = snippet.verifier.relaxed();
        snippet
    }

    /// A new snippet documenting these parameters and `additional` ones.
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

    pub fn is_relaxed(&self) -> bool {
        self.verifier.is_relaxed()
    }
}

impl Snippet for RequestParametersSnippet {
    fn name(&self) -> &'static str {
        TEMPLATE
    }

    fn create_model(&self, operation: &Operation) -> Result<Value, SnippetError> {
        self.verifier.verify(operation, &self.table.expected_names())?;
        Ok(Value::Object(self.table.model("parameters")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationRequest;
    use crate::request::parameter_with_name;
    use serde_json::json;

    fn operation(params: &[&str]) -> Operation {
        let mut request = OperationRequest::new("GET", "/users");
        for name in params {
            request = request.with_parameter(*name, "1");
        }
        Operation::new("list-users", request)
    }

    fn message(result: Result<Value, SnippetError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_undocumented_parameter() {
        let snippet =
            RequestParametersSnippet::new([parameter_with_name("page")], Attributes::new());
        assert_eq!(
            message(snippet.create_model(&operation(&["page", "size"]))),
            "Request parameters with the following names were not documented: [size]"
        );
    }

    #[test]
    fn test_missing_parameter() {
        let snippet = RequestParametersSnippet::new(
            [parameter_with_name("page"), parameter_with_name("size")],
            Attributes::new(),
        );
        assert_eq!(
            message(snippet.create_model(&operation(&["page"]))),
            "Request parameters with the following names were not found in the request: [size]"
        );
    }

    #[test]
    fn test_undocumented_and_missing() {
        let snippet = RequestParametersSnippet::new([parameter_with_name("a")], Attributes::new());
        assert_eq!(
            message(snippet.create_model(&operation(&["b"]))),
            "Request parameters with the following names were not documented: [b]. \
             Request parameters with the following names were not found in the request: [a]"
        );
    }

    #[test]
    fn test_model_rows() {
        let snippet = RequestParametersSnippet::new(
            [
                parameter_with_name("page").description("The page to retrieve"),
                parameter_with_name("per_page").description("Entries per page"),
            ],
            Attributes::new(),
        );
        let model = snippet.create_model(&operation(&["page", "per_page"])).unwrap();
        assert_eq!(
            model,
            json!({
                "parameters": [
                    { "name": "page", "description": "The page to retrieve", "optional": false },
                    { "name": "per_page", "description": "Entries per page", "optional": false },
                ]
            })
        );
    }

    #[test]
    fn test_optional_parameter_may_be_absent() {
        let snippet = RequestParametersSnippet::new(
            [parameter_with_name("page"), parameter_with_name("size").optional()],
            Attributes::new(),
        );
        assert!(snippet.verify(&operation(&["page"])).is_ok());
    }

    #[test]
    fn test_ignored_parameter_is_documented_without_row() {
        let snippet = RequestParametersSnippet::new(
            [parameter_with_name("page"), parameter_with_name("_csrf").ignored()],
            Attributes::new(),
        );
        let model = snippet.create_model(&operation(&["page", "_csrf"])).unwrap();
        assert_eq!(model["parameters"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_relaxed_allows_undocumented() {
        let snippet =
            RequestParametersSnippet::relaxed([parameter_with_name("page")], Attributes::new());
        assert!(snippet.is_relaxed());
        assert!(snippet.verify(&operation(&["page", "size"])).is_ok());
    }

    #[test]
    fn test_and_adds_descriptors() {
        let base = RequestParametersSnippet::new([parameter_with_name("page")], Attributes::new());
        let extended = base.and([parameter_with_name("size")]);
        assert!(base.verify(&operation(&["page", "size"])).is_err());
        assert!(extended.verify(&operation(&["page", "size"])).is_ok());
        assert_eq!(extended.descriptors().len(), 2);
    }

    #[test]
    fn test_snippet_attributes_in_model() {
        let mut attributes = Attributes::new();
        attributes.insert("title".into(), json!("Pagination"));
        let snippet = RequestParametersSnippet::new([parameter_with_name("page")], attributes);
        let model = snippet.create_model(&operation(&["page"])).unwrap();
        assert_eq!(model["title"], json!("Pagination"));
    }
}
