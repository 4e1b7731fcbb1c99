//! Recorded HTTP operations.
//!
//! An [`Operation`] is one request/response exchange captured while a test
//! ran. Snippets read from it but never modify it.

mod headers;
mod parameters;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::snippet::Attributes;

pub use headers::Headers;
pub use parameters::Parameters;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A recorded request/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Name of the operation; snippets are written to a directory of this name.
    pub name: String,

    /// The recorded request.
    pub request: OperationRequest,

    /// The recorded response.
    #[serde(default)]
    pub response: OperationResponse,

    /// Templated path the request was built from (e.g. `/users/{id}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_template: Option<String>,

    /// Free-form attributes attached by the recording harness.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Operation {
    /// Create an operation with an empty `200` response.
    pub fn new(name: impl Into<String>, request: OperationRequest) -> Self {
        Self {
            name: name.into(),
            request,
            response: OperationResponse::default(),
            url_template: None,
            attributes: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_response(mut self, response: OperationResponse) -> Self {
        self.response = response;
        self
    }

    #[must_use]
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// The request half of an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(default = "default_method")]
    pub method: String,

    pub uri: String,

    #[serde(default)]
    pub headers: Headers,

    /// Query string and form parameters.
    #[serde(default)]
    pub parameters: Parameters,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl OperationRequest {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: Headers::new(),
            parameters: Parameters::new(),
            content: None,
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.add(name, value);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The query string of the URI, without the leading `?` or any fragment.
    pub fn query(&self) -> Option<&str> {
        let (_, rest) = self.uri.split_once('?')?;
        let query = rest.split_once('#').map_or(rest, |(query, _)| query);
        Some(query)
    }

    /// Whether the body is URL-encoded form data.
    pub fn is_form_submission(&self) -> bool {
        !self.method.eq_ignore_ascii_case("GET")
            && self
                .headers
                .content_type()
                .is_some_and(|ct| ct.to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE))
    }

    /// Fill `parameters` from the query string and form body.
    ///
    /// Does nothing when parameters were recorded explicitly. Returns `true`
    /// if parameters were derived.
    pub fn populate_parameters(&mut self) -> bool {
        if !self.parameters.is_empty() {
            return false;
        }
        let mut derived = self
            .query()
            .map(Parameters::from_query_string)
            .unwrap_or_default();
        if self.is_form_submission() {
            if let Some(body) = &self.content {
                derived.extend_from_urlencoded(body);
            }
        }
        if derived.is_empty() {
            return false;
        }
        tracing::debug!(uri = %self.uri, count = derived.len(), "Derived request parameters");
        self.parameters = derived;
        true
    }
}

/// The response half of an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResponse {
    #[serde(default = "default_status")]
    pub status: u16,

    #[serde(default)]
    pub headers: Headers,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

const fn default_status() -> u16 {
    200
}

impl Default for OperationResponse {
    fn default() -> Self {
        Self {
            status: default_status(),
            headers: Headers::new(),
            content: None,
        }
    }
}

impl OperationResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }
}
