//! Documenting request and response headers.
//!
//! Requests and responses routinely carry headers nobody wants to document
//! (`Host`, `Content-Length`, ...), so header snippets only report documented
//! headers that are missing. Names are compared case-insensitively.

mod descriptor;

use std::collections::BTreeSet;

use serde_json::Value;

use crate::operation::Operation;
use crate::snippet::{
    Attributes, DescriptorTable, Discrepancies, NameMatching, NamedItemVerifier, Snippet,
    SnippetError, describe_discrepancies,
};

pub use descriptor::HeaderDescriptor;

pub fn extract_request_headers(operation: &Operation) -> Result<BTreeSet<String>, SnippetError> {
    Ok(operation.request.headers.names())
}

pub fn extract_response_headers(operation: &Operation) -> Result<BTreeSet<String>, SnippetError> {
    Ok(operation.response.headers.names())
}

pub fn request_headers_failure(discrepancies: &Discrepancies) -> String {
    describe_discrepancies("Headers", "the request", discrepancies)
}

pub fn response_headers_failure(discrepancies: &Discrepancies) -> String {
    describe_discrepancies("Headers", "the response", discrepancies)
}

/// Documents the headers of a request or a response.
#[derive(Debug, Clone)]
pub struct HeadersSnippet {
    template: &'static str,
    table: DescriptorTable<HeaderDescriptor>,
    verifier: NamedItemVerifier,
}

impl HeadersSnippet {
    fn with_verifier(
        template: &'static str,
        verifier: NamedItemVerifier,
        descriptors: impl IntoIterator<Item = HeaderDescriptor>,
        attributes: Attributes,
    ) -> Self {
        Self {
            template,
            table: DescriptorTable::new(descriptors, attributes),
            verifier: verifier
                .relaxed()
                .with_matching(NameMatching::CaseInsensitive),
        }
    }

    /// The `request-headers` snippet.
    pub fn request(
        descriptors: impl IntoIterator<Item = HeaderDescriptor>,
        attributes: Attributes,
    ) -> Self {
        Self::with_verifier(
            "request-headers",
            NamedItemVerifier::from_fns(extract_request_headers, request_headers_failure),
            descriptors,
            attributes,
        )
    }

    /// The `response-headers` snippet.
    pub fn response(
        descriptors: impl IntoIterator<Item = HeaderDescriptor>,
        attributes: Attributes,
    ) -> Self {
        Self::with_verifier(
            "response-headers",
            NamedItemVerifier::from_fns(extract_response_headers, response_headers_failure),
            descriptors,
            attributes,
        )
    }

    #[must_use]
    pub fn and(&self, additional: impl IntoIterator<Item = HeaderDescriptor>) -> Self {
        Self {
            template: self.template,
            table: self.table.extended(additional),
            verifier: self.verifier.clone(),
        }
    }

    pub fn descriptors(&self) -> &[HeaderDescriptor] {
        self.table.descriptors()
    }
}

impl Snippet for HeadersSnippet {
    fn name(&self) -> &'static str {
        self.template
    }

    fn create_model(&self, operation: &Operation) -> Result<Value, SnippetError> {
        self.verifier.verify(operation, &self.table.expected_names())?;
        Ok(Value::Object(self.table.model("headers")))
    }
}

/// Start describing the header named `name`.
pub fn header_with_name(name: impl Into<String>) -> HeaderDescriptor {
    HeaderDescriptor::new(name)
}

pub fn request_headers(descriptors: impl IntoIterator<Item = HeaderDescriptor>) -> HeadersSnippet {
    HeadersSnippet::request(descriptors, Attributes::new())
}

pub fn request_headers_with_attributes(
    attributes: Attributes,
    descriptors: impl IntoIterator<Item = HeaderDescriptor>,
) -> HeadersSnippet {
    HeadersSnippet::request(descriptors, attributes)
}

pub fn response_headers(descriptors: impl IntoIterator<Item = HeaderDescriptor>) -> HeadersSnippet {
    HeadersSnippet::response(descriptors, Attributes::new())
}

pub fn response_headers_with_attributes(
    attributes: Attributes,
    descriptors: impl IntoIterator<Item = HeaderDescriptor>,
) -> HeadersSnippet {
    HeadersSnippet::response(descriptors, attributes)
}
