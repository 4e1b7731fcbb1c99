//! Documenting the parameters of a request.
//!
//! Entry points for building parameter descriptors and the
//! `request-parameters` and `path-parameters` snippets.
//!
//! ```rust
//! use restdocs_core::operation::{Operation, OperationRequest};
//! use restdocs_core::request::{parameter_with_name, request_parameters};
//! use restdocs_core::snippet::Snippet;
//!
//! let operation = Operation::new(
//!     "list-users",
//!     OperationRequest::new("GET", "/users").with_parameter("page", "2"),
//! );
//! let snippet = request_parameters([
//!     parameter_with_name("page").description("The page to retrieve"),
//! ]);
//! assert!(snippet.verify(&operation).is_ok());
//! ```

mod descriptor;
mod path_parameters;
mod request_parameters;

use crate::snippet::Attributes;

pub use descriptor::ParameterDescriptor;
pub use path_parameters::{
    PathParametersSnippet, extract_path_parameters, path_parameters_failure, placeholder_names,
};
pub use request_parameters::{
    RequestParametersSnippet, extract_request_parameters, request_parameters_failure,
};

/// Start describing the parameter named `name`.
pub fn parameter_with_name(name: impl Into<String>) -> ParameterDescriptor {
    ParameterDescriptor::new(name)
}

/// Document the request's query string and form parameters.
pub fn request_parameters(
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> RequestParametersSnippet {
    RequestParametersSnippet::new(descriptors, Attributes::new())
}

/// Like [`request_parameters`], with `attributes` added to the template model.
pub fn request_parameters_with_attributes(
    attributes: Attributes,
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> RequestParametersSnippet {
    RequestParametersSnippet::new(descriptors, attributes)
}

/// Document request parameters without failing on undocumented ones.
pub fn relaxed_request_parameters(
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> RequestParametersSnippet {
    RequestParametersSnippet::relaxed(descriptors, Attributes::new())
}

pub fn relaxed_request_parameters_with_attributes(
    attributes: Attributes,
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> RequestParametersSnippet {
    RequestParametersSnippet::relaxed(descriptors, attributes)
}

/// Document the placeholders of the request's URL template.
pub fn path_parameters(
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> PathParametersSnippet {
    PathParametersSnippet::new(descriptors, Attributes::new())
}

pub fn path_parameters_with_attributes(
    attributes: Attributes,
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> PathParametersSnippet {
    PathParametersSnippet::new(descriptors, attributes)
}

/// Document path parameters without failing on undocumented placeholders.
pub fn relaxed_path_parameters(
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> PathParametersSnippet {
    PathParametersSnippet::relaxed(descriptors, Attributes::new())
}

pub fn relaxed_path_parameters_with_attributes(
    attributes: Attributes,
    descriptors: impl IntoIterator<Item = ParameterDescriptor>,
) -> PathParametersSnippet {
    PathParametersSnippet::relaxed(descriptors, attributes)
}
