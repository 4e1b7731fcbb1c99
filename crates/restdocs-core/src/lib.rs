//! Documentation snippets verified against recorded HTTP operations.
//!
//! A test records an [`Operation`], then documents it with snippets such as
//! [`request_parameters`]. Each snippet checks that the documented names
//! match what the operation actually carried before it renders anything, so
//! documentation cannot silently drift from the API it describes.
//!
//! Crate layout:
//!
//! - [`operation`]: the recorded request/response model
//! - [`snippet`]: the [`Snippet`] trait and the generic [`NamedItemVerifier`]
//! - [`request`], [`headers`]: concrete snippets and descriptor builders
//! - [`template`]: the rendering port and built-in tables
//! - [`writer`], [`settings`]: output location and configuration
#![deny(unused_crate_dependencies)]

pub mod headers;
pub mod operation;
pub mod request;
pub mod settings;
pub mod snippet;
pub mod template;
pub mod writer;

// Re-export commonly used types for convenience
pub use headers::{
    HeaderDescriptor, HeadersSnippet, header_with_name, request_headers,
    request_headers_with_attributes, response_headers, response_headers_with_attributes,
};
pub use operation::{Headers, Operation, OperationRequest, OperationResponse, Parameters};
pub use request::{
    ParameterDescriptor, PathParametersSnippet, RequestParametersSnippet, parameter_with_name,
    path_parameters, path_parameters_with_attributes, relaxed_path_parameters,
    relaxed_path_parameters_with_attributes, relaxed_request_parameters,
    relaxed_request_parameters_with_attributes, request_parameters,
    request_parameters_with_attributes,
};
pub use settings::{DEFAULT_OUTPUT_DIR, Settings, SettingsError, SettingsUpdate, validate_settings};
pub use snippet::{
    Attributes, Discrepancies, NamedItemVerifier, Snippet, SnippetContext, SnippetError,
    VerificationFailure,
};
pub use template::{BuiltinTemplates, TEMPLATE_NAMES, TemplateEngine, TemplateError, TemplateFormat};
pub use writer::SnippetWriter;
