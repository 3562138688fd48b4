//! # Serializer Errors
//!
//! Errors are split by *when* they can happen:
//!
//! - [`ConfigError`] surfaces while serializer definitions and registries are being built.
//!   These indicate a programming mistake and should fail loudly at startup.
//! - [`SerializeError`] surfaces while a collection is being serialized. A single failing
//!   item aborts the whole call; no partial documents are produced.

use crate::framework::resource::TypeTag;

/// Boxed error returned by user-supplied extractor closures.
pub type ExtractorError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while configuring serializer definitions and class registries.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// The type tag already has a serializer in this registry.
    #[error("Serializer already registered for type: {0}")]
    DuplicateRegistration(TypeTag),

    /// The registry already has a default serializer.
    #[error("Default serializer already registered")]
    DuplicateDefault,

    /// The same attribute name was declared twice on one serializer.
    #[error("Attribute `{attribute}` declared twice on {serializer}")]
    DuplicateAttribute { serializer: String, attribute: String },

    /// The resource type name resolved to an empty string.
    #[error("Empty resource type name for serializer: {0}")]
    EmptyTypeName(String),

    /// An option value could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidOption { key: String, value: String },
}

/// Errors raised while serializing items.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// The default extractor found no property with this name on the item.
    #[error("Attribute `{attribute}` not found on {type_tag}")]
    AttributeExtraction { attribute: String, type_tag: TypeTag },

    /// A custom extractor failed. The original error is passed through untouched.
    #[error(transparent)]
    Extractor(ExtractorError),

    /// A worker task of a concurrent assembly did not complete.
    #[error("Serialization worker failed: {0}")]
    Join(String),

    /// The assembled document could not be rendered as JSON.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tokio::task::JoinError> for SerializeError {
    fn from(err: tokio::task::JoinError) -> Self {
        SerializeError::Join(err.to_string())
    }
}
