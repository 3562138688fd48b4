//! Serializer resolution and attribute-extraction engine.
//!
//! This module turns a heterogeneous collection into ordered `{id, type, attributes}`
//! records, choosing each item's serializer at the moment of conversion.
//!
//! # Main Components
//!
//! - [`AttributeDefinition`] - A named extraction rule
//! - [`SerializerDefinition`] - Attributes, resource type name and optional parent
//! - [`ClassRegistry`] - Type tag to serializer table with an optional default
//! - [`resolve`] - Exact match, then default, then the collection's own definition
//! - [`extract`] - Effective attribute list applied to one item
//! - [`build`] / [`assemble`] - One record per item, in input order
//! - [`CollectionSerializer`] - Owner of a registry and its fallback definition
//! - [`ConfigError`] / [`SerializeError`] - Configuration and serialization failures
//!
//! # Testing
//!
//! See [`mock`] for an ad-hoc [`Resource`] implementation.

pub mod attribute;
pub mod collection;
pub mod definition;
pub mod document;
pub mod error;
pub mod extractor;
pub mod mock;
pub mod naming;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod resource;

pub use attribute::{AttributeDefinition, ConditionFn, ExtractorFn};
pub use collection::{serialize_collection, CollectionSerializer};
pub use definition::{IdFn, IdSource, SerializerBuilder, SerializerDefinition};
pub use document::{assemble, assemble_concurrent, Data, Document};
pub use error::{ConfigError, ExtractorError, SerializeError};
pub use extractor::extract;
pub use naming::{infer_type_name, KeyTransform};
pub use record::{build, ResourceRecord};
pub use registry::{ClassRegistry, ClassRegistryBuilder};
pub use resolver::{resolve, resolve_with_tier, Resolution};
pub use resource::{Resource, TypeTag};
