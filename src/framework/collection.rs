//! # Collection Serializer
//!
//! The single serialization entry point for polymorphic lists. A
//! [`CollectionSerializer`] is itself configured as a serializer: it owns a
//! [`SerializerDefinition`] (usually attribute-less) and a [`ClassRegistry`]. Items whose
//! type has no entry and no default fall back to that own definition, so a heterogeneous
//! collection never fails just because a member type was left unmapped.
//!
//! Both halves are behind [`Arc`], so a collection serializer is cheap to clone and can be
//! shared by any number of concurrent serialization calls.

use crate::framework::definition::SerializerDefinition;
use crate::framework::document::{assemble, assemble_concurrent, Document};
use crate::framework::error::SerializeError;
use crate::framework::record::{build, ResourceRecord};
use crate::framework::registry::ClassRegistry;
use crate::framework::resource::Resource;
use std::sync::Arc;
use tracing::{info, info_span};

/// Serializes items through the three-tier resolution policy.
///
/// Equivalent to [`assemble`]; this is the entry point consumed by envelope builders.
pub fn serialize_collection<'a, R, I>(
    items: I,
    registry: &ClassRegistry,
    fallback: &SerializerDefinition,
) -> Result<Vec<ResourceRecord>, SerializeError>
where
    R: Resource + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let _span = info_span!("serialize_collection", serializer = fallback.name()).entered();
    let records = assemble(items, registry, fallback)?;
    info!(count = records.len(), "Serialized collection");
    Ok(records)
}

/// A serializer for heterogeneous collections.
#[derive(Debug, Clone)]
pub struct CollectionSerializer {
    definition: Arc<SerializerDefinition>,
    registry: Arc<ClassRegistry>,
}

impl CollectionSerializer {
    pub fn new(definition: Arc<SerializerDefinition>, registry: ClassRegistry) -> Self {
        Self {
            definition,
            registry: Arc::new(registry),
        }
    }

    /// The collection's own definition, used as the universal fallback.
    pub fn definition(&self) -> &Arc<SerializerDefinition> {
        &self.definition
    }

    pub fn registry(&self) -> &Arc<ClassRegistry> {
        &self.registry
    }

    /// One record per item, in input order.
    pub fn serialize_collection<'a, R, I>(&self, items: I) -> Result<Vec<ResourceRecord>, SerializeError>
    where
        R: Resource + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        serialize_collection(items, &self.registry, &self.definition)
    }

    /// Builds the record for a single item.
    pub fn build(&self, item: &dyn Resource) -> Result<ResourceRecord, SerializeError> {
        build(item, &self.registry, &self.definition)
    }

    /// `{"data": [...]}` for a collection.
    pub fn to_document<'a, R, I>(&self, items: I) -> Result<Document, SerializeError>
    where
        R: Resource + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        self.serialize_collection(items).map(Document::many)
    }

    /// `{"data": {...}}` for a single object.
    pub fn serialize_one(&self, item: &dyn Resource) -> Result<Document, SerializeError> {
        self.build(item).map(Document::one)
    }

    /// Serializes a collection straight to a JSON string.
    pub fn to_json<'a, R, I>(&self, items: I) -> Result<String, SerializeError>
    where
        R: Resource + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        self.to_document(items)?.to_json()
    }

    /// Like [`serialize_collection`](Self::serialize_collection), spread over `workers`
    /// blocking tasks.
    pub async fn serialize_concurrent(
        &self,
        items: Vec<Arc<dyn Resource>>,
        workers: usize,
    ) -> Result<Vec<ResourceRecord>, SerializeError> {
        let count = items.len();
        let records = assemble_concurrent(
            items,
            Arc::clone(&self.registry),
            Arc::clone(&self.definition),
            workers,
        )
        .await?;
        info!(count, workers, serializer = self.definition.name(), "Serialized collection concurrently");
        Ok(records)
    }
}
