//! # Document Assembly
//!
//! Maps [`build`] over a collection, one record per item, in input order.
//!
//! ## Concurrency Model
//!
//! Records are independent of each other and the registry is read-only during a pass, so
//! [`assemble_concurrent`] splits the input into contiguous chunks and builds each chunk on
//! a Tokio blocking worker. Chunks are awaited in order and concatenated, which keeps the
//! output aligned with the input regardless of which worker finishes first.
//!
//! Both variants abort on the first failing item. No partial document is returned.

use crate::framework::definition::SerializerDefinition;
use crate::framework::error::SerializeError;
use crate::framework::record::{build, ResourceRecord};
use crate::framework::registry::ClassRegistry;
use crate::framework::resource::Resource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, Instrument, Span};

/// Builds one record per item, preserving input order. Empty input yields an empty vec.
pub fn assemble<'a, R, I>(
    items: I,
    registry: &ClassRegistry,
    fallback: &SerializerDefinition,
) -> Result<Vec<ResourceRecord>, SerializeError>
where
    R: Resource + 'a,
    I: IntoIterator<Item = &'a R>,
{
    items
        .into_iter()
        .map(|item| build(item, registry, fallback))
        .collect()
}

/// Concurrent variant of [`assemble`] running on at most `workers` blocking tasks.
///
/// # Errors
/// Returns the error of the earliest failing chunk, or [`SerializeError::Join`] if a
/// worker panicked.
pub async fn assemble_concurrent(
    items: Vec<Arc<dyn Resource>>,
    registry: Arc<ClassRegistry>,
    fallback: Arc<SerializerDefinition>,
    workers: usize,
) -> Result<Vec<ResourceRecord>, SerializeError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let chunk_size = items.len().div_ceil(workers.max(1));
    debug!(items = items.len(), chunk_size, "Assembling concurrently");

    let handles: Vec<_> = items
        .chunks(chunk_size)
        .map(|chunk| {
            let chunk = chunk.to_vec();
            let registry = Arc::clone(&registry);
            let fallback = Arc::clone(&fallback);
            let span = Span::current();
            tokio::task::spawn_blocking(move || {
                let _guard = span.enter();
                assemble(chunk.iter(), &registry, &fallback)
            })
        })
        .collect();

    let mut records = Vec::with_capacity(items.len());
    for handle in handles {
        records.extend(handle.in_current_span().await??);
    }
    Ok(records)
}

/// The `data` member: one record for single-object serialization, an array otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Data {
    One(ResourceRecord),
    Many(Vec<ResourceRecord>),
}

/// Minimal top-level document: `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub data: Data,
}

impl Document {
    pub fn one(record: ResourceRecord) -> Self {
        Self { data: Data::One(record) }
    }

    pub fn many(records: Vec<ResourceRecord>) -> Self {
        Self { data: Data::Many(records) }
    }

    /// The records in this document, in order.
    pub fn records(&self) -> &[ResourceRecord] {
        match &self.data {
            Data::One(record) => std::slice::from_ref(record),
            Data::Many(records) => records,
        }
    }

    pub fn to_json(&self) -> Result<String, SerializeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SerializeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockResource;
    use serde_json::json;

    fn registry() -> (ClassRegistry, Arc<SerializerDefinition>) {
        let vehicle = SerializerDefinition::builder("VehicleSerializer")
            .attributes(["model", "year"])
            .build()
            .unwrap();
        let registry = ClassRegistry::builder()
            .register_serializer("Car", vehicle)
            .unwrap()
            .build();
        let collection = SerializerDefinition::builder("CollectionSerializer").build().unwrap();
        (registry, collection)
    }

    fn cars(n: u64) -> Vec<MockResource> {
        (0..n)
            .map(|i| {
                MockResource::new("Car", i)
                    .with("model", json!(format!("Model {i}")))
                    .with("year", json!(1990 + i))
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let (registry, collection) = registry();
        let items: Vec<MockResource> = Vec::new();
        assert!(assemble(&items, &registry, &collection).unwrap().is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let (registry, collection) = registry();
        let items = cars(5);
        let records = assemble(&items, &registry, &collection).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_failure_aborts_whole_call() {
        let (registry, collection) = registry();
        let mut items = cars(3);
        items.push(MockResource::new("Car", 99).with("model", json!("No Year")));
        assert!(assemble(&items, &registry, &collection).is_err());
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let (registry, collection) = registry();
        let items = cars(23);
        let sequential = assemble(&items, &registry, &collection).unwrap();

        let shared: Vec<Arc<dyn Resource>> = items
            .into_iter()
            .map(|item| Arc::new(item) as Arc<dyn Resource>)
            .collect();
        let concurrent = assemble_concurrent(shared, Arc::new(registry), collection, 4)
            .await
            .unwrap();

        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_concurrent_empty_and_zero_workers() {
        let (registry, collection) = registry();
        let registry = Arc::new(registry);
        let none = assemble_concurrent(Vec::new(), registry.clone(), collection.clone(), 4)
            .await
            .unwrap();
        assert!(none.is_empty());

        let items: Vec<Arc<dyn Resource>> = cars(3)
            .into_iter()
            .map(|item| Arc::new(item) as Arc<dyn Resource>)
            .collect();
        let records = assemble_concurrent(items, registry, collection, 0).await.unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_document_json() {
        let (registry, collection) = registry();
        let items = cars(1);
        let records = assemble(&items, &registry, &collection).unwrap();

        let many = Document::many(records.clone());
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            json!({"data": [{"id": "0", "type": "vehicle", "attributes": {"model": "Model 0", "year": 1990}}]})
        );

        let one = Document::one(records[0].clone());
        assert_eq!(
            serde_json::to_value(&one).unwrap(),
            json!({"data": {"id": "0", "type": "vehicle", "attributes": {"model": "Model 0", "year": 1990}}})
        );
        assert_eq!(one.records(), many.records());
    }
}
