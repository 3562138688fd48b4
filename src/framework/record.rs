//! Resource records: the `{id, type, attributes}` unit produced for one item.

use crate::framework::definition::SerializerDefinition;
use crate::framework::error::SerializeError;
use crate::framework::extractor::extract;
use crate::framework::registry::ClassRegistry;
use crate::framework::resolver::resolve_with_tier;
use crate::framework::resource::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// One entry of a JSON:API `data` array.
///
/// `attributes` is always present in output, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: Map<String, Value>,
}

impl ResourceRecord {
    /// Looks up an attribute by its output key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// Builds the record for `item`: resolve, extract, package.
///
/// # Errors
/// Propagates extraction errors; there is no best-effort record.
pub fn build(
    item: &dyn Resource,
    registry: &ClassRegistry,
    fallback: &SerializerDefinition,
) -> Result<ResourceRecord, SerializeError> {
    let (serializer, tier) = resolve_with_tier(item, registry, fallback);
    let attributes = extract(item, serializer)?;
    let record = ResourceRecord {
        id: serializer.read_id(item)?,
        resource_type: serializer.resource_type().to_string(),
        attributes,
    };
    debug!(
        type_tag = %item.type_tag(),
        ?tier,
        id = %record.id,
        resource_type = %record.resource_type,
        attributes = record.attributes.len(),
        "Built record"
    );
    Ok(record)
}
