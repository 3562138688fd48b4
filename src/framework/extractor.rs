//! Attribute extraction over a definition's effective attribute list.

use crate::framework::definition::SerializerDefinition;
use crate::framework::error::SerializeError;
use crate::framework::resource::Resource;
use serde_json::{Map, Value};
use tracing::warn;

/// Extracts every effective attribute of `serializer` from `item`, in list order.
///
/// Keys are passed through the serializer's key transform. Attributes whose condition
/// rejects the item are skipped. Neither `item` nor `serializer` is modified.
///
/// # Errors
/// The first failing attribute aborts extraction; see [`AttributeDefinition::extract`].
///
/// [`AttributeDefinition::extract`]: crate::framework::AttributeDefinition::extract
pub fn extract(
    item: &dyn Resource,
    serializer: &SerializerDefinition,
) -> Result<Map<String, Value>, SerializeError> {
    let mut attributes = Map::new();
    for attr in serializer.effective_attributes() {
        if !attr.applies_to(item) {
            continue;
        }
        let value = attr.extract(item).inspect_err(|e| {
            warn!(
                type_tag = %item.type_tag(),
                serializer = serializer.name(),
                attribute = attr.name(),
                error = %e,
                "Attribute extraction failed"
            );
        })?;
        attributes.insert(serializer.output_key(attr.name()), value);
    }
    Ok(attributes)
}
