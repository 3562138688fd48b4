//! Serializer resolution.
//!
//! Picks the definition that governs an item, in strict priority order:
//!
//! 1. the registry entry for the item's exact [`TypeTag`](crate::framework::TypeTag),
//! 2. the registry's default serializer,
//! 3. the collection's own definition.
//!
//! Resolution never fails. An unmapped type is not an error.

use crate::framework::definition::SerializerDefinition;
use crate::framework::registry::ClassRegistry;
use crate::framework::resource::Resource;
use tracing::trace;

/// Which tier of the resolution policy produced the definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Exact,
    Default,
    Fallback,
}

/// Returns the definition to apply to `item`.
pub fn resolve<'a>(
    item: &dyn Resource,
    registry: &'a ClassRegistry,
    fallback: &'a SerializerDefinition,
) -> &'a SerializerDefinition {
    resolve_with_tier(item, registry, fallback).0
}

/// Like [`resolve`], also reporting which tier matched.
pub fn resolve_with_tier<'a>(
    item: &dyn Resource,
    registry: &'a ClassRegistry,
    fallback: &'a SerializerDefinition,
) -> (&'a SerializerDefinition, Resolution) {
    let tag = item.type_tag();
    let (serializer, tier) = if let Some(serializer) = registry.get(&tag) {
        (serializer.as_ref(), Resolution::Exact)
    } else if let Some(serializer) = registry.default_serializer() {
        (serializer.as_ref(), Resolution::Default)
    } else {
        (fallback, Resolution::Fallback)
    };
    trace!(type_tag = %tag, ?tier, serializer = serializer.name(), "Resolved serializer");
    (serializer, tier)
}
