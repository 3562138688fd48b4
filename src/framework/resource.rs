//! # Resource Capability
//!
//! Items handed to a collection serializer do not share a common type. Instead of
//! inspecting them at runtime, every item implements [`Resource`], which exposes the three
//! things the engine needs:
//!
//! - a [`TypeTag`] naming the item's concrete type (used for registry lookup),
//! - its identity, emitted as the record `id`,
//! - a property lookup by name, used by attributes without a custom extractor.
//!
//! Smart pointers forward to their contents, so `Vec<Box<dyn Resource>>` and
//! `Vec<Arc<dyn Resource>>` can be serialized directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Identifier of an item's concrete type, e.g. `"Car"`.
///
/// Matching is exact string equality. A `Truck` tag never matches a `Vehicle` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    pub const fn new(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TypeTag {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait that every serializable item implements.
///
/// # Property lookup
/// [`Resource::property`] returns `None` when the item has no property with that name.
/// The engine turns that into
/// [`SerializeError::AttributeExtraction`](crate::framework::SerializeError::AttributeExtraction);
/// it never substitutes `null`. A property that exists but has no value should
/// return `Some(Value::Null)`.
pub trait Resource: Send + Sync {
    /// The concrete type of this item.
    fn type_tag(&self) -> TypeTag;

    /// The identity of this item, rendered as a string.
    fn id(&self) -> String;

    /// Reads a named property.
    fn property(&self, name: &str) -> Option<Value>;
}

impl<T: Resource + ?Sized> Resource for &T {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }

    fn id(&self) -> String {
        (**self).id()
    }

    fn property(&self, name: &str) -> Option<Value> {
        (**self).property(name)
    }
}

impl<T: Resource + ?Sized> Resource for Box<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }

    fn id(&self) -> String {
        (**self).id()
    }

    fn property(&self, name: &str) -> Option<Value> {
        (**self).property(name)
    }
}

impl<T: Resource + ?Sized> Resource for Arc<T> {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }

    fn id(&self) -> String {
        (**self).id()
    }

    fn property(&self, name: &str) -> Option<Value> {
        (**self).property(name)
    }
}
