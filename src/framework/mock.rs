//! # Mock Resources for Testing
//!
//! [`MockResource`] is a property bag implementing [`Resource`]. It lets tests describe
//! items of any type tag without declaring a Rust type for each one.
//!
//! | | `MockResource` | Domain type (e.g. `Car`) |
//! |---|---|---|
//! | **Setup** | One builder chain | Struct + `Resource` impl |
//! | **Missing properties** | Anything not set with `with` | Whatever the impl omits |
//! | **Use case** | Engine unit tests, edge cases | End-to-end fleet tests |
//!
//! ```rust
//! use collection_serializer::framework::mock::MockResource;
//! use collection_serializer::framework::Resource;
//! use serde_json::json;
//!
//! let truck = MockResource::new("Truck", 3)
//!     .with("model", json!("Ford F150"))
//!     .with("year", json!(2000));
//!
//! assert_eq!(truck.type_tag().as_str(), "Truck");
//! assert_eq!(truck.id(), "3");
//! assert_eq!(truck.property("model"), Some(json!("Ford F150")));
//! assert_eq!(truck.property("load"), None);
//! ```

use crate::framework::resource::{Resource, TypeTag};
use serde_json::{Map, Value};
use std::fmt::Display;

/// An in-memory resource with arbitrary properties.
#[derive(Debug, Clone, PartialEq)]
pub struct MockResource {
    tag: TypeTag,
    id: String,
    properties: Map<String, Value>,
}

impl MockResource {
    pub fn new(tag: impl Into<TypeTag>, id: impl Display) -> Self {
        Self {
            tag: tag.into(),
            id: id.to_string(),
            properties: Map::new(),
        }
    }

    /// Sets a property, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

impl Resource for MockResource {
    fn type_tag(&self) -> TypeTag {
        self.tag.clone()
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.properties.get(name).cloned()
    }
}
