//! # Serializer Definitions
//!
//! A [`SerializerDefinition`] declares which attributes to extract from an item and which
//! resource `type` to report. Definitions are assembled once with a [`SerializerBuilder`]
//! and then shared read-only behind an [`Arc`].
//!
//! ## Inheritance
//!
//! A definition may name one parent. Its *effective* attribute list is computed by
//! [`SerializerDefinition::effective_attributes`]:
//!
//! 1. Take the parent's effective list (recursively).
//! 2. Drop any inherited attribute whose name is redeclared on this definition.
//! 3. Append this definition's own attributes in declaration order.
//!
//! So an override moves the attribute to its position in the child's own list. The list is
//! computed once in `build()` and cached, since parents never change afterwards. `build()`
//! also rejects two effective attributes that map to the same output key under the key
//! transform (`purchased_at` and `purchasedAt` under `LowerCamel`).
//!
//! ```rust
//! use collection_serializer::framework::SerializerDefinition;
//!
//! let vehicle = SerializerDefinition::builder("VehicleSerializer")
//!     .attributes(["model", "year"])
//!     .build()
//!     .unwrap();
//! let car = SerializerDefinition::builder("CarSerializer")
//!     .parent(vehicle)
//!     .attribute("purchased_at")
//!     .build()
//!     .unwrap();
//!
//! let names: Vec<_> = car.effective_attributes().iter().map(|a| a.name()).collect();
//! assert_eq!(names, ["model", "year", "purchased_at"]);
//! assert_eq!(car.resource_type(), "car");
//! ```

use crate::framework::attribute::AttributeDefinition;
use crate::framework::error::{ConfigError, ExtractorError, SerializeError};
use crate::framework::naming::{infer_type_name, KeyTransform};
use crate::framework::resource::Resource;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::sync::{Arc, OnceLock};

/// Custom id computation.
pub type IdFn = Arc<dyn Fn(&dyn Resource) -> Result<String, ExtractorError> + Send + Sync>;

/// Where a definition reads the record `id` from.
#[derive(Clone, Default)]
pub enum IdSource {
    /// [`Resource::id`].
    #[default]
    Identity,
    /// A named property; non-string values are rendered as JSON text. A `null` value
    /// is treated as missing.
    Property(String),
    /// A custom closure.
    Custom(IdFn),
}

impl IdSource {
    fn read(&self, item: &dyn Resource) -> Result<String, SerializeError> {
        match self {
            IdSource::Identity => Ok(item.id()),
            IdSource::Property(name) => match item.property(name) {
                Some(Value::String(id)) => Ok(id),
                Some(Value::Null) | None => Err(SerializeError::AttributeExtraction {
                    attribute: name.clone(),
                    type_tag: item.type_tag(),
                }),
                Some(other) => Ok(other.to_string()),
            },
            IdSource::Custom(f) => f(item).map_err(SerializeError::Extractor),
        }
    }
}

impl Debug for IdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdSource::Identity => f.write_str("Identity"),
            IdSource::Property(name) => f.debug_tuple("Property").field(name).finish(),
            IdSource::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Immutable serializer configuration.
pub struct SerializerDefinition {
    name: String,
    resource_type: String,
    own_attributes: Vec<AttributeDefinition>,
    parent: Option<Arc<SerializerDefinition>>,
    key_transform: KeyTransform,
    id_source: IdSource,
    effective: OnceLock<Vec<AttributeDefinition>>,
}

impl SerializerDefinition {
    /// Starts a definition for the serializer identified by `name` (e.g. `"CarSerializer"`).
    pub fn builder(name: impl Into<String>) -> SerializerBuilder {
        SerializerBuilder::new(name)
    }

    /// The serializer's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `type` reported for every record this definition produces.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn own_attributes(&self) -> &[AttributeDefinition] {
        &self.own_attributes
    }

    pub fn parent(&self) -> Option<&Arc<SerializerDefinition>> {
        self.parent.as_ref()
    }

    pub fn key_transform(&self) -> KeyTransform {
        self.key_transform
    }

    /// Inherited attributes followed by own attributes, overrides moved to their own slot.
    pub fn effective_attributes(&self) -> &[AttributeDefinition] {
        self.effective
            .get_or_init(|| merge_attributes(self.parent.as_deref(), &self.own_attributes))
    }

    /// The output key for an attribute name under this definition's key transform.
    pub fn output_key(&self, attribute: &str) -> String {
        self.key_transform.apply(attribute)
    }

    /// Reads the record id for `item`.
    pub fn read_id(&self, item: &dyn Resource) -> Result<String, SerializeError> {
        self.id_source.read(item)
    }
}

fn merge_attributes(
    parent: Option<&SerializerDefinition>,
    own: &[AttributeDefinition],
) -> Vec<AttributeDefinition> {
    let inherited = parent.map(|p| p.effective_attributes()).unwrap_or(&[]);
    let own_names: HashSet<&str> = own.iter().map(|a| a.name()).collect();

    inherited
        .iter()
        .filter(|attr| !own_names.contains(attr.name()))
        .chain(own.iter())
        .cloned()
        .collect()
}

impl Debug for SerializerDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerDefinition")
            .field("name", &self.name)
            .field("resource_type", &self.resource_type)
            .field("own_attributes", &self.own_attributes)
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .field("key_transform", &self.key_transform)
            .field("id_source", &self.id_source)
            .finish()
    }
}

/// Configuration-time builder for [`SerializerDefinition`].
#[must_use]
pub struct SerializerBuilder {
    name: String,
    resource_type: Option<String>,
    attributes: Vec<AttributeDefinition>,
    parent: Option<Arc<SerializerDefinition>>,
    key_transform: KeyTransform,
    id_source: IdSource,
}

impl SerializerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: None,
            attributes: Vec::new(),
            parent: None,
            key_transform: KeyTransform::None,
            id_source: IdSource::Identity,
        }
    }

    /// Inherits the parent's effective attributes.
    pub fn parent(mut self, parent: Arc<SerializerDefinition>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Overrides the inferred resource type name.
    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    /// Declares an attribute read from the item property of the same name.
    pub fn attribute(self, name: impl Into<String>) -> Self {
        self.attribute_def(AttributeDefinition::new(name))
    }

    /// Declares several plain attributes at once.
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(names.into_iter().map(AttributeDefinition::new));
        self
    }

    /// Declares an attribute computed by a custom extractor.
    pub fn attribute_with<F>(self, name: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&dyn Resource) -> Result<Value, ExtractorError> + Send + Sync + 'static,
    {
        self.attribute_def(AttributeDefinition::with_extractor(name, extractor))
    }

    /// Declares a fully configured attribute (e.g. one with a condition).
    pub fn attribute_def(mut self, attribute: AttributeDefinition) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn key_transform(mut self, transform: KeyTransform) -> Self {
        self.key_transform = transform;
        self
    }

    /// Reads the record id from a named property instead of [`Resource::id`].
    pub fn id_property(mut self, name: impl Into<String>) -> Self {
        self.id_source = IdSource::Property(name.into());
        self
    }

    /// Computes the record id with a custom closure.
    pub fn id_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn Resource) -> Result<String, ExtractorError> + Send + Sync + 'static,
    {
        self.id_source = IdSource::Custom(Arc::new(f));
        self
    }

    /// Validates and freezes the definition.
    ///
    /// # Errors
    /// - [`ConfigError::DuplicateAttribute`] if an own attribute name is declared twice, or
    ///   if two effective attributes (inherited ones included) share an output key after
    ///   the key transform.
    /// - [`ConfigError::EmptyTypeName`] if the resource type resolves to an empty string.
    pub fn build(self) -> Result<Arc<SerializerDefinition>, ConfigError> {
        let mut seen = HashSet::new();
        for attr in &self.attributes {
            if !seen.insert(attr.name()) {
                tracing::warn!(serializer = %self.name, attribute = attr.name(), "Duplicate attribute");
                return Err(ConfigError::DuplicateAttribute {
                    serializer: self.name.clone(),
                    attribute: attr.name().to_string(),
                });
            }
        }

        let effective = merge_attributes(self.parent.as_deref(), &self.attributes);
        let mut keys = HashSet::new();
        for attr in &effective {
            if !keys.insert(self.key_transform.apply(attr.name())) {
                tracing::warn!(serializer = %self.name, attribute = attr.name(), "Output key collision");
                return Err(ConfigError::DuplicateAttribute {
                    serializer: self.name.clone(),
                    attribute: attr.name().to_string(),
                });
            }
        }

        let base_type = self
            .resource_type
            .clone()
            .unwrap_or_else(|| infer_type_name(&self.name));
        let resource_type = self.key_transform.apply(&base_type);
        if resource_type.is_empty() {
            return Err(ConfigError::EmptyTypeName(self.name));
        }

        tracing::debug!(
            serializer = %self.name,
            resource_type = %resource_type,
            parent = self.parent.as_ref().map(|p| p.name()),
            attributes = self.attributes.len(),
            "Serializer defined"
        );

        Ok(Arc::new(SerializerDefinition {
            name: self.name,
            resource_type,
            own_attributes: self.attributes,
            parent: self.parent,
            key_transform: self.key_transform,
            id_source: self.id_source,
            effective: OnceLock::from(effective),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockResource;
    use serde_json::json;

    fn names(def: &SerializerDefinition) -> Vec<&str> {
        def.effective_attributes().iter().map(|a| a.name()).collect()
    }

    fn vehicle() -> Arc<SerializerDefinition> {
        SerializerDefinition::builder("VehicleSerializer")
            .attributes(["model", "year"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_inferred_and_explicit_type_names() {
        assert_eq!(vehicle().resource_type(), "vehicle");

        let explicit = SerializerDefinition::builder("FleetItemSerializer")
            .resource_type("vehicle")
            .build()
            .unwrap();
        assert_eq!(explicit.resource_type(), "vehicle");
    }

    #[test]
    fn test_key_transform_applies_to_type_name() {
        let def = SerializerDefinition::builder("PassengerBusSerializer")
            .key_transform(KeyTransform::Dash)
            .build()
            .unwrap();
        assert_eq!(def.resource_type(), "passenger-bus");
        assert_eq!(def.output_key("passenger_count"), "passenger-count");
    }

    #[test]
    fn test_parent_then_child_concatenation() {
        let car = SerializerDefinition::builder("CarSerializer")
            .parent(vehicle())
            .attribute("purchased_at")
            .build()
            .unwrap();
        assert_eq!(names(&car), ["model", "year", "purchased_at"]);
    }

    #[test]
    fn test_override_takes_child_position_and_extractor() {
        let car = SerializerDefinition::builder("CarSerializer")
            .parent(vehicle())
            .attribute("purchased_at")
            .attribute_with("model", |item| {
                let model = item.property("model").unwrap_or(Value::Null);
                Ok(json!(format!("{} (car)", model.as_str().unwrap_or_default())))
            })
            .build()
            .unwrap();

        assert_eq!(names(&car), ["year", "purchased_at", "model"]);

        let item = MockResource::new("Car", 1).with("model", json!("Corolla"));
        let model = car.effective_attributes().last().unwrap();
        assert!(model.has_custom_extractor());
        assert_eq!(model.extract(&item).unwrap(), json!("Corolla (car)"));
    }

    #[test]
    fn test_multi_level_chain() {
        let car = SerializerDefinition::builder("CarSerializer")
            .parent(vehicle())
            .attribute("purchased_at")
            .build()
            .unwrap();
        let sports_car = SerializerDefinition::builder("SportsCarSerializer")
            .parent(car)
            .attributes(["top_speed", "year"])
            .build()
            .unwrap();

        assert_eq!(names(&sports_car), ["model", "purchased_at", "top_speed", "year"]);
        assert_eq!(sports_car.resource_type(), "sports_car");
    }

    #[test]
    fn test_effective_list_is_cached() {
        let def = vehicle();
        let first = def.effective_attributes().as_ptr();
        let second = def.effective_attributes().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_own_attribute_rejected() {
        let err = SerializerDefinition::builder("VehicleSerializer")
            .attributes(["model", "year", "model"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateAttribute {
                serializer: "VehicleSerializer".into(),
                attribute: "model".into(),
            }
        );
    }

    #[test]
    fn test_output_key_collision_rejected() {
        let err = SerializerDefinition::builder("CarSerializer")
            .key_transform(KeyTransform::LowerCamel)
            .attributes(["purchased_at", "purchasedAt"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateAttribute {
                serializer: "CarSerializer".into(),
                attribute: "purchasedAt".into(),
            }
        );

        // Without a transform the keys stay distinct.
        let plain = SerializerDefinition::builder("CarSerializer")
            .attributes(["purchased_at", "purchasedAt"])
            .build()
            .unwrap();
        assert_eq!(names(&plain), ["purchased_at", "purchasedAt"]);
    }

    #[test]
    fn test_output_key_collision_with_inherited_attribute() {
        let car = SerializerDefinition::builder("CarSerializer")
            .parent(vehicle())
            .attribute("purchased_at")
            .build()
            .unwrap();

        let err = SerializerDefinition::builder("LeasedCarSerializer")
            .parent(car)
            .key_transform(KeyTransform::LowerCamel)
            .attribute("purchasedAt")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateAttribute {
                serializer: "LeasedCarSerializer".into(),
                attribute: "purchasedAt".into(),
            }
        );
    }

    #[test]
    fn test_empty_type_name_rejected() {
        let err = SerializerDefinition::builder("Serializer").build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyTypeName("Serializer".into()));
    }

    #[test]
    fn test_id_sources() {
        let item = MockResource::new("Car", 7).with("vin", json!("1HGCM82633A004352"));

        assert_eq!(vehicle().read_id(&item).unwrap(), "7");

        let by_vin = SerializerDefinition::builder("CarSerializer")
            .id_property("vin")
            .build()
            .unwrap();
        assert_eq!(by_vin.read_id(&item).unwrap(), "1HGCM82633A004352");

        let custom = SerializerDefinition::builder("CarSerializer")
            .id_with(|item| Ok(format!("car-{}", item.id())))
            .build()
            .unwrap();
        assert_eq!(custom.read_id(&item).unwrap(), "car-7");
    }

    #[test]
    fn test_null_id_property_is_an_error() {
        let item = MockResource::new("Car", 7).with("vin", json!(null));
        let by_vin = SerializerDefinition::builder("CarSerializer")
            .id_property("vin")
            .build()
            .unwrap();

        match by_vin.read_id(&item).unwrap_err() {
            SerializeError::AttributeExtraction { attribute, type_tag } => {
                assert_eq!(attribute, "vin");
                assert_eq!(type_tag.as_str(), "Car");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
