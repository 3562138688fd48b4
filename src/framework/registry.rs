//! # Class Registry
//!
//! Maps an item's [`TypeTag`] to the [`SerializerDefinition`] that governs it, plus an
//! optional default entry. Built once with [`ClassRegistryBuilder`]; re-registering a tag
//! or the default slot is rejected instead of silently overwriting.
//!
//! The builder is consumed by every registration, so a failed registration leaves nothing
//! usable behind.

use crate::framework::definition::SerializerDefinition;
use crate::framework::error::ConfigError;
use crate::framework::resource::TypeTag;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Read-only mapping from type tag to serializer definition.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    by_type: HashMap<TypeTag, Arc<SerializerDefinition>>,
    default_serializer: Option<Arc<SerializerDefinition>>,
}

impl ClassRegistry {
    pub fn builder() -> ClassRegistryBuilder {
        ClassRegistryBuilder::default()
    }

    /// A registry with no entries and no default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact-match lookup.
    pub fn get(&self, tag: &TypeTag) -> Option<&Arc<SerializerDefinition>> {
        self.by_type.get(tag)
    }

    pub fn default_serializer(&self) -> Option<&Arc<SerializerDefinition>> {
        self.default_serializer.as_ref()
    }

    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.by_type.contains_key(tag)
    }

    /// Number of type-specific entries. The default slot is reported separately by
    /// [`ClassRegistry::default_serializer`].
    pub fn type_entries(&self) -> usize {
        self.by_type.len()
    }

    /// `true` when there is neither a type entry nor a default.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty() && self.default_serializer.is_none()
    }
}

/// Fluent builder for [`ClassRegistry`].
#[derive(Default)]
#[must_use]
pub struct ClassRegistryBuilder {
    by_type: HashMap<TypeTag, Arc<SerializerDefinition>>,
    default_serializer: Option<Arc<SerializerDefinition>>,
}

impl ClassRegistryBuilder {
    /// Maps items tagged `tag` to `serializer`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateRegistration`] if `tag` is already mapped.
    pub fn register_serializer(
        mut self,
        tag: impl Into<TypeTag>,
        serializer: Arc<SerializerDefinition>,
    ) -> Result<Self, ConfigError> {
        let tag = tag.into();
        if self.by_type.contains_key(&tag) {
            warn!(type_tag = %tag, "Duplicate serializer registration");
            return Err(ConfigError::DuplicateRegistration(tag));
        }
        debug!(type_tag = %tag, serializer = serializer.name(), "Registered serializer");
        self.by_type.insert(tag, serializer);
        Ok(self)
    }

    /// Sets the serializer used for tags without an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateDefault`] if a default is already set.
    pub fn register_default_serializer(
        mut self,
        serializer: Arc<SerializerDefinition>,
    ) -> Result<Self, ConfigError> {
        if self.default_serializer.is_some() {
            warn!(serializer = serializer.name(), "Duplicate default serializer registration");
            return Err(ConfigError::DuplicateDefault);
        }
        debug!(serializer = serializer.name(), "Registered default serializer");
        self.default_serializer = Some(serializer);
        Ok(self)
    }

    pub fn build(self) -> ClassRegistry {
        ClassRegistry {
            by_type: self.by_type,
            default_serializer: self.default_serializer,
        }
    }
}
