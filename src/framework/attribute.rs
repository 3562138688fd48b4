//! Attribute definitions: a name plus the rule that pulls its value out of an item.

use crate::framework::error::{ExtractorError, SerializeError};
use crate::framework::resource::Resource;
use serde_json::Value;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// User-supplied extractor computing an attribute value from an item.
pub type ExtractorFn = Arc<dyn Fn(&dyn Resource) -> Result<Value, ExtractorError> + Send + Sync>;

/// Predicate deciding whether an attribute is emitted for a given item.
pub type ConditionFn = Arc<dyn Fn(&dyn Resource) -> bool + Send + Sync>;

/// A named extraction rule.
///
/// Without a custom extractor the value is read with [`Resource::property`] under the
/// attribute's own name.
#[derive(Clone)]
pub struct AttributeDefinition {
    name: String,
    extractor: Option<ExtractorFn>,
    condition: Option<ConditionFn>,
}

impl AttributeDefinition {
    /// Attribute read from the item property of the same name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extractor: None,
            condition: None,
        }
    }

    /// Attribute computed by a custom extractor.
    pub fn with_extractor<F>(name: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&dyn Resource) -> Result<Value, ExtractorError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            extractor: Some(Arc::new(extractor)),
            condition: None,
        }
    }

    /// Only emit this attribute for items where `condition` holds.
    pub fn when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&dyn Resource) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_custom_extractor(&self) -> bool {
        self.extractor.is_some()
    }

    /// Whether this attribute should appear in the record for `item`.
    pub fn applies_to(&self, item: &dyn Resource) -> bool {
        self.condition.as_ref().map_or(true, |condition| condition(item))
    }

    /// Extracts this attribute's value from `item`.
    ///
    /// # Errors
    /// - [`SerializeError::AttributeExtraction`] if there is no custom extractor and the
    ///   item has no property named after this attribute.
    /// - [`SerializeError::Extractor`] carrying the custom extractor's own error.
    pub fn extract(&self, item: &dyn Resource) -> Result<Value, SerializeError> {
        match &self.extractor {
            Some(extractor) => extractor(item).map_err(SerializeError::Extractor),
            None => item
                .property(&self.name)
                .ok_or_else(|| SerializeError::AttributeExtraction {
                    attribute: self.name.clone(),
                    type_tag: item.type_tag(),
                }),
        }
    }
}

impl Debug for AttributeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDefinition")
            .field("name", &self.name)
            .field("custom_extractor", &self.extractor.is_some())
            .field("conditional", &self.condition.is_some())
            .finish()
    }
}
