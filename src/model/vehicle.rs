use crate::framework::{Resource, TypeTag};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fields shared by every vehicle in the fleet.
///
/// Concrete vehicles ([`Car`](super::Car), [`Bus`](super::Bus), [`Truck`](super::Truck))
/// embed a `Vehicle` and delegate unknown property lookups to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u64,
    pub model: String,
    pub year: i32,
}

impl Vehicle {
    pub const TAG: TypeTag = TypeTag::new("Vehicle");

    pub fn new(id: u64, model: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            model: model.into(),
            year,
        }
    }
}

impl Resource for Vehicle {
    fn type_tag(&self) -> TypeTag {
        Self::TAG
    }

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(json!(self.id)),
            "model" => Some(json!(self.model)),
            "year" => Some(json!(self.year)),
            _ => None,
        }
    }
}
