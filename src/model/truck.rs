use crate::framework::{Resource, TypeTag};
use crate::model::Vehicle;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A pickup or freight truck. `load` is in kilograms and may be unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub load: Option<u32>,
}

impl Truck {
    pub const TAG: TypeTag = TypeTag::new("Truck");

    pub fn new(vehicle: Vehicle) -> Self {
        Self { vehicle, load: None }
    }

    pub fn with_load(mut self, load: u32) -> Self {
        self.load = Some(load);
        self
    }
}

impl Resource for Truck {
    fn type_tag(&self) -> TypeTag {
        Self::TAG
    }

    fn id(&self) -> String {
        self.vehicle.id.to_string()
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "load" => Some(json!(self.load)),
            _ => self.vehicle.property(name),
        }
    }
}
