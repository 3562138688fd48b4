use crate::framework::{Resource, TypeTag};
use crate::model::Vehicle;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A public transit bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub passenger_count: u32,
}

impl Bus {
    pub const TAG: TypeTag = TypeTag::new("Bus");

    pub fn new(vehicle: Vehicle, passenger_count: u32) -> Self {
        Self {
            vehicle,
            passenger_count,
        }
    }
}

impl Resource for Bus {
    fn type_tag(&self) -> TypeTag {
        Self::TAG
    }

    fn id(&self) -> String {
        self.vehicle.id.to_string()
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "passenger_count" => Some(json!(self.passenger_count)),
            _ => self.vehicle.property(name),
        }
    }
}
