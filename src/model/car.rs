use crate::framework::{Resource, TypeTag};
use crate::model::Vehicle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A privately owned car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub purchased_at: NaiveDate,
}

impl Car {
    pub const TAG: TypeTag = TypeTag::new("Car");

    pub fn new(vehicle: Vehicle, purchased_at: NaiveDate) -> Self {
        Self { vehicle, purchased_at }
    }
}

impl Resource for Car {
    fn type_tag(&self) -> TypeTag {
        Self::TAG
    }

    fn id(&self) -> String {
        self.vehicle.id.to_string()
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "purchased_at" => Some(json!(self.purchased_at)),
            _ => self.vehicle.property(name),
        }
    }
}
