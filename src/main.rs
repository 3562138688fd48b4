//! # Fleet Demo
//!
//! Serializes a mixed fleet through both collection serializers:
//!
//! 1. `CollectionSerializer` maps cars and buses; the truck falls back to the collection.
//! 2. `CollectionWithDefaultSerializer` routes everything through `VehicleSerializer`.
//!
//! Options are read from `SERIALIZER_KEY_TRANSFORM` / `SERIALIZER_CONCURRENCY`.

use chrono::NaiveDate;
use collection_serializer::framework::{Document, Resource};
use collection_serializer::lifecycle::{setup_tracing, FleetSerializers, SerializationOptions};
use collection_serializer::model::{Bus, Car, Truck, Vehicle};
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let options = SerializationOptions::from_env()?;
    info!(?options, "Starting fleet demo");
    let fleet = FleetSerializers::new(&options)?;

    let purchased_at = NaiveDate::from_ymd_opt(2018, 1, 1).ok_or("invalid purchase date")?;
    let vehicles: Vec<Arc<dyn Resource>> = vec![
        Arc::new(Car::new(Vehicle::new(1, "Toyota Corolla", 1987), purchased_at)),
        Arc::new(Bus::new(Vehicle::new(2, "Nova Bus LFS", 2014), 60)),
        Arc::new(Truck::new(Vehicle::new(3, "Ford F150", 2000))),
    ];

    let document = fleet.collection.to_document(&vehicles)?;
    println!("{}", document.to_json_pretty()?);

    let span = tracing::info_span!("with_default");
    let records = fleet
        .collection_with_default
        .serialize_concurrent(vehicles, options.concurrency)
        .instrument(span)
        .await?;
    println!("{}", Document::many(records).to_json_pretty()?);

    info!("Fleet demo completed");
    Ok(())
}
