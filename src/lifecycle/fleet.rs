//! Serializer wiring for the vehicle fleet: the vehicle, car and bus definitions and the
//! two collection serializers built from them.

use crate::framework::{ClassRegistry, CollectionSerializer, ConfigError, SerializerDefinition};
use crate::lifecycle::SerializationOptions;
use crate::model::{Bus, Car};
use std::sync::Arc;
use tracing::info;

/// Configuration-time wiring for the vehicle fleet serializers.
///
/// `FleetSerializers` is responsible for:
/// - **Definitions**: the shared `VehicleSerializer` and the `CarSerializer` /
///   `BusSerializer` that inherit from it
/// - **Registries**: mapping `Car` and `Bus` tags to their serializers, or routing every
///   type to `VehicleSerializer` as a default
/// - **Collection serializers**: the entry points used to serialize mixed fleets
///
/// Everything is built once in [`FleetSerializers::new`] and is read-only afterwards.
///
/// # Example
///
/// ```
/// use collection_serializer::lifecycle::{FleetSerializers, SerializationOptions};
/// use collection_serializer::model::{Truck, Vehicle};
///
/// let fleet = FleetSerializers::new(&SerializationOptions::default()).unwrap();
/// let truck = Truck::new(Vehicle::new(3, "Ford F150", 2000));
///
/// let record = fleet.collection_with_default.build(&truck).unwrap();
/// assert_eq!(record.resource_type, "vehicle");
/// ```
#[derive(Debug, Clone)]
pub struct FleetSerializers {
    /// Base definition exposing `model` and `year`.
    pub vehicle: Arc<SerializerDefinition>,

    /// `VehicleSerializer` + `purchased_at`.
    pub car: Arc<SerializerDefinition>,

    /// `VehicleSerializer` + `passenger_count`.
    pub bus: Arc<SerializerDefinition>,

    /// Maps `Car` and `Bus`; anything else falls back to the collection itself.
    pub collection: CollectionSerializer,

    /// No specific entries; every item uses `VehicleSerializer`.
    pub collection_with_default: CollectionSerializer,

    /// Options the serializers were configured with.
    pub options: SerializationOptions,
}

impl FleetSerializers {
    /// Builds every definition and registry.
    ///
    /// # Errors
    /// Any [`ConfigError`] raised while building definitions or registries.
    pub fn new(options: &SerializationOptions) -> Result<Self, ConfigError> {
        let transform = options.key_transform;

        // 1. Definitions (parents before children)
        let vehicle = SerializerDefinition::builder("VehicleSerializer")
            .key_transform(transform)
            .attributes(["model", "year"])
            .build()?;
        let car = SerializerDefinition::builder("CarSerializer")
            .key_transform(transform)
            .parent(Arc::clone(&vehicle))
            .attribute("purchased_at")
            .build()?;
        let bus = SerializerDefinition::builder("BusSerializer")
            .key_transform(transform)
            .parent(Arc::clone(&vehicle))
            .attribute("passenger_count")
            .build()?;

        // 2. Collection serializers with their registries
        let collection = CollectionSerializer::new(
            SerializerDefinition::builder("CollectionSerializer")
                .key_transform(transform)
                .build()?,
            ClassRegistry::builder()
                .register_serializer(Car::TAG, Arc::clone(&car))?
                .register_serializer(Bus::TAG, Arc::clone(&bus))?
                .build(),
        );
        let collection_with_default = CollectionSerializer::new(
            SerializerDefinition::builder("CollectionWithDefaultSerializer")
                .key_transform(transform)
                .build()?,
            ClassRegistry::builder()
                .register_default_serializer(Arc::clone(&vehicle))?
                .build(),
        );

        info!(?transform, "Fleet serializers configured");

        Ok(Self {
            vehicle,
            car,
            bus,
            collection,
            collection_with_default,
            options: options.clone(),
        })
    }
}
