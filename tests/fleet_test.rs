use chrono::NaiveDate;
use collection_serializer::framework::{
    AttributeDefinition, ClassRegistry, CollectionSerializer, KeyTransform, Resource, SerializeError,
    SerializerDefinition,
};
use collection_serializer::lifecycle::{try_setup_tracing, FleetSerializers, SerializationOptions};
use collection_serializer::model::{Bus, Car, Truck, Vehicle};
use serde_json::{json, Value};
use std::sync::Arc;

fn mixed_fleet(n: u64) -> Vec<Arc<dyn Resource>> {
    let purchased_at = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    (0..n)
        .map(|i| -> Arc<dyn Resource> {
            let vehicle = Vehicle::new(i, format!("Model {i}"), 2000 + i as i32);
            match i % 3 {
                0 => Arc::new(Car::new(vehicle, purchased_at)),
                1 => Arc::new(Bus::new(vehicle, 40 + i as u32)),
                _ => Arc::new(Truck::new(vehicle)),
            }
        })
        .collect()
}

/// Concurrent serialization must return records in input order.
#[tokio::test]
async fn test_concurrent_serialization_preserves_order() {
    try_setup_tracing();
    let fleet = FleetSerializers::new(&SerializationOptions::default()).unwrap();
    let vehicles = mixed_fleet(50);

    let sequential = fleet.collection.serialize_collection(&vehicles).unwrap();
    let concurrent = fleet
        .collection
        .serialize_concurrent(vehicles, fleet.options.concurrency)
        .await
        .unwrap();

    assert_eq!(sequential, concurrent);
    let ids: Vec<String> = concurrent.iter().map(|r| r.id.clone()).collect();
    let expected: Vec<String> = (0..50).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

/// Many callers can share one collection serializer.
#[tokio::test]
async fn test_shared_serializer_across_tasks() {
    let fleet = FleetSerializers::new(&SerializationOptions::default()).unwrap();

    let mut handles = vec![];
    for _ in 0..8 {
        let serializer = fleet.collection_with_default.clone();
        handles.push(tokio::spawn(async move {
            serializer.serialize_concurrent(mixed_fleet(12), 3).await
        }));
    }

    for handle in handles {
        let records = handle.await.unwrap().unwrap();
        assert_eq!(records.len(), 12);
        assert!(records.iter().all(|r| r.resource_type == "vehicle"));
    }
}

#[tokio::test]
async fn test_concurrent_failure_aborts() {
    let failing = SerializerDefinition::builder("FailingSerializer")
        .attribute_with("inspection", |item| {
            if item.id() == "7" {
                Err("inspection record missing".into())
            } else {
                Ok(Value::Bool(true))
            }
        })
        .build()
        .unwrap();
    let serializer = CollectionSerializer::new(
        SerializerDefinition::builder("CollectionSerializer").build().unwrap(),
        ClassRegistry::builder()
            .register_default_serializer(failing)
            .unwrap()
            .build(),
    );

    let err = serializer
        .serialize_concurrent(mixed_fleet(20), 4)
        .await
        .unwrap_err();
    assert!(matches!(err, SerializeError::Extractor(_)));
    assert_eq!(err.to_string(), "inspection record missing");
}

#[test]
fn test_key_transform_from_options() {
    let options = SerializationOptions {
        key_transform: KeyTransform::Dash,
        ..SerializationOptions::default()
    };
    let fleet = FleetSerializers::new(&options).unwrap();
    let bus = Bus::new(Vehicle::new(2, "Nova Bus LFS", 2014), 60);

    let record = fleet.collection.build(&bus).unwrap();
    assert_eq!(
        Value::Object(record.attributes),
        json!({"model": "Nova Bus LFS", "year": 2014, "passenger-count": 60})
    );

    let truck = Truck::new(Vehicle::new(3, "Ford F150", 2000));
    let fallback = fleet.collection_with_default.build(&truck).unwrap();
    assert_eq!(fallback.resource_type, "vehicle");

    let options = SerializationOptions {
        key_transform: KeyTransform::Camel,
        ..SerializationOptions::default()
    };
    let fleet = FleetSerializers::new(&options).unwrap();
    assert_eq!(fleet.collection.build(&truck).unwrap().resource_type, "Collection");
}

#[test]
fn test_derived_and_conditional_attributes() {
    let vehicle = SerializerDefinition::builder("VehicleSerializer")
        .attributes(["model", "year"])
        .build()
        .unwrap();
    let truck_serializer = SerializerDefinition::builder("TruckSerializer")
        .parent(vehicle)
        .attribute_with("age", |item| {
            let year = item
                .property("year")
                .and_then(|y| y.as_i64())
                .ok_or("truck has no year")?;
            Ok(json!(2024 - year))
        })
        .attribute_def(AttributeDefinition::new("load").when(|item| {
            item.property("load").is_some_and(|load| !load.is_null())
        }))
        .build()
        .unwrap();
    let serializer = CollectionSerializer::new(
        SerializerDefinition::builder("CollectionSerializer").build().unwrap(),
        ClassRegistry::builder()
            .register_serializer(Truck::TAG, truck_serializer)
            .unwrap()
            .build(),
    );

    let trucks = vec![
        Truck::new(Vehicle::new(3, "Ford F150", 2000)),
        Truck::new(Vehicle::new(5, "Volvo FH16", 2020)).with_load(18000),
    ];
    let records = serializer.serialize_collection(&trucks).unwrap();

    assert_eq!(records[0].resource_type, "truck");
    assert_eq!(
        Value::Object(records[0].attributes.clone()),
        json!({"model": "Ford F150", "year": 2000, "age": 24})
    );
    assert_eq!(
        Value::Object(records[1].attributes.clone()),
        json!({"model": "Volvo FH16", "year": 2020, "age": 4, "load": 18000})
    );
}

#[test]
fn test_options_from_lookup_drive_fleet() {
    let options = SerializationOptions::from_lookup(|key| match key {
        "SERIALIZER_KEY_TRANSFORM" => Some("lower_camel".to_string()),
        _ => None,
    })
    .unwrap();
    let fleet = FleetSerializers::new(&options).unwrap();
    let car = Car::new(
        Vehicle::new(1, "Toyota Corolla", 1987),
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
    );

    let record = fleet.collection.build(&car).unwrap();
    let keys: Vec<_> = record.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, ["model", "year", "purchasedAt"]);
}
