//! # Collection Serializer
//!
//! > **Polymorphic JSON:API `data` arrays from heterogeneous collections.**
//!
//! A fleet may contain cars, buses and trucks that share no common serializer. This crate
//! serializes such a collection through one entry point, choosing each item's serializer
//! at the moment of conversion and emitting ordered `{id, type, attributes}` records.
//!
//! ## Core Concepts
//!
//! ### Resolution
//! Every item reports a [`TypeTag`](framework::TypeTag). A collection serializer looks it
//! up in its [`ClassRegistry`](framework::ClassRegistry):
//!
//! 1. exact tag entry,
//! 2. otherwise the registry's default serializer,
//! 3. otherwise the collection's own definition (typically no attributes).
//!
//! Tags never match by hierarchy: a `Truck` is not served by a `Vehicle` entry.
//!
//! ### Inheritance
//! A [`SerializerDefinition`](framework::SerializerDefinition) may have a parent. Its
//! effective attributes are the parent's followed by its own; a redeclared name replaces the
//! inherited one at the child's position.
//!
//! ### Type names
//! The `type` of a record belongs to the serializer, not the item: `VehicleSerializer`
//! reports `vehicle` whether it serializes a truck or a car.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Definitions, registries, resolution, extraction and document assembly.
//!
//! ### 2. The Setup ([`lifecycle`])
//! Options, tracing setup and the fleet serializer wiring.
//!
//! ### 3. The Domain ([`model`])
//! `Car`, `Bus` and `Truck` implementing [`Resource`](framework::Resource).
//!
//! ## Quick Start
//!
//! ```rust
//! use collection_serializer::lifecycle::{FleetSerializers, SerializationOptions};
//! use collection_serializer::model::{Bus, Vehicle};
//!
//! let fleet = FleetSerializers::new(&SerializationOptions::default()).unwrap();
//! let buses = vec![Bus::new(Vehicle::new(2, "Nova Bus LFS", 2014), 60)];
//!
//! let json = fleet.collection.to_json(&buses).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"data":[{"id":"2","type":"bus","attributes":{"model":"Nova Bus LFS","year":2014,"passenger_count":60}}]}"#
//! );
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
