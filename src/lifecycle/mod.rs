//! Configuration and runtime setup.
//!
//! This module contains everything that happens once, before serialization starts:
//!
//! - [`SerializationOptions`] - Key transform and worker count, from serde or the environment
//! - [`FleetSerializers`] - Builds the vehicle serializer definitions and registries
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod fleet;
pub mod tracing;

pub use self::config::*;
pub use self::fleet::*;
pub use self::tracing::*;
