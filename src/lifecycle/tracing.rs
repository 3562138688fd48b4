//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use the compact format and hide the module prefix (`with_target(false)`).
//! Verbosity is controlled by the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Configuration**: serializer definitions and registry entries (`debug`), duplicate
//!   registrations (`warn`)
//! - **Resolution**: which tier picked the serializer for each item (`trace`)
//! - **Records**: one line per built record with its type and attribute count (`debug`)
//! - **Documents**: one line per serialized collection (`info`)
//! - **Errors**: failing attribute, serializer and item type (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # One line per collection
//! RUST_LOG=info cargo run
//!
//! # Every record and registration
//! RUST_LOG=debug cargo run
//!
//! # Resolution decisions too
//! RUST_LOG=collection_serializer=trace cargo run
//! ```
//!
//! With `RUST_LOG=debug` a heterogeneous fleet looks like:
//!
//! ```text
//! DEBUG serialize_collection: Built record type_tag=Car tier=Exact id="1" resource_type=car attributes=3
//! DEBUG serialize_collection: Built record type_tag=Bus tier=Exact id="2" resource_type=bus attributes=3
//! INFO serialize_collection: Serialized collection count=2
//! ```

/// Installs the global subscriber.
///
/// # Panics
/// Panics if a global subscriber is already installed. Use [`try_setup_tracing`] where
/// that can happen, e.g. in tests.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Non-panicking variant of [`setup_tracing`]. Returns `false` if a subscriber was
/// already installed.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
