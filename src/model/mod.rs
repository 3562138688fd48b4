//! Vehicle domain types implementing the [`Resource`](crate::framework::Resource) trait.

pub mod bus;
pub mod car;
pub mod truck;
pub mod vehicle;

pub use bus::*;
pub use car::*;
pub use truck::*;
pub use vehicle::*;
