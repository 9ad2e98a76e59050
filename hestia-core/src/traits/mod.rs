//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod relay;
pub mod sensor;

pub use relay::RelayOutput;
pub use sensor::TemperatureSource;
