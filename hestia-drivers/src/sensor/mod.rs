//! Temperature sensor implementations

pub mod ntc;

pub use ntc::{AdcReader, NtcProbe};
