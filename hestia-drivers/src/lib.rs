//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hestia-core for the unit's hardware:
//!
//! - NTC thermistor acquisition (divider + Beta conversion + averaging)
//! - Circulator relay output (GPIO, configurable polarity)

#![no_std]
#![deny(unsafe_code)]

pub mod relay;
pub mod sensor;
