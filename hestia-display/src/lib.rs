//! Display abstraction and shared renderer
//!
//! The screen is updated incrementally: every widget caches the value it
//! last painted and repaints only when the new value moved past a noise
//! threshold. On an SPI-driven panel with no backing framebuffer this is
//! the only thing standing between the UI and a full-screen repaint every
//! cycle.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod format;
pub mod layout;
pub mod screen;

pub use backend::{Canvas, DisplayError};
pub use layout::{PanelLayout, Region};
pub use screen::StatusScreen;
