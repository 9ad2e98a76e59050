//! GPIO relay output
//!
//! Circulator relay driven by a GPIO pin (directly or via an SSR board).

use hestia_core::config::RelayConfig;
use hestia_core::traits::RelayOutput;

/// Trait for GPIO pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Check if the pin is set high
    fn is_set_high(&self) -> bool;
}

/// GPIO relay output
///
/// Drives the circulator relay via a GPIO pin. Polarity is a runtime
/// field: the pin can be active-high (default) or active-low, matching
/// whichever relay board the unit shipped with. The pin is rewritten on
/// every `set_on` call, so a glitched level self-heals one cycle later.
pub struct GpioRelay<P> {
    pin: P,
    /// If true, relay ON = pin LOW
    inverted: bool,
    /// Current logical state (true = relay energized)
    on: bool,
}

impl<P: OutputPin> GpioRelay<P> {
    /// Create a new GPIO relay output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the relay is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut relay = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure the relay starts released
        relay.set_on(false);
        relay
    }

    /// Create a relay from its pin configuration
    pub fn from_config(pin: P, config: &RelayConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Create a new GPIO relay with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new GPIO relay with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> RelayOutput for GpioRelay<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            // Normal: on=true, inverted=false → high
            // Inverted: on=true, inverted=true → low
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
