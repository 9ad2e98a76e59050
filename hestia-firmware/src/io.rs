//! ADC and GPIO glue
//!
//! Adapts the RP2040 peripherals to the driver crate's seams: four probe
//! channels share the one ADC block, and the relay pin satisfies the
//! driver's `OutputPin`.

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Output;

use hestia_drivers::relay::OutputPin;
use hestia_drivers::sensor::AdcReader;

/// The one ADC block, shared between the four probes
///
/// The control cycle is single-threaded, so RefCell borrows never overlap.
pub struct SharedAdc<'d> {
    adc: RefCell<Adc<'d, Blocking>>,
}

impl<'d> SharedAdc<'d> {
    pub fn new(adc: Adc<'d, Blocking>) -> Self {
        Self {
            adc: RefCell::new(adc),
        }
    }

    /// Bind one ADC input pin as a probe channel
    pub fn input<'a>(&'a self, channel: Channel<'d>) -> AdcInput<'a, 'd> {
        AdcInput { shared: self, channel }
    }
}

/// One probe's ADC channel
pub struct AdcInput<'a, 'd> {
    shared: &'a SharedAdc<'d>,
    channel: Channel<'d>,
}

impl AdcReader for AdcInput<'_, '_> {
    fn read_raw(&mut self) -> u16 {
        // A converter fault reads as 0, which the divider math absorbs as
        // an open probe. The RP2040 converter is 12-bit; scale down to the
        // unit's 10-bit acquisition range.
        let raw = self
            .shared
            .adc
            .borrow_mut()
            .blocking_read(&mut self.channel)
            .unwrap_or(0);
        raw >> 2
    }
}

/// Relay pin adapter
pub struct RelayPin<'d>(pub Output<'d>);

impl OutputPin for RelayPin<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
