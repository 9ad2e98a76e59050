//! Configuration type definitions
//!
//! The whole configuration surface is static: a [`UnitConfig`] value is
//! built at startup (usually from one of the deployment presets) and read
//! for the lifetime of the process. Deployments that used to be separate
//! firmware builds differ only in these values.

/// Thermistor and acquisition front-end constants
///
/// Models an NTC thermistor in a voltage divider against `r_fixed_ohms`,
/// read through a 10-bit ADC. Conversion uses the simplified Beta form of
/// the Steinhart-Hart equation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThermistorConfig {
    /// Material Beta constant (K)
    pub beta: f32,
    /// Thermistor resistance at the nominal temperature (ohms)
    pub r_nominal_ohms: f32,
    /// Nominal temperature for `r_nominal_ohms` (°C)
    pub t_nominal_c: f32,
    /// Fixed divider resistor (ohms)
    pub r_fixed_ohms: f32,
    /// Full-scale ADC code (1023 for a 10-bit converter)
    pub adc_full_scale: u16,
    /// Raw reads averaged per sample
    pub sample_count: u8,
    /// Settle delay between raw reads (ms)
    pub settle_delay_ms: u32,
}

impl Default for ThermistorConfig {
    fn default() -> Self {
        Self {
            beta: 3950.0,
            r_nominal_ohms: 100_000.0,
            t_nominal_c: 25.0,
            r_fixed_ohms: 100_000.0,
            adc_full_scale: 1023,
            sample_count: 8,
            settle_delay_ms: 20,
        }
    }
}

/// Circulator hysteresis thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlConfig {
    /// Stove temperature at which the circulator starts (°C)
    pub start_c: f32,
    /// Hysteresis band below `start_c` before it stops (°C)
    pub band_c: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            start_c: 50.0,
            band_c: 5.0,
        }
    }
}

/// Relay pin configuration with polarity
///
/// `inverted` selects active-low wiring at runtime; the same binary serves
/// both relay board types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Relay is energized when the pin is LOW
    pub inverted: bool,
}

impl RelayConfig {
    /// Create an active-high relay config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an active-low relay config
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        // Active-low relay board on GPIO 2, as wired in the reference unit
        Self::inverted(2)
    }
}

/// Gradient stop table selection
///
/// Both variants map the same domain; they differ only in how many fixed
/// color stops the interpolation passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientVariant {
    /// blue → yellow → red
    TwoStop,
    /// blue → cyan → green → yellow → red
    #[default]
    FourStop,
}

/// Temperature-to-color mapping domain
///
/// Inputs outside `[min_c, max_c]` clamp to the edge; the bounds are a
/// display choice, not physics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorScale {
    /// Domain lower bound (°C), mapped to the coldest stop
    pub min_c: f32,
    /// Domain upper bound (°C), mapped to the hottest stop
    pub max_c: f32,
    /// Stop table to interpolate through
    pub gradient: GradientVariant,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            min_c: 10.0,
            max_c: 100.0,
            gradient: GradientVariant::FourStop,
        }
    }
}

/// Complete unit configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnitConfig {
    pub control: ControlConfig,
    pub thermistor: ThermistorConfig,
    pub relay: RelayConfig,
    pub scale: ColorScale,
}

impl UnitConfig {
    /// Cabin deployment: smaller stove, earlier circulator start, wider
    /// band, and the simpler two-stop gradient.
    pub fn cabin() -> Self {
        Self {
            control: ControlConfig {
                start_c: 33.0,
                band_c: 10.0,
            },
            scale: ColorScale {
                gradient: GradientVariant::TwoStop,
                ..ColorScale::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_boiler_room_deployment() {
        let cfg = UnitConfig::default();
        assert_eq!(cfg.control.start_c, 50.0);
        assert_eq!(cfg.control.band_c, 5.0);
        assert_eq!(cfg.scale.gradient, GradientVariant::FourStop);
        assert!(cfg.relay.inverted);
    }

    #[test]
    fn cabin_preset_differs_only_in_data() {
        let cfg = UnitConfig::cabin();
        assert_eq!(cfg.control.start_c, 33.0);
        assert_eq!(cfg.control.band_c, 10.0);
        assert_eq!(cfg.scale.gradient, GradientVariant::TwoStop);
        // Everything else is shared with the default deployment
        assert_eq!(cfg.thermistor, ThermistorConfig::default());
        assert_eq!(cfg.relay, RelayConfig::default());
    }

    #[test]
    fn thermistor_defaults_match_sense_circuit() {
        let t = ThermistorConfig::default();
        assert_eq!(t.beta, 3950.0);
        assert_eq!(t.r_nominal_ohms, 100_000.0);
        assert_eq!(t.r_fixed_ohms, 100_000.0);
        assert_eq!(t.adc_full_scale, 1023);
        assert_eq!(t.sample_count, 8);
        assert_eq!(t.settle_delay_ms, 20);
    }
}
