//! NTC thermistor acquisition
//!
//! A 100K NTC thermistor in a voltage divider, read through a 10-bit ADC
//! and converted with the simplified Beta form of the Steinhart-Hart
//! equation. Raw codes are converted individually and then averaged -
//! averaging the codes first would fold the divider's nonlinearity into
//! the result.

use embedded_hal::delay::DelayNs;
use libm::logf;

use hestia_core::config::ThermistorConfig;
use hestia_core::traits::TemperatureSource;

/// 0 °C in Kelvin
const KELVIN_OFFSET: f32 = 273.15;

/// ADC reading trait for platform abstraction
///
/// Implementations return the raw conversion code for their channel.
/// There is no error path: a converter fault reads as 0, which the
/// divider math treats like an open probe and degrades into an extreme
/// (but finite) temperature instead of a fault.
pub trait AdcReader {
    /// Read one raw ADC code
    fn read_raw(&mut self) -> u16;
}

/// Averaging NTC thermistor probe
///
/// Owns one ADC channel and a delay provider. Each [`sample`] takes
/// `sample_count` raw reads with a settle delay after each, converting
/// every read before folding it into the mean.
///
/// [`sample`]: TemperatureSource::sample
pub struct NtcProbe<ADC, D> {
    adc: ADC,
    delay: D,
    config: ThermistorConfig,
}

impl<ADC, D> NtcProbe<ADC, D> {
    /// Create a new probe
    ///
    /// # Arguments
    /// - `adc`: ADC channel wired to the thermistor divider
    /// - `delay`: settle-delay provider between raw reads
    /// - `config`: divider and Beta constants
    pub fn new(adc: ADC, delay: D, config: ThermistorConfig) -> Self {
        Self { adc, delay, config }
    }

    /// Convert one raw ADC code to degrees Celsius
    ///
    /// Circuit: VCC -- R_fixed -- ADC_PIN -- NTC -- GND
    /// R_ntc = R_fixed / (full_scale/code - 1)
    ///
    /// A code of 0 (open probe, or a converter fault mapped to 0) is
    /// coerced to 1 so the divider relation stays defined; the resulting
    /// out-of-range temperature is passed through untouched.
    pub fn convert(&self, raw: u16) -> f32 {
        let code = raw.max(1) as f32;
        let r_therm = self.config.r_fixed_ohms / (self.config.adc_full_scale as f32 / code - 1.0);

        // Simplified Steinhart-Hart (Beta form):
        // 1/T = 1/T0 + ln(R/R0)/B
        let mut inv_t = logf(r_therm / self.config.r_nominal_ohms) / self.config.beta;
        inv_t += 1.0 / (self.config.t_nominal_c + KELVIN_OFFSET);
        1.0 / inv_t - KELVIN_OFFSET
    }
}

impl<ADC: AdcReader, D: DelayNs> TemperatureSource for NtcProbe<ADC, D> {
    fn sample(&mut self) -> f32 {
        let mut total = 0.0f32;
        for _ in 0..self.config.sample_count {
            let raw = self.adc.read_raw();
            total += self.convert(raw);
            self.delay.delay_ms(self.config.settle_delay_ms);
        }
        total / self.config.sample_count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-value ADC for testing
    struct DummyAdc(u16);

    impl AdcReader for DummyAdc {
        fn read_raw(&mut self) -> u16 {
            self.0
        }
    }

    /// ADC replaying a scripted sequence of codes
    struct SequenceAdc {
        codes: &'static [u16],
        index: usize,
    }

    impl AdcReader for SequenceAdc {
        fn read_raw(&mut self) -> u16 {
            let code = self.codes[self.index % self.codes.len()];
            self.index += 1;
            code
        }
    }

    /// Delay provider counting the settle time it was asked for
    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    struct SharedDelay<'a>(&'a core::cell::RefCell<CountingDelay>);

    impl DelayNs for SharedDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().total_ns += ns as u64;
        }
    }

    fn probe(adc: DummyAdc) -> NtcProbe<DummyAdc, NoopDelay> {
        NtcProbe::new(adc, NoopDelay, ThermistorConfig::default())
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn midpoint_code_reads_nominal_temperature() {
        // Equal divider legs (R_ntc == R_fixed) put the tap at half scale
        let p = probe(DummyAdc(0));
        let halfway = p.convert(512);
        assert!((halfway - 25.0).abs() < 0.2, "got {halfway}");
    }

    #[test]
    fn conversion_is_monotonically_decreasing() {
        // Higher code = larger thermistor resistance = colder probe
        let p = probe(DummyAdc(0));
        let mut previous = p.convert(1);
        for code in (2..=1022).step_by(7) {
            let t = p.convert(code);
            assert!(
                t < previous,
                "temperature rose from {previous} to {t} at code {code}"
            );
            previous = t;
        }
    }

    #[test]
    fn conversion_is_finite_over_the_full_code_range() {
        let p = probe(DummyAdc(0));
        for code in 0..=1023 {
            assert!(p.convert(code).is_finite(), "code {code}");
        }
    }

    #[test]
    fn open_probe_clamps_to_code_one() {
        let p = probe(DummyAdc(0));
        assert_eq!(p.convert(0), p.convert(1));
    }

    #[test]
    fn sample_averages_converted_readings() {
        let adc = SequenceAdc {
            codes: &[500, 524],
            index: 0,
        };
        let mut p = NtcProbe::new(adc, NoopDelay, ThermistorConfig::default());

        let reference = probe(DummyAdc(0));
        let expected = (reference.convert(500) + reference.convert(524)) / 2.0;
        let got = p.sample();
        // 8 alternating reads of the two codes average to the same mean
        assert!((got - expected).abs() < 1e-3, "got {got}, want {expected}");
    }

    #[test]
    fn sample_settles_between_every_read() {
        let delay = core::cell::RefCell::new(CountingDelay::default());
        let mut p = NtcProbe::new(DummyAdc(512), SharedDelay(&delay), ThermistorConfig::default());
        p.sample();
        // 8 reads, 20 ms of settle time after each
        assert_eq!(delay.borrow().total_ns, 8 * 20 * 1_000_000);
    }
}
