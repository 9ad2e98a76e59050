//! Per-cycle plant state
//!
//! All mutable state lives in explicit records owned by the control loop;
//! one `Monitor::tick` call per cycle keeps the ordering (acquire, then
//! decide, then account) in a single place with no ambient globals.

use crate::config::ControlConfig;
use crate::control::CirculatorControl;
use crate::stats::RunTimeStats;

/// One acquisition cycle's worth of calibrated temperatures (°C)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperatures {
    pub stove_c: f32,
    pub tank_top_c: f32,
    pub tank_middle_c: f32,
    pub tank_bottom_c: f32,
}

/// Everything the renderer consumes for one cycle
///
/// Built fresh each cycle by [`Monitor::tick`]; the derived statistics
/// values are computed here, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    pub temperatures: Temperatures,
    pub circulator_on: bool,
    /// Seconds since boot, truncated
    pub uptime_s: u64,
    /// Total on-time including the in-progress session (ms)
    pub total_on_ms: u64,
    /// Lifetime duty cycle, 0..=100
    pub duty_pct: u8,
}

/// Controller state record for the whole unit
///
/// Owns the hysteresis state and the on-time accumulator; the per-cycle
/// ordering (control decision before statistics) lives in `tick` so later
/// stages always observe the current cycle's values.
#[derive(Debug, Clone)]
pub struct Monitor {
    control: CirculatorControl,
    stats: RunTimeStats,
}

impl Monitor {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            control: CirculatorControl::new(config),
            stats: RunTimeStats::new(),
        }
    }

    /// Whether the circulator is currently demanded on
    pub fn is_circulator_on(&self) -> bool {
        self.control.is_on()
    }

    /// Run one control cycle over freshly acquired temperatures
    pub fn tick(&mut self, temperatures: Temperatures, now_ms: u64) -> StatusSnapshot {
        let circulator_on = self.control.update(temperatures.stove_c);
        self.stats.update(circulator_on, now_ms);

        StatusSnapshot {
            temperatures,
            circulator_on,
            uptime_s: now_ms / 1000,
            total_on_ms: self.stats.total_on_ms(),
            duty_pct: self.stats.duty_cycle_pct(now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temps(stove_c: f32) -> Temperatures {
        Temperatures {
            stove_c,
            tank_top_c: 40.0,
            tank_middle_c: 35.0,
            tank_bottom_c: 30.0,
        }
    }

    #[test]
    fn full_burn_cycle() {
        let mut monitor = Monitor::new(ControlConfig {
            start_c: 50.0,
            band_c: 5.0,
        });

        let readings = [20.0, 30.0, 50.0, 51.0, 44.0, 45.0];
        let mut now = 0;
        let mut states = [false; 6];
        for (i, &stove) in readings.iter().enumerate() {
            now += 1000;
            states[i] = monitor.tick(temps(stove), now).circulator_on;
        }
        assert_eq!(states, [false, false, true, true, false, false]);
    }

    #[test]
    fn snapshot_carries_derived_statistics() {
        let mut monitor = Monitor::new(ControlConfig::default());

        let idle = monitor.tick(temps(20.0), 500);
        assert_eq!(idle.uptime_s, 0);
        assert_eq!(idle.duty_pct, 0);

        monitor.tick(temps(55.0), 1000);
        let snap = monitor.tick(temps(44.0), 4000);
        assert!(!snap.circulator_on);
        assert_eq!(snap.uptime_s, 4);
        assert_eq!(snap.total_on_ms, 3000);
        assert_eq!(snap.duty_pct, 75);
    }

    #[test]
    fn nan_startup_readings_cannot_halt_the_cycle() {
        let mut monitor = Monitor::new(ControlConfig::default());
        let snap = monitor.tick(
            Temperatures {
                stove_c: f32::NAN,
                tank_top_c: f32::NAN,
                tank_middle_c: f32::NAN,
                tank_bottom_c: f32::NAN,
            },
            1000,
        );
        assert!(!snap.circulator_on);
        assert_eq!(snap.duty_pct, 0);
    }
}
