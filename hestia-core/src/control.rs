//! Circulator hysteresis control
//!
//! Two-state on/off control driven by the stove temperature. The dead
//! band between the start threshold and (start - band) prevents relay
//! chatter near the setpoint.

use crate::config::ControlConfig;

/// Circulator states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CirculatorState {
    /// Relay released, water standing
    Idle,
    /// Relay energized, circulator running
    Active,
}

/// Two-threshold hysteresis controller for the circulator
///
/// Starts the circulator when the stove reaches `start_c`, stops it once
/// the stove has fallen back to `start_c - band_c`. Inside the band the
/// previous state holds. A pure function of the current temperature and
/// the previous state - no timers, no debounce beyond the band itself.
#[derive(Debug, Clone)]
pub struct CirculatorControl {
    config: ControlConfig,
    state: CirculatorState,
}

impl CirculatorControl {
    /// Create a new controller, starting Idle before any temperature exists
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            state: CirculatorState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> CirculatorState {
        self.state
    }

    /// Whether the circulator should be running
    pub fn is_on(&self) -> bool {
        self.state == CirculatorState::Active
    }

    /// The temperature at which an Active circulator stops
    pub fn stop_c(&self) -> f32 {
        self.config.start_c - self.config.band_c
    }

    /// Feed one stove temperature and return the resulting on/off demand
    ///
    /// Both comparisons are inclusive. A NaN reading compares false both
    /// ways and therefore holds the previous state.
    pub fn update(&mut self, stove_c: f32) -> bool {
        self.state = match self.state {
            CirculatorState::Idle if stove_c >= self.config.start_c => CirculatorState::Active,
            CirculatorState::Active if stove_c <= self.stop_c() => CirculatorState::Idle,
            other => other,
        };
        self.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller() -> CirculatorControl {
        CirculatorControl::new(ControlConfig {
            start_c: 50.0,
            band_c: 5.0,
        })
    }

    #[test]
    fn starts_idle() {
        let ctrl = controller();
        assert_eq!(ctrl.state(), CirculatorState::Idle);
        assert!(!ctrl.is_on());
    }

    #[test]
    fn start_threshold_is_inclusive() {
        let mut ctrl = controller();
        assert!(!ctrl.update(49.9));
        assert!(ctrl.update(50.0));
    }

    #[test]
    fn stop_threshold_is_inclusive() {
        let mut ctrl = controller();
        ctrl.update(50.0);
        assert!(ctrl.update(45.1));
        assert!(!ctrl.update(45.0));
    }

    #[test]
    fn holds_state_inside_dead_band() {
        let mut ctrl = controller();
        // Idle through the band
        assert!(!ctrl.update(47.0));
        // Active through the band
        ctrl.update(50.0);
        assert!(ctrl.update(47.0));
    }

    #[test]
    fn stove_warmup_and_dieoff_sequence() {
        let mut ctrl = controller();
        let readings = [20.0, 30.0, 50.0, 51.0, 44.0, 45.0];
        let states: [bool; 6] = core::array::from_fn(|i| ctrl.update(readings[i]));
        assert_eq!(states, [false, false, true, true, false, false]);
    }

    #[test]
    fn drop_to_exact_band_edge_stops() {
        let mut ctrl = controller();
        let readings = [20.0, 30.0, 50.0, 51.0, 46.0, 45.0];
        let states: [bool; 6] = core::array::from_fn(|i| ctrl.update(readings[i]));
        assert_eq!(states, [false, false, true, true, true, false]);
    }

    #[test]
    fn nan_reading_holds_state() {
        let mut ctrl = controller();
        assert!(!ctrl.update(f32::NAN));
        ctrl.update(50.0);
        assert!(ctrl.update(f32::NAN));
    }

    proptest! {
        /// Any sequence oscillating strictly inside the dead band never
        /// changes state, from either starting state.
        #[test]
        fn no_chatter_inside_band(readings in proptest::collection::vec(45.1f32..=49.9, 1..64)) {
            let mut idle = controller();
            let mut active = controller();
            active.update(50.0);

            for &t in &readings {
                prop_assert!(!idle.update(t));
                prop_assert!(active.update(t));
            }
        }

        /// The controller's demand is always a pure function of the last
        /// threshold crossing, regardless of in-band noise.
        #[test]
        fn crossing_always_wins(noise in proptest::collection::vec(45.1f32..=49.9, 0..16)) {
            let mut ctrl = controller();
            for &t in &noise {
                ctrl.update(t);
            }
            prop_assert!(ctrl.update(50.0));
            for &t in &noise {
                ctrl.update(t);
            }
            prop_assert!(!ctrl.update(45.0));
        }
    }
}
