//! Relay output trait

/// Trait for circulator relay control
///
/// Implementations drive the relay coil via GPIO, directly or through an
/// SSR. Every `set_on` call must rewrite the physical pin, even when the
/// logical state is unchanged, so a glitched output self-heals on the
/// next control cycle.
pub trait RelayOutput {
    /// Energize or release the relay
    fn set_on(&mut self, on: bool);

    /// Check the current logical state
    fn is_on(&self) -> bool;
}
