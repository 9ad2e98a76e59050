//! Runtime statistics
//!
//! Accumulates circulator on-time from the controller's edges and the
//! monotonic clock. Cumulative time only grows when a session closes;
//! the in-progress session is tracked separately and folded in by the
//! derived reporting values.

/// Circulator on-time accumulator
///
/// `session_started_ms` doubles as the previous on/off state: it is
/// `Some` exactly while a session is open.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunTimeStats {
    /// Start of the open session, if one is in progress
    session_started_ms: Option<u64>,
    /// Total duration of all closed sessions (ms)
    cumulative_on_ms: u64,
    /// Duration of the open session, 0 while off (ms)
    session_on_ms: u64,
}

impl RunTimeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one cycle's circulator state into the accumulator
    pub fn update(&mut self, on: bool, now_ms: u64) {
        match (self.session_started_ms, on) {
            // Off -> On edge: open a session
            (None, true) => {
                self.session_started_ms = Some(now_ms);
                self.session_on_ms = 0;
            }
            // On -> Off edge: close the session into the cumulative total
            (Some(started), false) => {
                self.cumulative_on_ms += now_ms.saturating_sub(started);
                self.session_started_ms = None;
                self.session_on_ms = 0;
            }
            // Running: track the open session
            (Some(started), true) => {
                self.session_on_ms = now_ms.saturating_sub(started);
            }
            // Idle: nothing in progress
            (None, false) => {
                self.session_on_ms = 0;
            }
        }
    }

    /// Total closed-session on-time (ms)
    pub fn cumulative_on_ms(&self) -> u64 {
        self.cumulative_on_ms
    }

    /// On-time of the in-progress session, 0 while off (ms)
    pub fn session_on_ms(&self) -> u64 {
        self.session_on_ms
    }

    /// Total on-time including the in-progress session (ms)
    pub fn total_on_ms(&self) -> u64 {
        self.cumulative_on_ms + self.session_on_ms
    }

    /// Lifetime duty cycle in percent, 0..=100
    ///
    /// Rounds by add-half-then-truncate on the millisecond quantities so
    /// short uptimes do not systematically under-report. A zero uptime is
    /// defined as 0%.
    pub fn duty_cycle_pct(&self, now_ms: u64) -> u8 {
        if now_ms == 0 {
            return 0;
        }
        let pct = (100 * self.total_on_ms() + now_ms / 2) / now_ms;
        pct.min(100) as u8
    }
}
