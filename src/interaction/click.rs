//! Click / double-click disambiguation.
//!
//! Toolkits report a click for every press and an extra double-click
//! event for the second press of a pair. A single click must open the
//! memo thread only once no second press arrives within the window; a
//! double click must toggle the lock and suppress the queued single.
//!
//! # State Machine
//!
//! ```text
//! Idle --click--> PendingSingle --poll(deadline passed)--> Idle
//!                       |  ^
//!                       |  +--click (count += 1)
//!                       +--double_click / cancel--> Idle
//! ```
//!
//! Time is supplied by the caller, so the machine is fully deterministic.

use std::time::{Duration, Instant};

use crate::models::CellKey;

/// Default debounce window.
pub const DEFAULT_CLICK_WINDOW: Duration = Duration::from_millis(250);

/// Disambiguator state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClickState {
    /// No pending timer.
    #[default]
    Idle,
    /// A timer is pending for the first clicked cell.
    PendingSingle {
        /// Cell the timer was started for.
        key: CellKey,
        /// Clicks seen since the timer started.
        clicks: u32,
        /// When the timer fires.
        deadline: Instant,
    },
}

/// Debounce timer separating single from double clicks.
#[derive(Debug, Clone)]
pub struct ClickDisambiguator {
    window: Duration,
    state: ClickState,
}

impl ClickDisambiguator {
    /// Creates an idle disambiguator with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: ClickState::Idle,
        }
    }

    /// Debounce window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Current state.
    pub fn state(&self) -> &ClickState {
        &self.state
    }

    /// Whether a timer is pending.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ClickState::PendingSingle { .. })
    }

    /// When the pending timer fires, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            ClickState::Idle => None,
            ClickState::PendingSingle { deadline, .. } => Some(*deadline),
        }
    }

    /// Records a click. Starts the timer if none is pending.
    ///
    /// Lock filtering is the caller's job.
    pub fn on_click(&mut self, key: CellKey, now: Instant) {
        if let ClickState::PendingSingle { clicks, .. } = &mut self.state {
            *clicks += 1;
            return;
        }
        self.state = ClickState::PendingSingle {
            key,
            clicks: 1,
            deadline: now + self.window,
        };
    }

    /// Handles the toolkit's double-click event: cancels any pending
    /// timer. Returns whether a timer was cancelled.
    pub fn on_double_click(&mut self) -> bool {
        self.cancel()
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns the cell whose memo thread should open, only when exactly
    /// one click was seen. The machine returns to `Idle` either way.
    pub fn poll(&mut self, now: Instant) -> Option<CellKey> {
        match &self.state {
            ClickState::PendingSingle { deadline, .. } if *deadline <= now => {}
            _ => return None,
        }
        match std::mem::take(&mut self.state) {
            ClickState::PendingSingle { key, clicks: 1, .. } => Some(key),
            _ => None,
        }
    }

    /// Drops any pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = ClickState::Idle;
        was_pending
    }
}

impl Default for ClickDisambiguator {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key(order: &str) -> CellKey {
        CellKey::new("V1", order, NaiveDate::from_ymd_opt(2025, 4, 10).unwrap())
    }

    #[test]
    fn test_single_click_fires_after_window() {
        let t0 = Instant::now();
        let mut c = ClickDisambiguator::default();
        c.on_click(key("O1"), t0);
        assert!(c.is_pending());
        assert_eq!(c.next_deadline(), Some(t0 + DEFAULT_CLICK_WINDOW));

        assert_eq!(c.poll(t0 + Duration::from_millis(100)), None);
        assert!(c.is_pending());

        assert_eq!(c.poll(t0 + DEFAULT_CLICK_WINDOW), Some(key("O1")));
        assert_eq!(*c.state(), ClickState::Idle);
        assert_eq!(c.poll(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_double_click_cancels() {
        let t0 = Instant::now();
        let mut c = ClickDisambiguator::default();
        c.on_click(key("O1"), t0);
        c.on_click(key("O1"), t0 + Duration::from_millis(80));
        assert!(c.on_double_click());
        assert!(!c.is_pending());
        assert_eq!(c.poll(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_two_clicks_without_double_click_event_open_nothing() {
        let t0 = Instant::now();
        let mut c = ClickDisambiguator::default();
        c.on_click(key("O1"), t0);
        c.on_click(key("O1"), t0 + Duration::from_millis(80));
        assert_eq!(c.poll(t0 + Duration::from_secs(1)), None);
        assert!(!c.is_pending());
    }

    #[test]
    fn test_second_click_does_not_extend_deadline() {
        let t0 = Instant::now();
        let mut c = ClickDisambiguator::new(Duration::from_millis(200));
        c.on_click(key("O1"), t0);
        c.on_click(key("O2"), t0 + Duration::from_millis(150));
        assert_eq!(c.next_deadline(), Some(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_cancel_when_idle() {
        let mut c = ClickDisambiguator::default();
        assert!(!c.cancel());
        assert!(!c.on_double_click());
    }
}
