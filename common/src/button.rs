//! Button debounce handling.
//!
//! Both navigation buttons share one cooldown: after any accepted press, further
//! presses are ignored until [`DEBOUNCE_MS`] has passed. Detection is level based,
//! so a button held down repeats once per cooldown.
//!
//! Timestamps are milliseconds since boot, supplied by the caller.

use crate::config::DEBOUNCE_MS;

/// Shared cooldown for the navigation buttons.
pub struct DebounceGate {
    last_accepted_ms: u64,
}

impl DebounceGate {
    /// Create a gate whose cooldown starts at boot (t = 0).
    pub const fn new() -> Self { Self { last_accepted_ms: 0 } }

    /// Returns true if more than [`DEBOUNCE_MS`] passed since the last accepted press.
    #[inline]
    pub const fn is_open(
        &self,
        now_ms: u64,
    ) -> bool {
        now_ms.saturating_sub(self.last_accepted_ms) > DEBOUNCE_MS
    }

    /// Record an accepted press, restarting the cooldown.
    #[inline]
    pub fn accept(
        &mut self,
        now_ms: u64,
    ) {
        self.last_accepted_ms = now_ms;
    }

    /// Time of the last accepted press.
    #[inline]
    pub const fn last_accepted_ms(&self) -> u64 { self.last_accepted_ms }
}

impl Default for DebounceGate {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_right_after_boot() {
        let gate = DebounceGate::new();
        assert!(!gate.is_open(0));
        assert!(!gate.is_open(DEBOUNCE_MS));
        assert!(gate.is_open(DEBOUNCE_MS + 1));
    }

    #[test]
    fn test_accept_restarts_cooldown() {
        let mut gate = DebounceGate::new();
        gate.accept(1000);
        assert_eq!(gate.last_accepted_ms(), 1000);
        assert!(!gate.is_open(1150));
        assert!(!gate.is_open(1200));
        assert!(gate.is_open(1250));
    }
}
