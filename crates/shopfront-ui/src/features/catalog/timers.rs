//! Single-shot timers driven by caller-supplied timestamps.
//!
//! # Design
//! - Time is passed in as milliseconds so list behavior is deterministic under test.
//! - Re-arming replaces the pending due time; the earlier one never fires.
//! - The wasm layer schedules one `gloo` timeout for [`TimerSlot::due_ms`] and calls back
//!   into the list manager, which asks the slot whether it is due.

/// Owner of at most one pending due time, in milliseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerSlot {
    pending: Option<u64>,
}

impl TimerSlot {
    /// Arm (or re-arm) the timer to fire `delay_ms` after `now_ms`.
    pub const fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.pending = Some(now_ms.saturating_add(delay_ms));
    }

    /// Due time of the pending timer.
    #[must_use]
    pub const fn due_ms(&self) -> Option<u64> {
        self.pending
    }

    /// Consume the pending timer when it is due at `now_ms`.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(due_ms) if due_ms <= now_ms => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_due_time() {
        let mut slot = TimerSlot::default();
        slot.arm(1_000, 300);
        assert!(!slot.fire_if_due(1_299));
        assert!(slot.fire_if_due(1_300));
        assert!(!slot.fire_if_due(5_000));
        assert_eq!(slot.due_ms(), None);
    }

    #[test]
    fn rearm_replaces_previous_due_time() {
        let mut slot = TimerSlot::default();
        slot.arm(0, 300);
        slot.arm(100, 300);
        assert_eq!(slot.due_ms(), Some(400));
        assert!(!slot.fire_if_due(300));
        assert!(slot.fire_if_due(400));
    }

    #[test]
    fn due_time_saturates() {
        let mut slot = TimerSlot::default();
        slot.arm(u64::MAX - 1, 300);
        assert_eq!(slot.due_ms(), Some(u64::MAX));
    }
}
