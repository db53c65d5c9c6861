//! Multi-tap cycle tracking.
//!
//! Each character key owns a slot recording where in its candidate set the
//! last tap landed and when it happened. A new tap on the same key within
//! the timeout window advances the cycle; anything else restarts it.

use std::time::{Duration, Instant};

use crate::models::{CharKey, CHAR_KEY_COUNT};

/// Default cycle timeout.
pub const DEFAULT_CYCLE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Per-key cycle record.
#[derive(Debug, Clone, Copy, Default)]
struct CycleSlot {
    /// Index into the key's current candidate set
    position: usize,
    /// When the key was last tapped
    last_tap: Option<Instant>,
}

/// Outcome of resolving one tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapResolution {
    /// The character this tap resolves to
    pub ch: char,
    /// Whether the tap advanced an existing cycle. Continuations replace
    /// the previously committed character instead of appending.
    pub continuation: bool,
}

/// Cycle state for all ten character keys of one pad.
#[derive(Debug, Clone)]
pub struct CycleTracker {
    slots: [CycleSlot; CHAR_KEY_COUNT],
    /// Key of the immediately preceding tap, if still eligible to continue
    last_key: Option<CharKey>,
    timeout: Duration,
}

impl CycleTracker {
    /// Creates a tracker with the given cycle timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            slots: [CycleSlot::default(); CHAR_KEY_COUNT],
            last_key: None,
            timeout,
        }
    }

    /// The active cycle timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sets the cycle timeout.
    pub const fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Resolves a tap on `key` at time `now` against its candidate set.
    ///
    /// Advances the key's cycle when the tap continues the previous one
    /// (same key, within the timeout), otherwise restarts it at position 0.
    /// Returns `None` only for an empty candidate set, which the bank table
    /// rules out; the caller treats it as a no-op.
    pub fn resolve_tap(
        &mut self,
        key: CharKey,
        candidates: &str,
        now: Instant,
    ) -> Option<TapResolution> {
        let len = candidates.chars().count();
        if len == 0 {
            tracing::warn!(key = key.index(), "empty candidate set, tap skipped");
            self.cancel_pending();
            return None;
        }

        let slot = &mut self.slots[key.index()];
        let within_window = slot
            .last_tap
            .and_then(|t| now.checked_duration_since(t))
            .is_some_and(|elapsed| elapsed <= self.timeout);
        let continuation = self.last_key == Some(key) && within_window;

        if continuation {
            slot.position = (slot.position + 1) % len;
        } else {
            slot.position = 0;
        }
        slot.last_tap = Some(now);
        self.last_key = Some(key);

        let ch = candidates.chars().nth(slot.position)?;
        Some(TapResolution { ch, continuation })
    }

    /// Forgets the previous tap so the next one starts a fresh cycle.
    ///
    /// Called after any helper activation or popover interaction. Stored
    /// per-key positions are untouched; only continuation eligibility is
    /// dropped.
    pub const fn cancel_pending(&mut self) {
        self.last_key = None;
    }

    /// Resets every slot to position 0 and drops the pending tap.
    ///
    /// Called on mode change, where candidate sets are swapped out from
    /// under the stored positions.
    pub fn reset(&mut self) {
        self.slots = [CycleSlot::default(); CHAR_KEY_COUNT];
        self.last_key = None;
    }

    /// Stored cycle position for a key. Test and render introspection.
    #[must_use]
    pub const fn position(&self, key: CharKey) -> usize {
        self.slots[key.index()].position
    }
}

impl Default for CycleTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_TIMEOUT)
    }
}
