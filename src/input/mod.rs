//! Input core: the keypad context and its event router.
//!
//! [`Keypad`] is the single source of truth for one pad instance: mode
//! state, the cycle arena, the popover slot, and the linked text buffer.
//! Raw activations enter through [`Keypad::handle`]; the router classifies
//! them and drives the cycle tracker, commit engine, popover selector, and
//! mode controller. Per-instance by design: two pads never share state.

pub mod commit;
pub mod cycle;
pub mod popover;

pub use commit::TextBuffer;
pub use cycle::{CycleTracker, TapResolution, DEFAULT_CYCLE_TIMEOUT};
pub use popover::{PopoverSession, PopoverSize, ROW_WIDTH};

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::keys::{display, KeyTable};
use crate::models::{classify, CharKey, HelperKey, KeyClass, Mode, ModeState, Position};

/// A raw activation delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Short tap on a grid cell
    Tap(Position),
    /// Long-press on a grid cell
    LongPress(Position),
    /// Selection made on the open popover surface
    PopoverSelect(char),
    /// Explicit dismissal of the popover surface
    PopoverClose,
}

/// Events the pad reports back to the host application.
///
/// Hiding the widget afterwards is the host's visual side effect; the pad
/// only decides that one of these fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadEvent {
    /// Confirm was pressed; input is complete
    Ready,
    /// Cancel was pressed; input is abandoned
    Cancel,
}

/// One T9 pad instance.
///
/// Owns the linked buffer value; re-linking swaps it wholesale, so no
/// stale buffer reference can survive. All operations are synchronous and
/// run on whichever thread delivers activations (single-writer invariant).
#[derive(Debug)]
pub struct Keypad<B: TextBuffer> {
    buffer: B,
    table: KeyTable,
    mode: ModeState,
    cycle: CycleTracker,
    popover: Option<PopoverSession>,
}

impl<B: TextBuffer> Keypad<B> {
    /// Creates a pad linked to `buffer`, loading the embedded bank table.
    pub fn new(buffer: B) -> Result<Self> {
        Ok(Self::with_table(buffer, KeyTable::load()?))
    }

    /// Creates a pad with an explicit bank table.
    #[must_use]
    pub fn with_table(buffer: B, table: KeyTable) -> Self {
        Self {
            buffer,
            table,
            mode: ModeState::default(),
            cycle: CycleTracker::default(),
            popover: None,
        }
    }

    /// Re-links the pad to a new buffer, returning the previous one.
    ///
    /// Any pending cycle targets the old buffer's tail and is dropped.
    pub fn set_buffer(&mut self, buffer: B) -> B {
        self.cycle.cancel_pending();
        std::mem::replace(&mut self.buffer, buffer)
    }

    /// The linked buffer.
    #[must_use]
    pub const fn buffer(&self) -> &B {
        &self.buffer
    }

    /// The linked buffer, mutable.
    pub const fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    /// The active input mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode.current()
    }

    /// Sets the input mode directly.
    ///
    /// Candidate sets change under the stored cycle positions, so all
    /// cycles reset; an open popover shows stale candidates and closes.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode.set(mode);
        self.cycle.reset();
        self.popover = None;
    }

    /// The cycle timeout.
    #[must_use]
    pub const fn cycle_timeout(&self) -> Duration {
        self.cycle.timeout()
    }

    /// Sets the cycle timeout.
    pub const fn set_cycle_timeout(&mut self, timeout: Duration) {
        self.cycle.set_timeout(timeout);
    }

    /// The active popover session, if any, for the host to render.
    #[must_use]
    pub const fn popover(&self) -> Option<&PopoverSession> {
        self.popover.as_ref()
    }

    /// The bank table.
    #[must_use]
    pub const fn table(&self) -> &KeyTable {
        &self.table
    }

    /// Current-mode grid label for a character key.
    #[must_use]
    pub fn key_label(&self, key: CharKey) -> String {
        display::key_label(&self.table, key, self.mode())
    }

    /// Routes one activation through the pad.
    ///
    /// Returns the event to report to the host, if the activation produced
    /// one. Malformed activations (positions outside the grid, selections
    /// with no session) degrade to no-ops with a diagnostic.
    pub fn handle(&mut self, activation: Activation, now: Instant) -> Option<KeypadEvent> {
        match activation {
            Activation::Tap(pos) => self.handle_tap(pos, now),
            Activation::LongPress(pos) => {
                self.handle_long_press(pos, now);
                None
            }
            Activation::PopoverSelect(ch) => {
                self.handle_popover_select(ch);
                None
            }
            Activation::PopoverClose => {
                self.close_popover();
                None
            }
        }
    }

    fn handle_tap(&mut self, pos: Position, now: Instant) -> Option<KeypadEvent> {
        if self.popover.is_some() {
            // Popover surface is modal; grid taps under it are dropped
            tracing::debug!(?pos, "tap ignored while popover open");
            return None;
        }

        match classify(pos) {
            None => {
                tracing::warn!(?pos, "activation outside the key grid");
                None
            }
            Some(KeyClass::Character(key)) => {
                let candidates = self.table.candidates(key, self.mode());
                if let Some(res) = self.cycle.resolve_tap(key, candidates, now) {
                    commit::commit(&mut self.buffer, res.ch, res.continuation);
                }
                None
            }
            Some(KeyClass::Helper(helper)) => self.handle_helper(helper),
        }
    }

    fn handle_helper(&mut self, helper: HelperKey) -> Option<KeypadEvent> {
        // A helper press always ends the pending cycle; otherwise the next
        // same-key tap would replace a character the helper already moved
        // past (backspace) or displaced (space).
        self.cycle.cancel_pending();

        match helper {
            HelperKey::Backspace => {
                commit::backspace(&mut self.buffer);
                None
            }
            HelperKey::Space => {
                commit::insert_literal(&mut self.buffer, ' ');
                None
            }
            HelperKey::CaseToggle => {
                self.mode.toggle_case();
                self.cycle.reset();
                None
            }
            HelperKey::NumericToggle => {
                self.mode.toggle_numeric();
                self.cycle.reset();
                None
            }
            HelperKey::Confirm => Some(KeypadEvent::Ready),
            HelperKey::Cancel => Some(KeypadEvent::Cancel),
        }
    }

    fn handle_long_press(&mut self, pos: Position, now: Instant) {
        match classify(pos) {
            None => {
                tracing::warn!(?pos, "activation outside the key grid");
            }
            Some(KeyClass::Character(key)) => {
                if self.mode() == Mode::Numeric {
                    return;
                }
                // Replace policy: an open session closes before the new
                // one opens, keeping at most one session alive.
                self.popover = None;
                self.cycle.cancel_pending();
                self.popover = PopoverSession::open(&self.table, key, self.mode());
            }
            Some(KeyClass::Helper(_)) => {
                // A held helper key still acts once, as a tap
                self.handle_tap(pos, now);
            }
        }
    }

    fn handle_popover_select(&mut self, ch: char) {
        let Some(session) = self.popover.take() else {
            tracing::warn!(ch = %ch, "popover selection with no open session");
            return;
        };
        if session.contains(ch) {
            commit::insert_literal(&mut self.buffer, ch);
        } else {
            tracing::warn!(ch = %ch, "selection is not a displayed candidate, skipped");
        }
        // The selection ends any cycle; the next tap starts fresh
        self.cycle.cancel_pending();
    }

    fn close_popover(&mut self) {
        self.popover = None;
        self.cycle.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct VecBuffer(String);

    impl TextBuffer for VecBuffer {
        fn insert(&mut self, ch: char) {
            self.0.push(ch);
        }

        fn delete_back(&mut self) {
            self.0.pop();
        }

        fn move_to_end(&mut self) {}

        fn char_count(&self) -> usize {
            self.0.chars().count()
        }
    }

    fn pad() -> Keypad<VecBuffer> {
        Keypad::new(VecBuffer::default()).unwrap()
    }

    fn key_pos(index: u8) -> Position {
        crate::models::position_of(CharKey::new(index).unwrap())
    }

    #[test]
    fn test_tap_outside_grid_is_noop() {
        let mut pad = pad();
        let event = pad.handle(Activation::Tap(Position::new(9, 9)), Instant::now());
        assert_eq!(event, None);
        assert_eq!(pad.buffer().0, "");
    }

    #[test]
    fn test_confirm_and_cancel_events() {
        let mut pad = pad();
        let now = Instant::now();
        assert_eq!(
            pad.handle(Activation::Tap(Position::new(3, 3)), now),
            Some(KeypadEvent::Ready)
        );
        assert_eq!(
            pad.handle(Activation::Tap(Position::new(3, 0)), now),
            Some(KeypadEvent::Cancel)
        );
    }

    #[test]
    fn test_set_buffer_returns_old() {
        let mut pad = pad();
        pad.handle(Activation::Tap(key_pos(2)), Instant::now());
        let old = pad.set_buffer(VecBuffer::default());
        assert_eq!(old.0, "a");
        assert_eq!(pad.buffer().0, "");
    }

    #[test]
    fn test_relink_drops_pending_cycle() {
        let mut pad = pad();
        let base = Instant::now();
        pad.handle(Activation::Tap(key_pos(2)), base);
        pad.set_buffer(VecBuffer::default());
        pad.handle(
            Activation::Tap(key_pos(2)),
            base + Duration::from_millis(100),
        );
        // Fresh cycle against the new buffer, not a replacement
        assert_eq!(pad.buffer().0, "a");
    }

    #[test]
    fn test_set_mode_closes_popover() {
        let mut pad = pad();
        pad.handle(Activation::LongPress(key_pos(2)), Instant::now());
        assert!(pad.popover().is_some());
        pad.set_mode(Mode::Uppercase);
        assert!(pad.popover().is_none());
    }

    #[test]
    fn test_long_press_replaces_open_session() {
        let mut pad = pad();
        let now = Instant::now();
        pad.handle(Activation::LongPress(key_pos(2)), now);
        pad.handle(Activation::LongPress(key_pos(5)), now);
        let session = pad.popover().unwrap();
        assert_eq!(session.key(), CharKey::new(5).unwrap());
    }

    #[test]
    fn test_tap_ignored_while_popover_open() {
        let mut pad = pad();
        let now = Instant::now();
        pad.handle(Activation::LongPress(key_pos(2)), now);
        pad.handle(Activation::Tap(key_pos(5)), now);
        assert_eq!(pad.buffer().0, "");
        assert!(pad.popover().is_some());
    }

    #[test]
    fn test_popover_select_without_session_is_noop() {
        let mut pad = pad();
        pad.handle(Activation::PopoverSelect('a'), Instant::now());
        assert_eq!(pad.buffer().0, "");
    }

    #[test]
    fn test_popover_select_of_foreign_char_skipped() {
        let mut pad = pad();
        let now = Instant::now();
        pad.handle(Activation::LongPress(key_pos(2)), now);
        pad.handle(Activation::PopoverSelect('z'), now);
        assert_eq!(pad.buffer().0, "");
        assert!(pad.popover().is_none());
    }

    #[test]
    fn test_held_helper_acts_as_tap() {
        let mut pad = pad();
        let now = Instant::now();
        pad.handle(Activation::Tap(key_pos(2)), now);
        pad.handle(Activation::LongPress(Position::new(0, 3)), now);
        assert_eq!(pad.buffer().0, "");
    }
}
