//! Input modes and the per-pad mode controller.

use serde::{Deserialize, Serialize};

/// Active input mode of a pad.
///
/// Exactly one mode is active per pad instance. Numeric mode reduces every
/// character key to a single candidate (its digit), which also disables
/// popovers and cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Letter banks in lowercase
    #[default]
    Lowercase,
    /// Letter banks in uppercase
    Uppercase,
    /// Digits only
    Numeric,
}

impl Mode {
    /// Whether this mode uses the letter/symbol banks.
    #[must_use]
    pub const fn is_alphabetic(self) -> bool {
        matches!(self, Self::Lowercase | Self::Uppercase)
    }
}

/// Mode controller for one pad.
///
/// Remembers the last alphabetic mode so the numeric toggle can return to
/// it. State is per pad instance; two pads never share mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    current: Mode,
    last_alpha: Mode,
}

impl ModeState {
    /// Creates a controller starting in the given mode.
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        let last_alpha = if mode.is_alphabetic() {
            mode
        } else {
            Mode::Lowercase
        };
        Self {
            current: mode,
            last_alpha,
        }
    }

    /// The active mode.
    #[must_use]
    pub const fn current(self) -> Mode {
        self.current
    }

    /// Sets the active mode directly.
    pub const fn set(&mut self, mode: Mode) {
        self.current = mode;
        if mode.is_alphabetic() {
            self.last_alpha = mode;
        }
    }

    /// Flips Lowercase <-> Uppercase. No-op in Numeric mode.
    pub const fn toggle_case(&mut self) {
        match self.current {
            Mode::Lowercase => self.set(Mode::Uppercase),
            Mode::Uppercase => self.set(Mode::Lowercase),
            Mode::Numeric => {}
        }
    }

    /// Flips Numeric <-> the last alphabetic mode.
    pub const fn toggle_numeric(&mut self) {
        if self.current.is_alphabetic() {
            self.current = Mode::Numeric;
        } else {
            self.current = self.last_alpha;
        }
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(Mode::Lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_toggle_is_involution() {
        let mut state = ModeState::new(Mode::Lowercase);
        state.toggle_case();
        assert_eq!(state.current(), Mode::Uppercase);
        state.toggle_case();
        assert_eq!(state.current(), Mode::Lowercase);
    }

    #[test]
    fn test_case_toggle_noop_in_numeric() {
        let mut state = ModeState::new(Mode::Numeric);
        state.toggle_case();
        assert_eq!(state.current(), Mode::Numeric);
    }

    #[test]
    fn test_numeric_toggle_returns_to_last_alpha() {
        let mut state = ModeState::new(Mode::Uppercase);
        state.toggle_numeric();
        assert_eq!(state.current(), Mode::Numeric);
        state.toggle_numeric();
        assert_eq!(state.current(), Mode::Uppercase);
    }

    #[test]
    fn test_numeric_toggle_defaults_to_lowercase() {
        let mut state = ModeState::new(Mode::Numeric);
        state.toggle_numeric();
        assert_eq!(state.current(), Mode::Lowercase);
    }

    #[test]
    fn test_set_tracks_last_alpha() {
        let mut state = ModeState::new(Mode::Lowercase);
        state.set(Mode::Uppercase);
        state.set(Mode::Numeric);
        state.toggle_numeric();
        assert_eq!(state.current(), Mode::Uppercase);
    }
}
