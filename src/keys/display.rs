//! Display formatting for key labels.
//!
//! Labels are a pure function of (mode, key). Regenerating them after a
//! mode switch is just re-rendering; no label state is stored anywhere.

use crate::keys::KeyTable;
use crate::models::{CharKey, HelperKey, Mode};

/// Builds the grid label for a character key under a mode.
///
/// The label is the primary digit plus the full candidate string on the
/// next line. Single-candidate sets (Numeric mode) label as the digit
/// alone.
#[must_use]
pub fn key_label(table: &KeyTable, key: CharKey, mode: Mode) -> String {
    let candidates = table.candidates(key, mode);
    if candidates.chars().count() <= 1 {
        key.digit().to_string()
    } else {
        format!("{}\n{}", key.digit(), candidates)
    }
}

/// The grid label for a helper key.
///
/// The numeric toggle advertises the mode it switches *to*, so its label
/// depends on the current mode.
#[must_use]
pub const fn helper_label(helper: HelperKey, mode: Mode) -> &'static str {
    match helper {
        HelperKey::Backspace => "⌫",
        HelperKey::Confirm => "✓",
        HelperKey::Cancel => "✕",
        HelperKey::Space => "␣",
        HelperKey::CaseToggle => match mode {
            Mode::Lowercase => "ABC",
            Mode::Uppercase | Mode::Numeric => "abc",
        },
        HelperKey::NumericToggle => match mode {
            Mode::Lowercase | Mode::Uppercase => "123",
            Mode::Numeric => "abc",
        },
    }
}
