//! Popover selection sessions.
//!
//! A long-press diverts into a popover: a one-shot chooser showing the full
//! candidate set of the pressed key. Exactly one selection commits exactly
//! one character, then the session is destroyed.

use crate::keys::KeyTable;
use crate::models::{CharKey, Mode};

/// Maximum candidates per popover row.
pub const ROW_WIDTH: usize = 4;

/// Surface size class of a popover.
///
/// Symbol banks (keys 0 and 1) get the near-full-parent surface; letter
/// banks fit in the compact one. The split is a usability choice, not a
/// rendering accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverSize {
    /// Large grid, near-full-parent
    Full,
    /// Roughly a third of the parent height
    Compact,
}

/// An active popover: the candidate set being displayed.
///
/// Ephemeral; at most one session exists per pad at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverSession {
    key: CharKey,
    candidates: String,
    size: PopoverSize,
}

impl PopoverSession {
    /// Opens a session for a long-pressed key, or `None` in Numeric mode.
    ///
    /// Keys 0 and 1 show their full symbol bank regardless of the
    /// alphabetic mode; keys 2-9 show the current mode's candidate string.
    #[must_use]
    pub fn open(table: &KeyTable, key: CharKey, mode: Mode) -> Option<Self> {
        if mode == Mode::Numeric {
            return None;
        }
        let size = if key.index() <= 1 {
            PopoverSize::Full
        } else {
            PopoverSize::Compact
        };
        Some(Self {
            key,
            candidates: table.candidates(key, mode).to_string(),
            size,
        })
    }

    /// The key this session was opened for.
    #[must_use]
    pub const fn key(&self) -> CharKey {
        self.key
    }

    /// The displayed candidate set.
    #[must_use]
    pub fn candidates(&self) -> &str {
        &self.candidates
    }

    /// The surface size class.
    #[must_use]
    pub const fn size(&self) -> PopoverSize {
        self.size
    }

    /// Candidates chunked into display rows of at most [`ROW_WIDTH`].
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<char>> {
        let chars: Vec<char> = self.candidates.chars().collect();
        chars.chunks(ROW_WIDTH).map(<[char]>::to_vec).collect()
    }

    /// Whether `ch` is one of the displayed candidates.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.candidates.chars().any(|c| c == ch)
    }
}
