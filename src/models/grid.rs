//! Fixed 4x4 key grid and key classification.
//!
//! Every cell of the pad resolves to either a character key (0-9) or a
//! helper key. Resolution is a pure function of grid position and never
//! depends on the active input mode.

/// Number of rows in the key grid.
pub const GRID_ROWS: u8 = 4;

/// Number of columns in the key grid.
pub const GRID_COLS: u8 = 4;

/// Number of character keys on the pad.
pub const CHAR_KEY_COUNT: usize = 10;

/// Position in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row (0-based, 0-3)
    pub row: u8,
    /// Column (0-based, 0-3)
    pub col: u8,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A character key, identified by its digit index (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharKey(u8);

impl CharKey {
    /// Creates a character key from a digit index.
    ///
    /// Returns `None` for indices outside 0-9.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < CHAR_KEY_COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The digit index (0-9) of this key.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The digit character printed on this key.
    #[must_use]
    pub const fn digit(self) -> char {
        (b'0' + self.0) as char
    }
}

/// Non-character keys on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperKey {
    /// Delete one character before the cursor
    Backspace,
    /// Fire the Ready event and hand control back to the host
    Confirm,
    /// Fire the Cancel event and hand control back to the host
    Cancel,
    /// Insert a literal space
    Space,
    /// Flip Lowercase <-> Uppercase (no-op in Numeric mode)
    CaseToggle,
    /// Flip Numeric <-> last alphabetic mode
    NumericToggle,
}

/// Classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// A character key cycling through a candidate set
    Character(CharKey),
    /// A helper key with a fixed action
    Helper(HelperKey),
}

/// Resolves a grid position to its key, independent of mode.
///
/// Layout:
///
/// ```text
/// 1  2  3  backspace
/// 4  5  6  case toggle
/// 7  8  9  numeric toggle
/// cancel  0  space  confirm
/// ```
///
/// Returns `None` for positions outside the 4x4 grid.
#[must_use]
pub const fn classify(pos: Position) -> Option<KeyClass> {
    let key = match (pos.row, pos.col) {
        (0, 0) => KeyClass::Character(CharKey(1)),
        (0, 1) => KeyClass::Character(CharKey(2)),
        (0, 2) => KeyClass::Character(CharKey(3)),
        (0, 3) => KeyClass::Helper(HelperKey::Backspace),
        (1, 0) => KeyClass::Character(CharKey(4)),
        (1, 1) => KeyClass::Character(CharKey(5)),
        (1, 2) => KeyClass::Character(CharKey(6)),
        (1, 3) => KeyClass::Helper(HelperKey::CaseToggle),
        (2, 0) => KeyClass::Character(CharKey(7)),
        (2, 1) => KeyClass::Character(CharKey(8)),
        (2, 2) => KeyClass::Character(CharKey(9)),
        (2, 3) => KeyClass::Helper(HelperKey::NumericToggle),
        (3, 0) => KeyClass::Helper(HelperKey::Cancel),
        (3, 1) => KeyClass::Character(CharKey(0)),
        (3, 2) => KeyClass::Helper(HelperKey::Space),
        (3, 3) => KeyClass::Helper(HelperKey::Confirm),
        _ => return None,
    };
    Some(key)
}

/// Returns the grid position of a character key.
///
/// Inverse of [`classify`] restricted to character keys.
#[must_use]
pub const fn position_of(key: CharKey) -> Position {
    match key.0 {
        0 => Position::new(3, 1),
        1 => Position::new(0, 0),
        2 => Position::new(0, 1),
        3 => Position::new(0, 2),
        4 => Position::new(1, 0),
        5 => Position::new(1, 1),
        6 => Position::new(1, 2),
        7 => Position::new(2, 0),
        8 => Position::new(2, 1),
        // CharKey is range-checked at construction
        _ => Position::new(2, 2),
    }
}
