//! Text buffer seam and the commit engine.
//!
//! The pad edits text only through [`TextBuffer`], the narrow surface the
//! host's text widget exposes. All edits target the buffer end: the cursor
//! is forced there before any delete or append, so external cursor movement
//! never redirects a cycle edit.

/// Host-side text widget surface.
///
/// Implementations own the text; the pad only appends and deletes single
/// characters at the cursor and never assumes buffer contents beyond the
/// last inserted character.
pub trait TextBuffer {
    /// Appends a character at the cursor.
    fn insert(&mut self, ch: char);

    /// Deletes the character before the cursor, if any.
    fn delete_back(&mut self);

    /// Moves the cursor to the end of the text.
    fn move_to_end(&mut self);

    /// Number of characters currently in the buffer.
    fn char_count(&self) -> usize;
}

/// Commits a resolved character to the buffer.
///
/// A continuation replaces the character the previous tap of this cycle
/// inserted; a fresh tap appends.
pub fn commit<B: TextBuffer>(buffer: &mut B, ch: char, continuation: bool) {
    buffer.move_to_end();
    if continuation && buffer.char_count() > 0 {
        buffer.delete_back();
    }
    buffer.insert(ch);
}

/// Inserts a character literally, bypassing cycling entirely.
///
/// Used for space, newline, and popover selections.
pub fn insert_literal<B: TextBuffer>(buffer: &mut B, ch: char) {
    buffer.move_to_end();
    buffer.insert(ch);
}

/// Deletes the last character of the buffer, if any.
pub fn backspace<B: TextBuffer>(buffer: &mut B) {
    buffer.move_to_end();
    if buffer.char_count() > 0 {
        buffer.delete_back();
    }
}
