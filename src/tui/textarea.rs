//! Host text widget backing the pad's linked buffer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::input::TextBuffer;
use crate::tui::Theme;

/// A single-line text area with a character cursor.
///
/// This is the host side of the [`TextBuffer`] seam: it owns the text and
/// renders it; the pad edits it only through the trait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArea {
    text: String,
    /// Cursor as a character index into `text`
    cursor: usize,
}

impl TextArea {
    /// Creates an empty text area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cursor position as a character index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to the text length.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.char_count());
    }

    /// Byte offset of the cursor.
    fn cursor_byte(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Render the text area with a blinking cursor mark.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = Line::from(vec![
            Span::styled(
                self.text.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "_",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        let widget = Paragraph::new(line).block(
            Block::default()
                .title(" Text ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, area);
    }
}

impl TextBuffer for TextArea {
    fn insert(&mut self, ch: char) {
        let byte = self.cursor_byte();
        self.text.insert(byte, ch);
        self.cursor += 1;
    }

    fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte = self
            .text
            .char_indices()
            .nth(self.cursor - 1)
            .map(|(i, _)| i);
        if let Some(byte) = byte {
            self.text.remove(byte);
            self.cursor -= 1;
        }
    }

    fn move_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
