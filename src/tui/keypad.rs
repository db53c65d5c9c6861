//! Keypad widget rendering the 4x4 key grid.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::keys::display;
use crate::models::{classify, KeyClass, Position, GRID_COLS, GRID_ROWS};

use super::AppState;

/// Height of one key cell in terminal rows.
pub(super) const CELL_HEIGHT: u16 = 2;

/// Width of one key cell in terminal columns.
pub(super) const CELL_WIDTH: u16 = 7;

/// Spacing between cell columns.
pub(super) const CELL_SPACING: u16 = 1;

/// Keypad widget renders the key grid with current-mode labels.
pub struct KeypadWidget;

impl KeypadWidget {
    /// Render the keypad grid.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let mode = state.pad.mode();

        let mut table_rows = Vec::with_capacity(GRID_ROWS as usize);
        for row in 0..GRID_ROWS {
            let cells: Vec<Cell> = (0..GRID_COLS)
                .map(|col| {
                    let pos = Position::new(row, col);
                    let label = Self::cell_label(state, pos);
                    let is_selected = pos == state.cursor;
                    let is_helper = matches!(classify(pos), Some(KeyClass::Helper(_)));

                    let style = if is_selected {
                        Style::default()
                            .fg(theme.background)
                            .bg(theme.accent)
                            .add_modifier(Modifier::BOLD)
                    } else if is_helper {
                        Style::default().fg(theme.primary)
                    } else {
                        Style::default().fg(theme.text)
                    };

                    Cell::from(label).style(style)
                })
                .collect();
            table_rows.push(Row::new(cells).height(CELL_HEIGHT));
        }

        let constraints = vec![Constraint::Length(CELL_WIDTH); GRID_COLS as usize];
        let table = Table::new(table_rows, constraints)
            .block(
                Block::default()
                    .title(format!(" {} [{:?}] ", crate::constants::APP_NAME, mode))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.surface))
                    .style(Style::default().bg(theme.background)),
            )
            .column_spacing(CELL_SPACING);

        f.render_widget(table, area);
    }

    /// Builds the display text for one grid cell.
    fn cell_label(state: &AppState, pos: Position) -> Text<'static> {
        match classify(pos) {
            Some(KeyClass::Character(key)) => {
                let label = state.pad.key_label(key);
                Text::from(label.lines().map(|l| Line::from(l.to_string())).collect::<Vec<_>>())
            }
            Some(KeyClass::Helper(helper)) => {
                Text::from(display::helper_label(helper, state.pad.mode()))
            }
            None => {
                // Unreachable on the fixed grid; skip the cell rather than crash
                tracing::warn!(?pos, "no key at grid cell, label skipped");
                Text::from("")
            }
        }
    }
}
