//! Popover popup rendering for long-press candidate selection.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::input::{PopoverSession, PopoverSize, ROW_WIDTH};
use crate::tui::Theme;

/// Render the popover over the main UI.
///
/// Symbol banks use the near-full-parent surface; letter banks use a
/// compact one around a third of the parent height.
pub fn render_popover(f: &mut Frame, session: &PopoverSession, selected: usize, theme: &Theme) {
    let area = match session.size() {
        PopoverSize::Full => centered_rect(60, 80, f.area()),
        PopoverSize::Compact => centered_rect(40, 34, f.area()),
    };

    // Clear the background area first
    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Candidate grid
            Constraint::Length(2), // Help text
        ])
        .split(area);

    render_candidates(f, chunks[0], session, selected, theme);

    let help_spans = vec![
        Span::styled(
            "◄►▲▼",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Select  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Apply  "),
        Span::styled(
            "Esc",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Cancel"),
    ];
    let help = Paragraph::new(Line::from(help_spans))
        .style(Style::default().fg(theme.text_muted))
        .block(Block::default().style(Style::default().bg(theme.background)));
    f.render_widget(help, chunks[1]);
}

/// Render the candidate grid, one row of up to four entries per line.
fn render_candidates(
    f: &mut Frame,
    area: Rect,
    session: &PopoverSession,
    selected: usize,
    theme: &Theme,
) {
    let mut lines = Vec::new();
    for (row_index, row) in session.rows().iter().enumerate() {
        let mut spans = Vec::new();
        for (col_index, ch) in row.iter().enumerate() {
            let flat_index = row_index * ROW_WIDTH + col_index;
            let style = if flat_index == selected {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            spans.push(Span::styled(format!("  {ch}  "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = format!(" Key {} ", session.key().digit());
    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(grid, area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
