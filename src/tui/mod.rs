//! Terminal user interface components and state management.
//!
//! This module contains the demo TUI loop, `AppState`, event handling,
//! and the pad widgets using Ratatui. Activation events are synthesized
//! from keyboard input and from mouse press/release timing, which stands
//! in for the touchscreen's tap vs. long-press distinction.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod keypad;
pub mod popover;
pub mod textarea;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::input::{Activation, Keypad, KeypadEvent, ROW_WIDTH};
use crate::models::{position_of, CharKey, Position, GRID_COLS, GRID_ROWS};

// Re-export TUI components
pub use keypad::KeypadWidget;
pub use textarea::TextArea;
pub use theme::Theme;

use keypad::{CELL_HEIGHT, CELL_SPACING, CELL_WIDTH};

/// Application state for the demo - single source of truth.
///
/// All UI components read from this state immutably. Only event handlers
/// modify state explicitly.
pub struct AppState {
    /// The pad instance under demonstration
    pub pad: Keypad<TextArea>,
    /// Application configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,
    /// Grid cell the keyboard-driven cursor sits on
    pub cursor: Position,
    /// Selection index inside the open popover
    pub popover_index: usize,
    /// Status bar message
    pub status_message: String,
    /// Event the pad reported, if input has finished
    pub last_event: Option<KeypadEvent>,
    /// Whether application should exit
    pub should_quit: bool,
    /// In-flight mouse press: cell and press time
    pressed: Option<(Position, Instant)>,
    /// Grid area of the last render, for mouse hit-testing
    keypad_area: Rect,
}

impl AppState {
    /// Creates a new `AppState` from config.
    pub fn new(config: Config) -> Result<Self> {
        let mut pad =
            Keypad::new(TextArea::new()).context("Failed to load the character bank table")?;
        pad.set_mode(config.input.startup_mode);
        pad.set_cycle_timeout(config.input.cycle_timeout());

        Ok(Self {
            pad,
            config,
            theme: Theme::detect(),
            cursor: Position::new(0, 0),
            popover_index: 0,
            status_message: "Tap digits to type; hold (or press *) for symbols".to_string(),
            last_event: None,
            should_quit: false,
            pressed: None,
            keypad_area: Rect::default(),
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Feed one activation to the pad and react to its event.
    fn activate(&mut self, activation: Activation) {
        if let Some(event) = self.pad.handle(activation, Instant::now()) {
            self.last_event = Some(event);
            self.should_quit = true;
        }
        if self.pad.popover().is_none() {
            self.popover_index = 0;
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS each pass)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle one key event. Returns `Ok(true)` when the app should exit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.pad.popover().is_some() {
        handle_popover_key(state, key);
        return Ok(state.should_quit);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Up => state.cursor.row = state.cursor.row.saturating_sub(1),
        KeyCode::Down => state.cursor.row = (state.cursor.row + 1).min(GRID_ROWS - 1),
        KeyCode::Left => state.cursor.col = state.cursor.col.saturating_sub(1),
        KeyCode::Right => state.cursor.col = (state.cursor.col + 1).min(GRID_COLS - 1),
        KeyCode::Enter => {
            let pos = state.cursor;
            state.activate(Activation::Tap(pos));
        }
        KeyCode::Char('*') => {
            let pos = state.cursor;
            state.activate(Activation::LongPress(pos));
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(digit) = c.to_digit(10) {
                if let Some(char_key) = CharKey::new(digit as u8) {
                    let pos = position_of(char_key);
                    if key.modifiers.contains(KeyModifiers::ALT) {
                        state.activate(Activation::LongPress(pos));
                    } else {
                        state.activate(Activation::Tap(pos));
                    }
                }
            }
        }
        KeyCode::Backspace => state.activate(Activation::Tap(Position::new(0, 3))),
        KeyCode::Char(' ') => state.activate(Activation::Tap(Position::new(3, 2))),
        KeyCode::Tab => state.activate(Activation::Tap(Position::new(1, 3))),
        KeyCode::Char('#') => state.activate(Activation::Tap(Position::new(2, 3))),
        KeyCode::Esc => state.activate(Activation::Tap(Position::new(3, 0))),
        _ => {}
    }

    Ok(state.should_quit)
}

/// Handle keys while the popover is open.
fn handle_popover_key(state: &mut AppState, key: KeyEvent) {
    let Some(session) = state.pad.popover() else {
        return;
    };
    let count = session.candidates().chars().count();
    let selected_char = session.candidates().chars().nth(state.popover_index);

    match key.code {
        KeyCode::Esc => state.activate(Activation::PopoverClose),
        KeyCode::Enter => {
            if let Some(ch) = selected_char {
                state.activate(Activation::PopoverSelect(ch));
                state.set_status(format!("Inserted '{ch}'"));
            }
        }
        KeyCode::Left => state.popover_index = state.popover_index.saturating_sub(1),
        KeyCode::Right => {
            state.popover_index = (state.popover_index + 1).min(count.saturating_sub(1));
        }
        KeyCode::Up => state.popover_index = state.popover_index.saturating_sub(ROW_WIDTH),
        KeyCode::Down => {
            state.popover_index = (state.popover_index + ROW_WIDTH).min(count.saturating_sub(1));
        }
        _ => {}
    }
}

/// Handle mouse press/release, deriving tap vs. long-press from the hold
/// duration.
fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if state.pad.popover().is_none() {
                if let Some(cell) = cell_at(state.keypad_area, mouse.column, mouse.row) {
                    state.pressed = Some((cell, Instant::now()));
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some((cell, pressed_at)) = state.pressed.take() {
                let held = pressed_at.elapsed();
                if held >= state.config.input.long_press() {
                    state.activate(Activation::LongPress(cell));
                } else {
                    state.activate(Activation::Tap(cell));
                }
            }
        }
        _ => {}
    }
}

/// Resolve a terminal coordinate to a grid cell of the rendered keypad.
fn cell_at(area: Rect, x: u16, y: u16) -> Option<Position> {
    // Inside the block borders
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let col = (x - inner.x) / (CELL_WIDTH + CELL_SPACING);
    let row = (y - inner.y) / CELL_HEIGHT;
    if row < u16::from(GRID_ROWS) && col < u16::from(GRID_COLS) {
        Some(Position::new(row as u8, col as u8))
    } else {
        None
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Text area
            Constraint::Min(10),    // Keypad
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    state.pad.buffer().render(f, chunks[0], &state.theme);

    state.keypad_area = chunks[1];
    KeypadWidget::render(f, chunks[1], state);

    render_status_bar(f, chunks[2], state);

    if let Some(session) = state.pad.popover() {
        popover::render_popover(f, session, state.popover_index, &state.theme);
    }
}

/// Render the status bar with the current message and key hints.
fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let timeout_ms = state.pad.cycle_timeout().as_millis();
    let line = Line::from(vec![
        Span::styled(&state.status_message, Style::default().fg(theme.text)),
        Span::styled(
            format!("  [{:?}, {timeout_ms}ms]  ", state.pad.mode()),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled("Tab", Style::default().fg(theme.primary)),
        Span::styled(" case  ", Style::default().fg(theme.text_muted)),
        Span::styled("#", Style::default().fg(theme.primary)),
        Span::styled(" 123  ", Style::default().fg(theme.text_muted)),
        Span::styled("q", Style::default().fg(theme.primary)),
        Span::styled(" quit", Style::default().fg(theme.text_muted)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(widget, area);
}
