//! T9 Pad - terminal demo of a T9-style multi-tap text entry pad
//!
//! This binary runs the pad inside a terminal: digits tap keys, holding a
//! mouse press (or pressing `*`) long-presses for the symbol popover, and
//! confirm/cancel hand the entered text back.

// Module declarations
mod config;
mod constants;
mod input;
mod keys;
mod models;
mod tui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use constants::APP_NAME;
use input::KeypadEvent;
use models::Mode;

/// T9 Pad - terminal demo of a T9-style multi-tap text entry pad
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cycle timeout in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    cycle_timeout: Option<u64>,

    /// Long-press threshold in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    long_press: Option<u64>,

    /// Start in numeric mode
    #[arg(short, long)]
    numeric: bool,

    /// Theme override: auto, dark, or light
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr and stay silent unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = config::Config::load().unwrap_or_else(|err| {
        eprintln!("{APP_NAME}: falling back to default config: {err:#}");
        config::Config::default()
    });

    if let Some(ms) = cli.cycle_timeout {
        config.input.cycle_timeout_ms = ms;
    }
    if let Some(ms) = cli.long_press {
        config.input.long_press_ms = ms;
    }
    if cli.numeric {
        config.input.startup_mode = Mode::Numeric;
    }
    if let Some(theme) = cli.theme.as_deref() {
        config.ui.theme_mode = match theme {
            "dark" => config::ThemeMode::Dark,
            "light" => config::ThemeMode::Light,
            _ => config::ThemeMode::Auto,
        };
    }
    config.validate()?;

    let mut state = tui::AppState::new(config)?;

    let mut terminal = tui::setup_terminal()?;
    let run_result = tui::run_tui(&mut state, &mut terminal);
    restore_result_first(terminal, run_result)?;

    match state.last_event {
        Some(KeypadEvent::Ready) => println!("{}", state.pad.buffer().text()),
        Some(KeypadEvent::Cancel) => eprintln!("{APP_NAME}: input cancelled"),
        None => {}
    }

    Ok(())
}

/// Restores the terminal even when the run loop failed, preferring the run
/// error if both go wrong.
fn restore_result_first(
    terminal: ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    run_result: Result<()>,
) -> Result<()> {
    let restore_result = tui::restore_terminal(terminal);
    run_result.and(restore_result)
}
