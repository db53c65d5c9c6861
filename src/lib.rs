//! T9 Pad Library
//!
//! This library provides the input core of a T9-style multi-tap text entry
//! widget: character-cycling across per-key candidate banks, mode switching
//! (lowercase/uppercase/numeric), and long-press popover selection, plus a
//! Ratatui frontend that renders the pad in a terminal.

// Module declarations
pub mod config;
pub mod constants;
pub mod input;
pub mod keys;
pub mod models;
pub mod tui;
