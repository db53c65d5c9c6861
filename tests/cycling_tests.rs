//! Integration tests for multi-tap cycling through the pad.
//!
//! Drives the full path: grid activation -> cycle tracker -> commit engine
//! -> linked text area.

use std::time::{Duration, Instant};

use t9pad::input::{Activation, Keypad};
use t9pad::models::{position_of, CharKey, Position};
use t9pad::tui::TextArea;

/// Creates a pad linked to an empty text area.
fn pad() -> Keypad<TextArea> {
    Keypad::new(TextArea::new()).expect("embedded bank table loads")
}

/// Taps the character key with the given digit at the given time.
fn tap(pad: &mut Keypad<TextArea>, digit: u8, at: Instant) {
    let key = CharKey::new(digit).expect("digit in range");
    pad.handle(Activation::Tap(position_of(key)), at);
}

/// Taps the given helper cell at the given time.
fn tap_cell(pad: &mut Keypad<TextArea>, row: u8, col: u8, at: Instant) {
    pad.handle(Activation::Tap(Position::new(row, col)), at);
}

#[test]
fn cycling_replaces_within_window() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    assert_eq!(pad.buffer().text(), "a");
    tap(&mut pad, 2, base + Duration::from_millis(300));
    assert_eq!(pad.buffer().text(), "b");
    tap(&mut pad, 2, base + Duration::from_millis(600));
    assert_eq!(pad.buffer().text(), "c");
}

#[test]
fn cycle_wraps_past_last_candidate() {
    let mut pad = pad();
    let base = Instant::now();

    // a -> b -> c -> 2 -> a across five in-window taps
    for i in 0..5 {
        tap(&mut pad, 2, base + Duration::from_millis(i * 200));
    }
    assert_eq!(pad.buffer().text(), "a");
}

#[test]
fn timeout_starts_a_new_character() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    tap(&mut pad, 2, base + Duration::from_millis(300));
    assert_eq!(pad.buffer().text(), "b");

    // Past the 1000ms default window: a fresh character at position 0
    tap(&mut pad, 2, base + Duration::from_millis(1800));
    assert_eq!(pad.buffer().text(), "ba");
}

#[test]
fn different_key_starts_a_new_character() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    tap(&mut pad, 5, base + Duration::from_millis(200));
    assert_eq!(pad.buffer().text(), "aj");
}

#[test]
fn shortened_timeout_is_respected() {
    let mut pad = pad();
    pad.set_cycle_timeout(Duration::from_millis(200));
    let base = Instant::now();

    tap(&mut pad, 2, base);
    tap(&mut pad, 2, base + Duration::from_millis(500));
    assert_eq!(pad.buffer().text(), "aa");
    assert_eq!(pad.cycle_timeout(), Duration::from_millis(200));
}

#[test]
fn spec_scenario_tap_wait_tap_backspace() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    tap(&mut pad, 2, base + Duration::from_millis(400));
    assert_eq!(pad.buffer().text(), "b");

    tap(&mut pad, 2, base + Duration::from_millis(2000));
    assert_eq!(pad.buffer().text(), "ba");

    tap(&mut pad, 5, base + Duration::from_millis(2200));
    assert_eq!(pad.buffer().text(), "baj");

    // Backspace helper at (0,3)
    tap_cell(&mut pad, 0, 3, base + Duration::from_millis(2400));
    assert_eq!(pad.buffer().text(), "ba");
}

#[test]
fn backspace_breaks_the_pending_cycle() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    tap_cell(&mut pad, 0, 3, base + Duration::from_millis(100));
    assert_eq!(pad.buffer().text(), "");

    // Same key, still inside the window: must append, never replace
    tap(&mut pad, 2, base + Duration::from_millis(200));
    assert_eq!(pad.buffer().text(), "a");
}

#[test]
fn space_is_a_literal_insert_and_breaks_the_cycle() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    tap_cell(&mut pad, 3, 2, base + Duration::from_millis(100));
    tap(&mut pad, 2, base + Duration::from_millis(200));
    assert_eq!(pad.buffer().text(), "a a");
}

#[test]
fn edits_target_buffer_end_despite_external_cursor() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    tap(&mut pad, 3, base + Duration::from_millis(100));
    assert_eq!(pad.buffer().text(), "ad");

    // Host moves the cursor; the next continuation still edits the tail
    pad.buffer_mut().set_cursor(0);
    tap(&mut pad, 3, base + Duration::from_millis(200));
    assert_eq!(pad.buffer().text(), "ae");
}

#[test]
fn relinking_swaps_the_buffer_wholesale() {
    let mut pad = pad();
    let base = Instant::now();

    tap(&mut pad, 2, base);
    let old = pad.set_buffer(TextArea::new());
    assert_eq!(old.text(), "a");
    assert_eq!(pad.buffer().text(), "");

    // Pending cycle died with the old buffer
    tap(&mut pad, 2, base + Duration::from_millis(100));
    assert_eq!(pad.buffer().text(), "a");
}
