//! Integration tests for long-press popover selection.

use std::time::{Duration, Instant};

use t9pad::input::{Activation, Keypad, PopoverSize};
use t9pad::models::{position_of, CharKey, Mode, Position};
use t9pad::tui::TextArea;

const NUMERIC_TOGGLE: Position = Position::new(2, 3);

fn pad() -> Keypad<TextArea> {
    Keypad::new(TextArea::new()).expect("embedded bank table loads")
}

fn long_press(pad: &mut Keypad<TextArea>, digit: u8, at: Instant) {
    let key = CharKey::new(digit).expect("digit in range");
    pad.handle(Activation::LongPress(position_of(key)), at);
}

#[test]
fn long_press_opens_the_full_symbol_bank() {
    let mut pad = pad();
    long_press(&mut pad, 1, Instant::now());

    let session = pad.popover().expect("session open");
    assert_eq!(session.size(), PopoverSize::Full);
    assert!(session.contains('@'));
    // Mode-independent bank: uppercase shows the same candidates
    let lower_candidates = session.candidates().to_string();
    pad.set_mode(Mode::Uppercase);
    long_press(&mut pad, 1, Instant::now());
    assert_eq!(pad.popover().unwrap().candidates(), lower_candidates);
}

#[test]
fn long_press_on_letter_keys_is_compact_and_cased() {
    let mut pad = pad();
    long_press(&mut pad, 5, Instant::now());
    {
        let session = pad.popover().expect("session open");
        assert_eq!(session.size(), PopoverSize::Compact);
        assert_eq!(session.candidates(), "jkl5");
    }

    pad.set_mode(Mode::Uppercase);
    long_press(&mut pad, 5, Instant::now());
    assert_eq!(pad.popover().unwrap().candidates(), "JKL5");
}

#[test]
fn selection_appends_one_character_and_closes() {
    let mut pad = pad();
    let now = Instant::now();

    long_press(&mut pad, 1, now);
    pad.handle(Activation::PopoverSelect('@'), now);

    assert_eq!(pad.buffer().text(), "@");
    assert!(pad.popover().is_none());
}

#[test]
fn spec_scenario_popover_then_fresh_cycle() {
    let mut pad = pad();
    let base = Instant::now();

    long_press(&mut pad, 1, base);
    pad.handle(Activation::PopoverSelect('@'), base + Duration::from_millis(100));
    assert_eq!(pad.buffer().text(), "@");

    // The next tap on key 1 starts at position 0 of its punctuation bank
    pad.handle(
        Activation::Tap(position_of(CharKey::new(1).unwrap())),
        base + Duration::from_millis(200),
    );
    assert_eq!(pad.buffer().text(), "@.");
}

#[test]
fn numeric_mode_disables_popovers() {
    let mut pad = pad();
    let now = Instant::now();

    pad.handle(Activation::Tap(NUMERIC_TOGGLE), now);
    long_press(&mut pad, 2, now);

    assert!(pad.popover().is_none());
    assert_eq!(pad.buffer().text(), "");
}

#[test]
fn explicit_close_dismisses_without_insert() {
    let mut pad = pad();
    let now = Instant::now();

    long_press(&mut pad, 2, now);
    assert!(pad.popover().is_some());
    pad.handle(Activation::PopoverClose, now);

    assert!(pad.popover().is_none());
    assert_eq!(pad.buffer().text(), "");
}

#[test]
fn reopening_replaces_the_session() {
    let mut pad = pad();
    let now = Instant::now();

    long_press(&mut pad, 2, now);
    long_press(&mut pad, 8, now);

    let session = pad.popover().expect("one session");
    assert_eq!(session.key(), CharKey::new(8).unwrap());
    assert_eq!(session.candidates(), "tuv8");
}

#[test]
fn rows_never_exceed_four_entries() {
    let mut pad = pad();
    long_press(&mut pad, 1, Instant::now());

    let session = pad.popover().expect("session open");
    for row in session.rows() {
        assert!(row.len() <= 4);
    }
    let total: usize = session.rows().iter().map(Vec::len).sum();
    assert_eq!(total, session.candidates().chars().count());
}

#[test]
fn selection_is_a_literal_insert_not_a_cycle_commit() {
    let mut pad = pad();
    let base = Instant::now();

    // Start a cycle, then pick from the popover of the same key
    pad.handle(Activation::Tap(position_of(CharKey::new(2).unwrap())), base);
    assert_eq!(pad.buffer().text(), "a");

    long_press(&mut pad, 2, base + Duration::from_millis(100));
    pad.handle(Activation::PopoverSelect('c'), base + Duration::from_millis(200));

    // Appended, never replacing the cycled character
    assert_eq!(pad.buffer().text(), "ac");
}
