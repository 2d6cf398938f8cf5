//! Scroll tests

use super::offline_state;

#[test]
fn test_starts_pinned_to_bottom() {
    let state = offline_state();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_up_resolves_bottom_pin() {
    let mut state = offline_state();
    state.max_scroll.set(10);

    state.scroll_up();
    assert_eq!(state.scroll_offset, 9);
    state.scroll_up();
    assert_eq!(state.scroll_offset, 8);
}

#[test]
fn test_scroll_up_saturates_at_top() {
    let mut state = offline_state();
    state.max_scroll.set(10);
    state.scroll_to_top();

    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_scroll_down_repins_at_bottom() {
    let mut state = offline_state();
    state.max_scroll.set(3);
    state.scroll_offset = 1;

    state.scroll_down();
    assert_eq!(state.scroll_offset, 2);
    state.scroll_down();
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_to_bottom() {
    let mut state = offline_state();
    state.scroll_offset = 4;
    state.scroll_to_bottom();
    assert_eq!(state.scroll_offset, u16::MAX);
}
