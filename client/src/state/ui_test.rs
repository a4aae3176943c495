use super::*;

fn open() -> UiState {
    UiState { side_panel_open: true }
}

// =============================================================
// Breakpoint
// =============================================================

#[test]
fn breakpoint_is_inclusive() {
    assert!(is_small_viewport(1023.0));
    assert!(is_small_viewport(375.0));
    assert!(!is_small_viewport(1024.0));
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_panel_closed() {
    assert!(!UiState::default().side_panel_open);
}

#[test]
fn toggle_flips_panel() {
    let mut state = UiState::default();
    state.toggle_side_panel();
    assert!(state.side_panel_open);
    state.toggle_side_panel();
    assert!(!state.side_panel_open);
}

#[test]
fn outside_click_closes_on_small_viewport() {
    let mut state = open();
    state.on_outside_pointer_down(800.0);
    assert!(!state.side_panel_open);
}

#[test]
fn outside_click_ignored_on_wide_viewport() {
    let mut state = open();
    state.on_outside_pointer_down(1280.0);
    assert!(state.side_panel_open);
}

#[test]
fn resize_past_breakpoint_closes() {
    let mut state = open();
    state.on_resize(1023.0);
    assert!(state.side_panel_open);
    state.on_resize(1024.0);
    assert!(!state.side_panel_open);
}

#[test]
fn scroll_lock_only_when_open_and_small() {
    assert!(open().scroll_locked(600.0));
    assert!(!open().scroll_locked(1440.0));
    assert!(!UiState::default().scroll_locked(600.0));
}

#[test]
fn menu_icon_follows_panel() {
    let mut ui = UiState::default();
    assert_eq!(ui.menu_icon(), "\u{2630}");
    ui.toggle_side_panel();
    assert_eq!(ui.menu_icon(), "\u{2715}");
    ui.close_side_panel();
    assert_eq!(ui.menu_icon(), "\u{2630}");
}
