//! Local UI chrome state for the home shell.
//!
//! DESIGN
//! ======
//! Keeps side-panel behavior out of the components so the breakpoint rules can
//! be exercised without a browser. Components feed viewport widths and click
//! outcomes in; the struct decides whether the panel stays open.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Widest viewport, in CSS pixels, treated as a small screen.
pub const SMALL_VIEWPORT_MAX_WIDTH: f64 = 1023.0;

#[must_use]
pub fn is_small_viewport(width: f64) -> bool {
    width <= SMALL_VIEWPORT_MAX_WIDTH
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub side_panel_open: bool,
}

impl UiState {
    pub fn toggle_side_panel(&mut self) {
        self.side_panel_open = !self.side_panel_open;
    }

    pub fn close_side_panel(&mut self) {
        self.side_panel_open = false;
    }

    /// Pointer-down outside both the panel and its toggle.
    pub fn on_outside_pointer_down(&mut self, viewport_width: f64) {
        if is_small_viewport(viewport_width) {
            self.close_side_panel();
        }
    }

    pub fn on_resize(&mut self, viewport_width: f64) {
        if !is_small_viewport(viewport_width) {
            self.close_side_panel();
        }
    }

    /// Glyph for the header toggle: a close mark while the panel is open.
    #[must_use]
    pub fn menu_icon(&self) -> &'static str {
        if self.side_panel_open { "\u{2715}" } else { "\u{2630}" }
    }

    /// Whether the page body should stop scrolling.
    #[must_use]
    pub fn scroll_locked(&self, viewport_width: f64) -> bool {
        self.side_panel_open && is_small_viewport(viewport_width)
    }
}
