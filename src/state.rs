//! App state: transcript, input buffer, panel/input/button visibility.

use crate::config::PanelVariant;
use crate::transcript::Transcript;

/// Everything the renderer reads. Mutated only from the UI thread.
#[derive(Clone, Debug)]
pub struct AppState {
    pub transcript: Transcript,
    pub input_buffer: String,
    pub input_cursor: usize,
    /// The panel starts open; the collapsed launcher is reachable via
    /// toggle/close.
    pub panel_open: bool,
    /// One-way latch in the gated variant; always true in classic.
    pub input_visible: bool,
    pub quick_actions_visible: bool,
    /// Dismiss the button row after a quick action (gated variant only).
    pub dismiss_buttons_on_use: bool,
    /// Manual scroll offset into the rendered transcript lines.
    pub scroll: usize,
    /// When set, the view tracks the newest entry; any transcript mutation
    /// re-engages it.
    pub follow: bool,
}

impl AppState {
    pub fn new(variant: PanelVariant) -> Self {
        let gated = variant == PanelVariant::Gated;
        Self {
            transcript: Transcript::default(),
            input_buffer: String::new(),
            input_cursor: 0,
            panel_open: true,
            input_visible: !gated,
            quick_actions_visible: true,
            dismiss_buttons_on_use: gated,
            scroll: 0,
            follow: true,
        }
    }

    /// Latch the input visible. Never reverts within a session.
    pub fn reveal_input(&mut self) {
        self.input_visible = true;
    }

    pub fn input_buffer(&self) -> &str {
        self.input_buffer.as_str()
    }

    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_variant_starts_with_hidden_input() {
        let state = AppState::new(PanelVariant::Gated);
        assert!(!state.input_visible);
        assert!(state.quick_actions_visible);
        assert!(state.dismiss_buttons_on_use);
        assert!(state.panel_open);
    }

    #[test]
    fn classic_variant_starts_with_visible_input() {
        let state = AppState::new(PanelVariant::Classic);
        assert!(state.input_visible);
        assert!(!state.dismiss_buttons_on_use);
    }

    #[test]
    fn reveal_input_is_a_one_way_latch() {
        let mut state = AppState::new(PanelVariant::Gated);
        state.reveal_input();
        state.reveal_input();
        assert!(state.input_visible);
    }
}
