//! Keybindings: Enter send/open, Esc close, Ctrl+P toggle, 1/2 quick actions.

use crate::actions::{Action, QuickAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

/// Map a key event to an action. Bare-key shortcuts (quick actions, j/k, q)
/// apply only while nothing is typed, so they never steal characters from
/// the input buffer.
pub fn key_to_action(
    event: &KeyEvent,
    panel_open: bool,
    input_visible: bool,
    input_empty: bool,
) -> Option<Action> {
    // Accept Press and Repeat; ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('p') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::TogglePanel);
    }

    if !panel_open {
        return match code {
            KeyCode::Enter | KeyCode::Char('o') => Some(Action::TogglePanel),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if code == KeyCode::Esc && mods.is_empty() {
        return Some(Action::ClosePanel);
    }
    if code == KeyCode::Enter && mods.is_empty() {
        return Some(Action::Submit);
    }
    if code == KeyCode::Char('l') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ClearInput);
    }
    if code == KeyCode::Backspace && mods.is_empty() {
        return Some(Action::Backspace);
    }

    if code == KeyCode::PageUp && mods.is_empty() {
        return Some(Action::ScrollPageUp);
    }
    if code == KeyCode::PageDown && mods.is_empty() {
        return Some(Action::ScrollPageDown);
    }
    if code == KeyCode::Up && mods.is_empty() {
        return Some(Action::ScrollUp);
    }
    if code == KeyCode::Down && mods.is_empty() {
        return Some(Action::ScrollDown);
    }

    if input_empty && mods.is_empty() {
        match code {
            KeyCode::Char('1') => return Some(Action::Quick(QuickAction::SupportService)),
            KeyCode::Char('2') => return Some(Action::Quick(QuickAction::IssueTicket)),
            KeyCode::Char('j') => return Some(Action::ScrollDown),
            KeyCode::Char('k') => return Some(Action::ScrollUp),
            _ => {}
        }
        if code == KeyCode::Char('q') && !input_visible {
            return Some(Action::Quit);
        }
    }

    // Remaining characters go to the input buffer (allow Alt for accented
    // chars; only block Ctrl/Cmd).
    if input_visible {
        if let KeyCode::Char(c) = code {
            if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) {
                return Some(Action::Char(c));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn enter_opens_when_closed_and_sends_when_open() {
        let enter = key(KeyCode::Enter);
        assert_eq!(key_to_action(&enter, false, true, true), Some(Action::TogglePanel));
        assert_eq!(key_to_action(&enter, true, true, true), Some(Action::Submit));
    }

    #[test]
    fn esc_closes_the_panel() {
        assert_eq!(
            key_to_action(&key(KeyCode::Esc), true, true, true),
            Some(Action::ClosePanel)
        );
    }

    #[test]
    fn ctrl_p_toggles_from_anywhere() {
        assert_eq!(key_to_action(&ctrl('p'), false, false, true), Some(Action::TogglePanel));
        assert_eq!(key_to_action(&ctrl('p'), true, true, false), Some(Action::TogglePanel));
    }

    #[test]
    fn digits_trigger_quick_actions_only_while_input_is_empty() {
        let one = key(KeyCode::Char('1'));
        assert_eq!(
            key_to_action(&one, true, false, true),
            Some(Action::Quick(QuickAction::SupportService))
        );
        assert_eq!(key_to_action(&one, true, true, false), Some(Action::Char('1')));
    }

    #[test]
    fn characters_are_dropped_while_input_is_hidden() {
        let x = key(KeyCode::Char('x'));
        assert_eq!(key_to_action(&x, true, false, true), None);
        assert_eq!(key_to_action(&x, true, true, true), Some(Action::Char('x')));
    }

    #[test]
    fn bare_q_quits_only_before_the_input_is_revealed() {
        let q = key(KeyCode::Char('q'));
        assert_eq!(key_to_action(&q, true, false, true), Some(Action::Quit));
        assert_eq!(key_to_action(&q, true, true, true), Some(Action::Char('q')));
        assert_eq!(key_to_action(&q, false, false, true), Some(Action::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut enter = key(KeyCode::Enter);
        enter.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&enter, true, true, true), None);
    }
}
