//! Floating panel placement and vertical regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    BUTTONS_HEIGHT, INPUT_HEIGHT, MARGIN_X, MIN_CHAT_LINES, PANEL_MAX_HEIGHT, PANEL_MAX_WIDTH,
    STATUS_HEIGHT,
};

#[derive(Clone, Debug)]
pub struct PanelRegions {
    pub chat: Rect,
    /// Present only while the quick-action row is shown.
    pub buttons: Option<Rect>,
    pub input: Rect,
    pub status: Rect,
}

/// Anchor the panel to the bottom-right of the terminal, the way the web
/// widget floats above its host page.
pub fn panel_rect(area: Rect) -> Rect {
    let width = area.width.min(PANEL_MAX_WIDTH);
    let height = area.height.min(PANEL_MAX_HEIGHT);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

/// Bottom-right corner box for the collapsed launcher.
pub fn launcher_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

pub fn compute(panel: Rect, buttons_visible: bool) -> PanelRegions {
    let mut constraints = vec![Constraint::Min(MIN_CHAT_LINES)];
    if buttons_visible {
        constraints.push(Constraint::Length(BUTTONS_HEIGHT));
    }
    constraints.push(Constraint::Length(INPUT_HEIGHT));
    constraints.push(Constraint::Length(STATUS_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(panel);

    let mut idx = 0;
    let chat = Rect {
        x: chunks[idx].x + MARGIN_X,
        y: chunks[idx].y,
        width: chunks[idx].width.saturating_sub(2 * MARGIN_X),
        height: chunks[idx].height,
    };
    idx += 1;
    let buttons = if buttons_visible {
        let r = chunks[idx];
        idx += 1;
        Some(r)
    } else {
        None
    };
    let input = chunks[idx];
    let status = chunks[idx + 1];

    PanelRegions {
        chat,
        buttons,
        input,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_hugs_the_bottom_right_corner() {
        let area = Rect::new(0, 0, 120, 40);
        let panel = panel_rect(area);
        assert_eq!(panel.x + panel.width, 120);
        assert_eq!(panel.y + panel.height, 40);
        assert!(panel.width <= PANEL_MAX_WIDTH);
        assert!(panel.height <= PANEL_MAX_HEIGHT);
    }

    #[test]
    fn panel_never_exceeds_a_small_terminal() {
        let area = Rect::new(0, 0, 30, 8);
        let panel = panel_rect(area);
        assert_eq!(panel.width, 30);
        assert_eq!(panel.height, 8);
    }

    #[test]
    fn button_row_region_comes_and_goes() {
        let panel = Rect::new(0, 0, 60, 20);
        let with = compute(panel, true);
        assert!(with.buttons.is_some());
        let without = compute(panel, false);
        assert!(without.buttons.is_none());
        // The transcript absorbs the freed rows.
        assert!(without.chat.height > with.chat.height);
    }
}
