//! Collapsed-state launcher: the floating toggle box in the corner.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

const LABEL: &str = "💬 Chat";
const HINT: &str = "⏎ open";
/// Reserve +1 for 💬 (wide in most terminals) so the border doesn't clip.
const EMOJI_WIDTH_SLOP: usize = 1;

pub const WIDTH: u16 = 22;
pub const HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect) {
    let inner = (area.width as usize).saturating_sub(2);
    let dash_count = inner;
    let content_len =
        LABEL.chars().count() + EMOJI_WIDTH_SLOP + HINT.chars().count() + 2;
    let pad = inner.saturating_sub(content_len);

    let border = Style::default().fg(colors::BORDER);
    let lines = vec![
        Line::from(Span::styled(format!("╭{}╮", "─".repeat(dash_count)), border)),
        Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(
                LABEL,
                Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(HINT, Style::default().fg(colors::MUTED)),
            Span::styled(" │", border),
        ]),
        Line::from(Span::styled(format!("╰{}╯", "─".repeat(dash_count)), border)),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
