//! Status line: reply-in-flight spinner left, key hints right.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    awaiting_replies: usize,
    spinner_char: char,
) {
    let left = match awaiting_replies {
        0 => " Ready".to_string(),
        1 => format!(" {spinner_char} Waiting for a reply"),
        n => format!(" {spinner_char} Waiting for {n} replies"),
    };
    let right = " ↑↓ scroll  Esc close  Ctrl+P toggle  Enter send ";
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + right.chars().count());
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let para = Paragraph::new(Span::styled(
        line,
        Style::default().fg(colors::MUTED).bg(colors::ELEVATED),
    ));
    f.render_widget(para, area);
}
