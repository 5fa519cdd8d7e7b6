//! Input bar: prompt and cursor, or a hint line while the input is gated.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const PROMPT: &str = " ▸ ";

pub fn render(
    f: &mut Frame,
    buffer: &str,
    cursor_pos: usize,
    visible: bool,
    area: ratatui::prelude::Rect,
) {
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !visible {
        let hint = Paragraph::new(Line::from(Span::styled(
            " Pick an option above to start chatting",
            Style::default().fg(colors::MUTED),
        )));
        f.render_widget(hint, inner);
        return;
    }

    let line = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(buffer, Style::default().fg(colors::TEXT)),
    ]);
    f.render_widget(Paragraph::new(line), inner);

    let typed = buffer
        .get(..cursor_pos)
        .map(|s| s.chars().count())
        .unwrap_or(0) as u16;
    let x = (inner.x + PROMPT.chars().count() as u16 + typed)
        .min(inner.x + inner.width.saturating_sub(1));
    f.set_cursor_position(Position { x, y: inner.y });
}
