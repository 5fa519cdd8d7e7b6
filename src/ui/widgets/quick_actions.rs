//! Quick-action button row: two canned flows behind single keys.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const BUTTONS: &[(&str, &str)] = &[("1", "Support Service"), ("2", "Issue a Ticket")];

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, label)) in BUTTONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(colors::TEXT_DIM),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}
