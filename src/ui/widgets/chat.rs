//! Transcript: labelled message blocks, pending spinner, error styling.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::transcript::{ChatEntry, Direction, Transcript};
use crate::ui::markdown;
use crate::ui::theme::{colors, MESSAGE_GAP, SPINNER};

/// Render the transcript and return the scroll offset actually used, so the
/// caller can keep the stored offset in sync with bottom-follow.
pub fn render(
    f: &mut Frame,
    transcript: &Transcript,
    area: ratatui::prelude::Rect,
    follow: bool,
    scroll: usize,
    tick: usize,
) -> usize {
    let spinner_char = SPINNER[tick % SPINNER.len()];
    let mut lines: Vec<Line> = Vec::new();

    for (i, entry) in transcript.entries().iter().enumerate() {
        if i > 0 {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        push_entry(&mut lines, entry, spinner_char);
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "How can we help?  1/2 quick actions · Enter to send",
            Style::default().fg(colors::MUTED),
        )));
    }

    let block = Block::default()
        .title(" Help desk ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    let effective = if follow { max_scroll } else { scroll.min(max_scroll) };
    let visible: Vec<Line> = lines.into_iter().skip(effective).take(height).collect();
    let para = Paragraph::new(visible)
        .style(Style::default().fg(colors::TEXT).bg(colors::BG))
        .wrap(Wrap { trim: false });
    f.render_widget(para, inner);
    effective
}

fn push_entry(lines: &mut Vec<Line<'static>>, entry: &ChatEntry, spinner_char: char) {
    let (label, label_style) = match entry.direction {
        Direction::Outgoing => (
            "You",
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Direction::Incoming => (
            "Support",
            Style::default()
                .fg(colors::ACCENT_SOFT)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if entry.pending {
        lines.push(Line::from(vec![
            Span::styled(format!("{label} "), label_style),
            Span::styled(format!("{spinner_char} "), Style::default().fg(colors::ACCENT)),
            Span::styled(
                entry.text.clone(),
                Style::default().fg(colors::TEXT_DIM).add_modifier(Modifier::ITALIC),
            ),
        ]));
        return;
    }

    let content_lines: Vec<Line<'static>> = if entry.error {
        entry
            .text
            .lines()
            .map(|s| Line::from(Span::styled(s.to_string(), Style::default().fg(colors::ERROR))))
            .collect()
    } else if entry.direction == Direction::Incoming {
        markdown::to_lines(&entry.text)
    } else {
        entry
            .text
            .lines()
            .map(|s| Line::from(Span::styled(s.to_string(), Style::default().fg(colors::TEXT))))
            .collect()
    };

    let mut it = content_lines.into_iter();
    if let Some(first) = it.next() {
        let mut spans = vec![Span::styled(format!("{label} "), label_style)];
        spans.extend(first);
        lines.push(Line::from(spans));
    }
    // Continuation lines hang under the label.
    let hang = " ".repeat(label.len() + 1);
    for line in it {
        let mut spans = vec![Span::raw(hang.clone())];
        spans.extend(line);
        lines.push(Line::from(spans));
    }
}
