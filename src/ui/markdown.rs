//! Reply text to ratatui lines: bold, inline code, bullet/numbered lists.

use pulldown_cmark::{Event, Options, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::colors;

/// Convert a reply string to owned Lines. Replies are short support texts, so
/// only the inline constructs they actually use are styled; anything else
/// falls through as plain text.
pub fn to_lines(text: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut bold = false;
    let mut list_depth: usize = 0;
    let mut ordered_index: Option<u64> = None;

    for event in Parser::new_ext(text, Options::empty()) {
        match event {
            Event::Start(Tag::List(start)) => {
                flush(&mut current, &mut lines);
                list_depth += 1;
                ordered_index = start;
            }
            Event::End(Tag::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    ordered_index = None;
                }
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                let bullet = if let Some(idx) = ordered_index {
                    let s = format!("{indent}{idx}. ");
                    ordered_index = Some(idx + 1);
                    s
                } else {
                    format!("{indent}• ")
                };
                current.push(Span::styled(bullet, Style::default().fg(colors::ACCENT)));
            }
            Event::End(Tag::Item) => flush(&mut current, &mut lines),

            Event::Text(t) => {
                let style = if bold {
                    Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::TEXT)
                };
                current.push(Span::styled(t.to_string(), style));
            }
            Event::Code(t) => {
                current.push(Span::styled(
                    format!(" {} ", t),
                    Style::default().fg(colors::ACCENT).bg(colors::CODE_BG),
                ));
            }

            Event::Start(Tag::Strong) | Event::Start(Tag::Emphasis) => bold = true,
            Event::End(Tag::Strong) | Event::End(Tag::Emphasis) => bold = false,

            Event::SoftBreak | Event::HardBreak | Event::End(Tag::Paragraph) => {
                flush(&mut current, &mut lines);
            }

            _ => {}
        }
    }
    flush(&mut current, &mut lines);
    if lines.is_empty() {
        lines.push(Line::from(Span::raw("")));
    }
    lines
}

fn flush(current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>) {
    if !current.is_empty() {
        lines.push(Line::from(std::mem::take(current)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn plain_text_survives_untouched() {
        let lines = to_lines("Your ticket has been opened.");
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "Your ticket has been opened.");
    }

    #[test]
    fn list_items_get_bullets() {
        let lines = to_lines("Try this:\n\n- restart it\n- call us");
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert!(texts.contains(&"• restart it".to_string()));
        assert!(texts.contains(&"• call us".to_string()));
    }

    #[test]
    fn empty_reply_yields_one_blank_line() {
        let lines = to_lines("");
        assert_eq!(lines.len(), 1);
    }
}
