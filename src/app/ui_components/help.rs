use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::event_sync_subscriptions::bindings;

const KEY_STYLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// Full-pane keybinding reference, toggled with `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Help;

impl Widget for &Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = bindings()
            .iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!("{keys:>12}"), KEY_STYLE),
                    Span::raw("  "),
                    Span::raw(*description),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" keys "))
            .render(area, buf);
    }
}
