use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

const MODE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Blue);
const PATH_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const SELECTION_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Gray);
const POSITION_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Blue);

/// Bottom status bar: mode label, working directory, selected entry, and
/// cursor position, each in its own colored section.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub mode_label: String,
    pub directory: String,
    pub selection: String,
    pub cursor: usize,
    pub total: usize,
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mode = format!(" {} ", self.mode_label);
        let position = format!(
            " {}/{} ",
            if self.total == 0 { 0 } else { self.cursor + 1 },
            self.total
        );
        let sections = Layout::horizontal([
            Constraint::Length(mode.chars().count() as u16),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(position.chars().count() as u16),
        ])
        .split(area);

        Paragraph::new(mode).style(MODE_STYLE).render(sections[0], buf);
        Paragraph::new(format!(" {}", self.directory))
            .style(PATH_STYLE)
            .render(sections[1], buf);
        Paragraph::new(format!(" {}", self.selection))
            .style(SELECTION_STYLE)
            .render(sections[2], buf);
        Paragraph::new(position)
            .style(POSITION_STYLE)
            .render(sections[3], buf);
    }
}
