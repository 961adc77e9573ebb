use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::fs::listing::DirectoryEntry;

/// How long a status banner stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(3);

const SELECTED_STYLE: Style = Style::new()
    .fg(Color::Blue)
    .add_modifier(Modifier::REVERSED);
const STATUS_LINE_STYLE: Style = Style::new().fg(Color::DarkGray);
const INFO_STYLE: Style = Style::new().fg(Color::Green);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const FILTER_STYLE: Style = Style::new().fg(Color::Yellow);

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    is_error: bool,
    set_at: Instant,
}

/// Selectable, scrollable directory listing with an incremental filter and
/// a transient status banner. Owns the cursor; all filesystem semantics
/// stay with the state machine.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<DirectoryEntry>,
    cursor: usize,
    filter: String,
    filtering: bool,
    status: Option<StatusMessage>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the listing wholesale and clamps the cursor back into range.
    pub fn set_entries(&mut self, entries: Vec<DirectoryEntry>) {
        self.entries = entries;
        self.clamp_cursor();
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directory the current listing was built for.
    pub fn current_directory(&self) -> Option<&Path> {
        self.entries
            .first()
            .map(|entry| entry.current_directory.as_path())
    }

    fn visible(&self) -> Vec<usize> {
        if self.filter.is_empty() {
            return (0..self.entries.len()).collect();
        }
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.short_name.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect()
    }

    fn clamp_cursor(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    pub fn selected(&self) -> Option<&DirectoryEntry> {
        let visible = self.visible();
        visible.get(self.cursor).map(|&index| &self.entries[index])
    }

    /// Cursor position and total item count, for the status bar.
    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor, self.visible().len())
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.visible().len();
        if count > 0 && self.cursor < count - 1 {
            self.cursor += 1;
        }
    }

    pub fn go_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.cursor = self.visible().len().saturating_sub(1);
    }

    /// True while the filter line is being edited. Mode keybindings are
    /// suspended for the duration.
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn filter_value(&self) -> &str {
        &self.filter
    }

    /// Feeds one keystroke to the filter line: `/` begins editing, Enter
    /// commits the filter, Esc abandons it, anything printable extends it.
    pub fn handle_filter_key(&mut self, key: KeyEvent) {
        if !self.filtering {
            if key.code == KeyCode::Char('/') {
                self.filtering = true;
                self.filter.clear();
                self.cursor = 0;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.filtering = false;
                self.filter.clear();
                self.cursor = 0;
            }
            KeyCode::Enter => {
                self.filtering = false;
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.cursor = 0;
            }
            KeyCode::Char(c) => {
                self.filter.push(c);
                self.cursor = 0;
            }
            _ => {}
        }
        self.clamp_cursor();
    }

    /// Clears any committed filter (used by the escape/reset path).
    pub fn clear_filter(&mut self) {
        self.filtering = false;
        if !self.filter.is_empty() {
            self.filter.clear();
            self.cursor = 0;
        }
    }

    pub fn set_info_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            set_at: Instant::now(),
        });
    }

    pub fn set_error_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            set_at: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub fn status_expired(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|status| status.set_at.elapsed() >= STATUS_TTL)
    }

    pub fn expire_status(&mut self) {
        if self.status_expired() {
            self.status = None;
        }
    }

    fn banner_line(&self) -> Option<Line<'_>> {
        if self.filtering {
            return Some(Line::from(Span::styled(
                format!("/{}", self.filter),
                FILTER_STYLE,
            )));
        }
        self.status.as_ref().map(|status| {
            let style = if status.is_error { ERROR_STYLE } else { INFO_STYLE };
            Line::from(Span::styled(status.text.as_str(), style))
        })
    }
}

impl Widget for &EntryList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Bottom row is reserved for the filter line / status banner.
        let banner_row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let list_area = Rect::new(area.x, area.y, area.width, area.height - 1);

        let visible = self.visible();
        // Two rows per entry: name, then a dimmed metadata line.
        let rows_per_entry = 2u16;
        let page = (list_area.height / rows_per_entry).max(1) as usize;
        let first = if self.cursor >= page {
            self.cursor + 1 - page
        } else {
            0
        };

        let mut lines = Vec::with_capacity(page * 2);
        for (row, &index) in visible.iter().enumerate().skip(first).take(page) {
            let entry = &self.entries[index];
            let name_style = if row == self.cursor {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(entry.name.as_str(), name_style)));
            lines.push(Line::from(Span::styled(
                format!("  {}", entry.status_line),
                STATUS_LINE_STYLE,
            )));
        }

        if visible.is_empty() && !self.filter.is_empty() {
            lines.push(Line::from(Span::styled(
                "no entries match the filter",
                STATUS_LINE_STYLE,
            )));
        }

        Paragraph::new(lines).render(list_area, buf);

        if let Some(banner) = self.banner_line() {
            Paragraph::new(banner).render(banner_row, buf);
        }
    }
}
