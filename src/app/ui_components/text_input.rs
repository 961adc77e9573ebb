use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use tui_textarea::TextArea;

const MAX_INPUT_LEN: usize = 250;
const PROMPT: &str = "❯ ";

/// Single-line text input used for naming files and directories. Wraps
/// tui-textarea and keeps it single-line by swallowing Enter.
#[derive(Debug, Clone)]
pub struct TextInput {
    textarea: TextArea<'static>,
    focused: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().bg(Color::White).fg(Color::Black));
        Self {
            textarea,
            focused: false,
        }
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn value(&self) -> &str {
        self.textarea.lines().first().map_or("", |line| line.as_str())
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea
            .set_cursor_style(Style::default().bg(Color::White).fg(Color::Black));
    }

    /// Pre-populates the field, cursor at the end (rename starts from the
    /// existing name).
    pub fn set_value(&mut self, value: &str) {
        self.clear();
        self.textarea.insert_str(value);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.focused {
            return;
        }
        // Newlines and oversized values never reach the filesystem layer.
        if key.code == KeyCode::Enter {
            return;
        }
        if let KeyCode::Char(_) = key.code {
            if self.value().chars().count() >= MAX_INPUT_LEN {
                return;
            }
        }
        self.textarea.input(key);
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt_width = PROMPT.chars().count() as u16;
        if area.width <= prompt_width {
            return;
        }
        buf.set_string(area.x, area.y, PROMPT, Style::default().fg(Color::Blue));
        let field = Rect::new(
            area.x + prompt_width,
            area.y,
            area.width - prompt_width,
            1,
        );
        self.textarea.render(field, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_does_not_insert_a_newline() {
        let mut input = TextInput::new();
        input.focus();
        input.handle_key(key(KeyCode::Char('a')));
        input.handle_key(key(KeyCode::Enter));
        input.handle_key(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn set_value_replaces_previous_contents() {
        let mut input = TextInput::new();
        input.focus();
        input.handle_key(key(KeyCode::Char('x')));
        input.set_value("notes.md");
        assert_eq!(input.value(), "notes.md");
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "notes.m");
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let mut input = TextInput::new();
        input.focus();
        for _ in 0..MAX_INPUT_LEN {
            input.handle_key(key(KeyCode::Char('é')));
        }
        input.handle_key(key(KeyCode::Char('x')));
        assert_eq!(input.value().chars().count(), MAX_INPUT_LEN);
        assert!(!input.value().ends_with('x'));
    }

    #[test]
    fn ignores_keys_while_blurred() {
        let mut input = TextInput::new();
        input.handle_key(key(KeyCode::Char('a')));
        assert_eq!(input.value(), "");
    }
}
