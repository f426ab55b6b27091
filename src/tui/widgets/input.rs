//! Text input widget
//!
//! A single-line text field with a character-indexed cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.content.remove(idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));
        }

        let input_start = area.x + label_width.min(area.width);
        let input_width = area.width.saturating_sub(label_width) as usize;

        let (display_text, text_style) = if self.content.is_empty() && !self.focused {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (self.content.as_str(), Style::default().fg(Color::White))
        } else {
            (self.content.as_str(), Style::default().fg(Color::Yellow))
        };

        buf.set_stringn(input_start, area.y, display_text, input_width, text_style);

        if self.focused {
            // Text may be far wider than the terminal; the cursor is only
            // drawn while it falls inside the area
            let cursor_x = input_start as usize + self.cursor;
            if cursor_x < area.right() as usize {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x as u16,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Tea".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Tea");

        input.backspace();
        assert_eq!(input.value(), "Te");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("Caf");
        input.insert('é');
        input.move_left();
        input.insert('f');
        assert_eq!(input.value(), "Caffé");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Caff");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new().content("12.50");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "2.50");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("abc");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_render_shows_label_and_content() {
        let input = TextInput::new().label("Amount").content("9.99");
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let rendered: String = (0..20).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(rendered.starts_with("Amount: 9.99"));
    }

    #[test]
    fn test_render_text_wider_than_terminal() {
        let mut input = TextInput::new().label("Description");
        input.focused = true;
        for _ in 0..70_000 {
            input.insert('x');
        }

        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        assert_eq!(buf[(13, 0)].symbol(), "x");
        assert_eq!(buf[(79, 0)].symbol(), "x");

        // Cursor back inside the visible part is drawn again
        input.move_start();
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);
        assert_eq!(buf[(13, 0)].bg, Color::Cyan);
    }
}
