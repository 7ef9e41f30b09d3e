//! Single-line text input widget.
//!
//! Fully supports UTF-8 input including multi-byte characters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single-line text input with cursor.
///
/// The cursor position is tracked as a character index (not byte index)
/// to properly handle UTF-8 multi-byte characters.
#[derive(Debug, Clone)]
pub struct TextInput {
    content: String,
    /// Cursor position as character index (0 = before first char)
    cursor: usize,
    label: String,
}

impl TextInput {
    /// Create a new text input with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            label: label.into(),
        }
    }

    /// Set initial content.
    #[must_use]
    pub fn with_initial(mut self, value: impl Into<String>) -> Self {
        self.content = value.into();
        self.cursor = self.content.chars().count();
        self
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the byte index for the current character cursor position.
    fn cursor_byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Returns the character count of the content.
    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert text at the current cursor position.
    ///
    /// Used for paste operations. Multi-line content is flattened
    /// (newlines replaced with spaces) since this is a single-line input.
    pub fn insert_text(&mut self, text: &str) {
        // Flatten to single line - replace newlines with spaces
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        let byte_idx = self.cursor_byte_index();
        self.content.insert_str(byte_idx, &flattened);
        self.cursor += flattened.chars().count();
    }

    /// Handle a key event.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if c == 'u' {
                        // Ctrl+U: Clear line
                        self.content.clear();
                        self.cursor = 0;
                        return true;
                    }
                    return false; // Let other Ctrl combinations bubble up
                }
                // Regular character input
                let byte_idx = self.cursor_byte_index();
                self.content.insert(byte_idx, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.delete_char_before_cursor();
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let byte_idx = self.cursor_byte_index();
                    self.content.remove(byte_idx);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    /// Deletes the character before the cursor and moves cursor back.
    fn delete_char_before_cursor(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.cursor_byte_index();
            self.content.remove(byte_idx);
        }
    }

    /// Render the widget.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        let inner = block.inner(area);
        block.render(area, buf);

        // Render content with cursor
        if focused {
            let byte_idx = self.cursor_byte_index();
            let (before, after) = self.content.split_at(byte_idx);
            let cursor_char = after.chars().next().unwrap_or(' ');
            let after_cursor: String = after.chars().skip(1).collect();

            let line = Line::from(vec![
                Span::raw(before),
                Span::styled(
                    cursor_char.to_string(),
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(after_cursor),
            ]);

            Paragraph::new(line).render(inner, buf);
        } else {
            Paragraph::new(self.content.as_str()).render(inner, buf);
        }
    }
}
