//! Bounded integer slider widget.
//!
//! Steps a score through its 1-10 range with Left/Right (or h/l),
//! jumps to the bounds with Home/End, and accepts direct digit entry
//! ('0' selects 10).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::item::Score;

/// Horizontal slider over the score range.
#[derive(Debug, Clone)]
pub struct Slider {
    value: Score,
    label: String,
}

impl Slider {
    /// Create a new slider with the given label and starting value.
    pub fn new(label: impl Into<String>, value: Score) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Current value.
    pub const fn value(&self) -> Score {
        self.value
    }

    /// Set the value directly.
    pub fn set_value(&mut self, value: Score) {
        self.value = value;
    }

    /// Handle a key event.
    ///
    /// Returns `true` if the event changed or reasserted the value.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.value = self.value.decrement();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.value = self.value.increment();
                true
            }
            KeyCode::Home => {
                self.value = Score::MIN;
                true
            }
            KeyCode::End => {
                self.value = Score::MAX;
                true
            }
            KeyCode::Char(c @ '0'..='9') => {
                // '0' selects the top of the range
                let digit = if c == '0' {
                    Score::MAX.get()
                } else {
                    c as u8 - b'0'
                };
                if let Some(value) = Score::new(digit) {
                    self.value = value;
                }
                true
            }
            _ => false,
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
            .title(format!(" {}: {}/{} ", self.label, self.value, Score::MAX));

        let inner = block.inner(area);
        block.render(area, buf);

        let filled = usize::from(self.value.get());
        let total = usize::from(Score::MAX.get());

        let track_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let line = Line::from(vec![
            Span::styled("\u{25ae}".repeat(filled), track_style),
            Span::styled(
                "\u{25af}".repeat(total - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {}", self.value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn slider() -> Slider {
        Slider::new("Impact", Score::DEFAULT)
    }

    #[test]
    fn test_steps_within_bounds() {
        let mut slider = slider();
        slider.handle_key(key(KeyCode::Right));
        assert_eq!(slider.value().get(), 6);
        slider.handle_key(key(KeyCode::Left));
        slider.handle_key(key(KeyCode::Left));
        assert_eq!(slider.value().get(), 4);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let mut slider = Slider::new("Effort", Score::MAX);
        slider.handle_key(key(KeyCode::Right));
        assert_eq!(slider.value(), Score::MAX);

        slider.set_value(Score::MIN);
        slider.handle_key(key(KeyCode::Left));
        assert_eq!(slider.value(), Score::MIN);
    }

    #[test]
    fn test_home_end_jump_to_bounds() {
        let mut slider = slider();
        slider.handle_key(key(KeyCode::End));
        assert_eq!(slider.value(), Score::MAX);
        slider.handle_key(key(KeyCode::Home));
        assert_eq!(slider.value(), Score::MIN);
    }

    #[test]
    fn test_digit_entry() {
        let mut slider = slider();
        slider.handle_key(key(KeyCode::Char('7')));
        assert_eq!(slider.value().get(), 7);
        slider.handle_key(key(KeyCode::Char('0')));
        assert_eq!(slider.value(), Score::MAX);
    }

    #[test]
    fn test_unhandled_key_ignored() {
        let mut slider = slider();
        assert!(!slider.handle_key(key(KeyCode::Tab)));
        assert_eq!(slider.value(), Score::DEFAULT);
    }
}
