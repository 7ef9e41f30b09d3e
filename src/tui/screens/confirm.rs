//! Confirmation dialog.
//!
//! A simple yes/no modal overlay for confirming destructive actions.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::{event::TuiEvent, AppResult};

use super::centered_rect;

/// Confirmation dialog state.
pub struct ConfirmDialog {
    message: String,
    selected: bool, // true = Yes, false = No
}

impl ConfirmDialog {
    /// Create a new confirmation dialog.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            selected: false, // Default to "No" for safety
        }
    }

    /// Handle an event.
    ///
    /// Returns `Some(AppResult::Done(confirmed))` on a decision,
    /// `Some(AppResult::Cancelled)` on Esc/Ctrl+C, `None` to keep showing.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<bool>> {
        match event {
            TuiEvent::Key(key) => {
                // Handle Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Some(AppResult::Cancelled);
                }

                match key.code {
                    // Quick keys for Yes/No
                    KeyCode::Char('y' | 'Y') => Some(AppResult::Done(true)),
                    KeyCode::Char('n' | 'N') => Some(AppResult::Done(false)),

                    // Arrow navigation
                    KeyCode::Left | KeyCode::Char('h') => {
                        self.selected = true; // Yes is on left
                        None
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        self.selected = false; // No is on right
                        None
                    }
                    KeyCode::Tab => {
                        self.selected = !self.selected;
                        None
                    }

                    KeyCode::Enter => Some(AppResult::Done(self.selected)),
                    KeyCode::Esc => Some(AppResult::Cancelled),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Calculate the popup dimensions based on content.
    #[allow(clippy::cast_possible_truncation)]
    fn popup_size(&self) -> (u16, u16) {
        let msg_width = self.message.width() as u16;
        // Width: message width + padding, minimum for buttons
        let width = msg_width.max(20) + 4;
        // Height: message + buttons + borders
        let height = 5;
        (width, height)
    }

    /// Render the dialog as a centered popup over `area`.
    pub fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.popup_size();
        let popup_area = centered_rect(width, height, area);

        // Dim the background
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::DIM),
                    );
                }
            }
        }

        // Clear the popup area
        Clear.render(popup_area, buf);

        // Render the popup block
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm ");

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        // Render message
        let msg = Paragraph::new(self.message.as_str());
        let msg_area = Rect::new(inner.x, inner.y, inner.width, 1);
        msg.render(msg_area, buf);

        // Render buttons
        let yes_style = if self.selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let no_style = if self.selected {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        };

        let buttons = Line::from(vec![
            Span::raw("  "),
            Span::styled(if self.selected { "[Yes]" } else { " Yes " }, yes_style),
            Span::raw("   "),
            Span::styled(if self.selected { " No " } else { "[No]" }, no_style),
        ]);

        let buttons_para = Paragraph::new(buttons);
        let buttons_area = Rect::new(inner.x, inner.y + 2, inner.width, 1);
        buttons_para.render(buttons_area, buf);
    }
}
