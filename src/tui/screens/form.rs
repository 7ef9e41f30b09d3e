//! Add/edit item form.
//!
//! A modal overlay with a name field and two score sliders. The same form
//! serves "add" (defaults) and "edit" (pre-filled from the item's draft);
//! the caller stages edit keystrokes into the store's draft machinery.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::{
    item::Score,
    tui::{
        event::TuiEvent,
        widgets::{Slider, TextInput},
    },
};

use super::centered_rect;

/// Popup width in terminal cells.
const FORM_WIDTH: u16 = 46;

/// Popup height: name + two sliders + hint, plus borders.
const FORM_HEIGHT: u16 = 13;

/// Which field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Impact,
    Effort,
}

impl Field {
    const fn next(self) -> Self {
        match self {
            Self::Name => Self::Impact,
            Self::Impact => Self::Effort,
            Self::Effort => Self::Name,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Effort,
            Self::Impact => Self::Name,
            Self::Effort => Self::Impact,
        }
    }
}

/// Values captured by the form.
///
/// The name is passed through exactly as typed; validation only checks
/// that it is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutput {
    pub name: String,
    pub impact: Score,
    pub effort: Score,
}

/// Outcome of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult {
    /// User confirmed with a valid name
    Submit(FormOutput),
    /// User dismissed the form
    Cancel,
}

/// The add/edit item form.
pub struct ItemForm {
    name_input: TextInput,
    impact_slider: Slider,
    effort_slider: Slider,
    focus: Field,
    is_editing: bool,
}

impl ItemForm {
    /// Create a form with the defaults for a pending new item.
    pub fn new() -> Self {
        Self::with_values("", Score::DEFAULT, Score::DEFAULT)
    }

    /// Create a form pre-filled with the given values.
    pub fn with_values(name: &str, impact: Score, effort: Score) -> Self {
        Self {
            name_input: TextInput::new("Name").with_initial(name),
            impact_slider: Slider::new("Impact", impact),
            effort_slider: Slider::new("Effort", effort),
            focus: Field::Name,
            is_editing: false,
        }
    }

    /// Mark this form as editing mode (changes header text).
    #[must_use]
    pub const fn for_editing(mut self) -> Self {
        self.is_editing = true;
        self
    }

    /// Current field values, whether or not they would pass validation.
    pub fn values(&self) -> FormOutput {
        FormOutput {
            name: self.name_input.content().to_string(),
            impact: self.impact_slider.value(),
            effort: self.effort_slider.value(),
        }
    }

    fn name_valid(&self) -> bool {
        !self.name_input.content().trim().is_empty()
    }

    /// Handle an event.
    ///
    /// Returns `Some(FormResult)` when the form is done, `None` otherwise.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<FormResult> {
        match event {
            TuiEvent::Paste(content) => {
                if self.focus == Field::Name {
                    self.name_input.insert_text(content);
                }
                None
            }
            TuiEvent::Key(key) => self.handle_key(*key),
            TuiEvent::Resize(..) => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<FormResult> {
        match key.code {
            KeyCode::Esc => return Some(FormResult::Cancel),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(FormResult::Cancel);
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return None;
            }
            KeyCode::Enter => {
                if self.name_valid() {
                    return Some(FormResult::Submit(self.values()));
                }
                // Refused: send the user back to the name field to fix it
                self.focus = Field::Name;
                return None;
            }
            _ => {}
        }

        match self.focus {
            Field::Name => {
                self.name_input.handle_key(key);
            }
            Field::Impact => {
                self.impact_slider.handle_key(key);
            }
            Field::Effort => {
                self.effort_slider.handle_key(key);
            }
        }
        None
    }

    /// Render the form as a centered popup over `area`.
    pub fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        Clear.render(popup_area, buf);

        let title = if self.is_editing {
            " Edit Item "
        } else {
            " Add Item "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let row = |offset: u16, height: u16| {
            Rect::new(
                inner.x,
                inner.y + offset,
                inner.width,
                height.min(inner.height.saturating_sub(offset)),
            )
        };

        self.name_input
            .render(row(0, 3), buf, self.focus == Field::Name);
        self.impact_slider
            .render(row(3, 3), buf, self.focus == Field::Impact);
        self.effort_slider
            .render(row(6, 3), buf, self.focus == Field::Effort);

        let hint = if self.name_valid() {
            Paragraph::new("Enter Save  Esc Cancel  Tab Next field")
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new("Name is required").style(Style::default().fg(Color::Yellow))
        };
        hint.render(row(9, 1), buf);
    }
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(form: &mut ItemForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_defaults() {
        let form = ItemForm::new();
        let values = form.values();
        assert_eq!(values.name, "");
        assert_eq!(values.impact, Score::DEFAULT);
        assert_eq!(values.effort, Score::DEFAULT);
    }

    #[test]
    fn test_submit_requires_name() {
        let mut form = ItemForm::new();
        assert_eq!(form.handle_event(&key(KeyCode::Enter)), None);

        type_str(&mut form, "Ship it");
        let result = form.handle_event(&key(KeyCode::Enter));
        match result {
            Some(FormResult::Submit(values)) => assert_eq!(values.name, "Ship it"),
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_name_refused() {
        let mut form = ItemForm::new();
        type_str(&mut form, "   ");
        assert_eq!(form.handle_event(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_name_kept_untrimmed_on_submit() {
        let mut form = ItemForm::new();
        type_str(&mut form, "  New  ");
        match form.handle_event(&key(KeyCode::Enter)) {
            Some(FormResult::Submit(values)) => assert_eq!(values.name, "  New  "),
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_tab_cycles_focus_to_sliders() {
        let mut form = ItemForm::new();
        type_str(&mut form, "Task");

        // Move to impact slider and bump it twice
        form.handle_event(&key(KeyCode::Tab));
        form.handle_event(&key(KeyCode::Right));
        form.handle_event(&key(KeyCode::Right));

        // Move to effort slider and drop it once
        form.handle_event(&key(KeyCode::Tab));
        form.handle_event(&key(KeyCode::Left));

        let values = form.values();
        assert_eq!(values.impact.get(), 7);
        assert_eq!(values.effort.get(), 4);
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = ItemForm::new();
        assert_eq!(
            form.handle_event(&key(KeyCode::Esc)),
            Some(FormResult::Cancel)
        );
    }

    #[test]
    fn test_prefilled_for_editing() {
        let form = ItemForm::with_values(
            "Existing",
            Score::new(9).unwrap(),
            Score::new(2).unwrap(),
        )
        .for_editing();

        let values = form.values();
        assert_eq!(values.name, "Existing");
        assert_eq!(values.impact.get(), 9);
        assert_eq!(values.effort.get(), 2);
    }
}
