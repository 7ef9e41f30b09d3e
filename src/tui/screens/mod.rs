//! TUI screens for the interactive board.

mod board;
mod confirm;
mod form;

pub use board::Board;
pub use confirm::ConfirmDialog;
pub use form::{FormResult, ItemForm};

use ratatui::layout::Rect;

/// Calculate a centered rectangle within the given area.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
