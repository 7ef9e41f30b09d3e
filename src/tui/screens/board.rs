//! Interactive matrix board.
//!
//! The main screen of a priogrid session: the plotted impact/effort grid,
//! the item list, and the add/edit/delete/export keybindings. Edits are
//! staged through the item store's drafts so cancelling always restores
//! the committed values, and an export during an open edit renders the
//! committed state.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    classify::{plot_position, Quadrant},
    constants::{UI_MARKER_NAME_TRUNCATE_LEN, UI_NAME_TRUNCATE_LEN},
    export,
    item::{DraftField, ItemStore},
    tui::{event::TuiEvent, AppResult, TuiApp},
    ui,
};

use super::{
    confirm::ConfirmDialog,
    form::{FormResult, ItemForm},
};

/// What the board is currently doing.
enum Mode {
    /// Navigating the list
    Browsing,
    /// The add form is open
    Adding { form: ItemForm },
    /// An edit form is open, staged into the item's draft
    Editing { id: String, form: ItemForm },
    /// Waiting for delete confirmation
    ConfirmingDelete { id: String, dialog: ConfirmDialog },
}

/// Status line severity.
enum StatusKind {
    Info,
    Error,
}

struct Status {
    message: String,
    kind: StatusKind,
}

/// The interactive board application.
pub struct Board {
    store: ItemStore,
    selected: usize,
    mode: Mode,
    status: Option<Status>,
    export_path: PathBuf,
}

impl Board {
    /// Create a board over the given store.
    pub fn new(store: ItemStore, export_path: PathBuf) -> Self {
        Self {
            store,
            selected: 0,
            mode: Mode::Browsing,
            status: None,
            export_path,
        }
    }

    fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            kind: StatusKind::Info,
        });
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            kind: StatusKind::Error,
        });
    }

    fn selected_id(&self) -> Option<String> {
        self.store
            .items()
            .get(self.selected)
            .map(|item| item.id().to_string())
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.store.len() {
            self.selected = self.store.len().saturating_sub(1);
        }
    }

    /// Mirror the form's current values into the item's draft.
    fn sync_draft(&mut self, id: &str, form: &ItemForm) {
        let values = form.values();
        self.store.update_draft(id, DraftField::Name(values.name));
        self.store.update_draft(id, DraftField::Impact(values.impact));
        self.store.update_draft(id, DraftField::Effort(values.effort));
    }

    /// Render and write the PNG artifact; failures become a status line.
    fn export(&mut self) {
        match export::export(self.store.items(), &self.export_path) {
            Ok(()) => self.set_info(format!("Exported {}", self.export_path.display())),
            Err(err) => self.set_error(format!(
                "Export failed ({err:#}). Try taking a screenshot instead."
            )),
        }
    }

    fn handle_browsing_key(&mut self, key: KeyEvent) -> Option<AppResult<()>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppResult::Cancelled);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(AppResult::Done(())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.store.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('a') => {
                self.status = None;
                self.mode = Mode::Adding {
                    form: ItemForm::new(),
                };
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.status = None;
                    self.store.begin_edit(&id);
                    // Prefill from the staged draft (a fresh copy of the
                    // committed values)
                    if let Some(draft) = self.store.get(&id).and_then(crate::item::Item::draft) {
                        let form =
                            ItemForm::with_values(&draft.name, draft.impact, draft.effort)
                                .for_editing();
                        self.mode = Mode::Editing { id, form };
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let name = self
                        .store
                        .get(&id)
                        .map(|item| ui::truncate(item.name(), UI_NAME_TRUNCATE_LEN))
                        .unwrap_or_default();
                    self.mode = Mode::ConfirmingDelete {
                        id,
                        dialog: ConfirmDialog::new(format!("Delete \"{name}\"?")),
                    };
                }
            }
            KeyCode::Char('x') => self.export(),
            _ => {}
        }
        None
    }

    fn handle_adding(&mut self, mut form: ItemForm, event: &TuiEvent) {
        match form.handle_event(event) {
            None => self.mode = Mode::Adding { form },
            Some(FormResult::Cancel) => {}
            Some(FormResult::Submit(values)) => {
                match self.store.add(&values.name, values.impact, values.effort) {
                    Ok(item) => {
                        let name = ui::truncate(item.name(), UI_NAME_TRUNCATE_LEN);
                        self.selected = self.store.len().saturating_sub(1);
                        self.set_info(format!("Added \"{name}\""));
                    }
                    Err(err) => {
                        // The form blocks empty names, so this is unreachable
                        // in practice; surface it instead of guessing.
                        self.set_error(err.to_string());
                        self.mode = Mode::Adding { form };
                    }
                }
            }
        }
    }

    fn handle_editing(&mut self, id: String, mut form: ItemForm, event: &TuiEvent) {
        match form.handle_event(event) {
            None => {
                self.sync_draft(&id, &form);
                self.mode = Mode::Editing { id, form };
            }
            Some(FormResult::Cancel) => {
                self.store.cancel_edit(&id);
            }
            Some(FormResult::Submit(_)) => {
                self.sync_draft(&id, &form);
                match self.store.commit_edit(&id) {
                    Ok(true) => self.set_info("Saved"),
                    Ok(false) => self.set_error("Item no longer exists"),
                    Err(err) => {
                        self.set_error(err.to_string());
                        self.mode = Mode::Editing { id, form };
                    }
                }
            }
        }
    }

    fn handle_confirming_delete(&mut self, id: String, mut dialog: ConfirmDialog, event: &TuiEvent) {
        match dialog.handle_event(event) {
            None => self.mode = Mode::ConfirmingDelete { id, dialog },
            Some(AppResult::Done(true)) => {
                if self.store.remove(&id) {
                    self.clamp_selection();
                    self.set_info("Deleted");
                }
            }
            Some(AppResult::Done(false) | AppResult::Cancelled) => {}
        }
    }
}

impl TuiApp for Board {
    type Output = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match std::mem::replace(&mut self.mode, Mode::Browsing) {
            Mode::Browsing => {
                if let TuiEvent::Key(key) = event {
                    return self.handle_browsing_key(*key);
                }
                None
            }
            Mode::Adding { form } => {
                self.handle_adding(form, event);
                None
            }
            Mode::Editing { id, form } => {
                self.handle_editing(id, form, event);
                None
            }
            Mode::ConfirmingDelete { id, dialog } => {
                self.handle_confirming_delete(id, dialog, event);
                None
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Matrix
            Constraint::Length(8), // Item list
            Constraint::Length(3), // Status / help
        ])
        .split(area);

        self.render_header(frame, chunks[0]);
        self.render_matrix(frame, chunks[1]);
        self.render_list(frame, chunks[2]);
        self.render_footer(frame, chunks[3]);

        match &self.mode {
            Mode::Browsing => {}
            Mode::Adding { form } | Mode::Editing { form, .. } => {
                form.render_popup(area, frame.buffer_mut());
            }
            Mode::ConfirmingDelete { dialog, .. } => {
                dialog.render_popup(area, frame.buffer_mut());
            }
        }
    }
}

impl Board {
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                "Feature Prioritization Matrix",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Impact vs Effort Analysis",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(header, area);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn render_matrix(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(" Impact \u{2191} "))
            .title_bottom(Line::from(" Effort \u{2192} ").right_aligned())
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 4 || inner.height < 4 {
            return;
        }
        let buf = frame.buffer_mut();

        // Center grid lines splitting the four quadrant cells
        let mid_x = inner.x + inner.width / 2;
        let mid_y = inner.y + inner.height / 2;
        let grid_style = Style::default().fg(Color::DarkGray);
        for x in inner.left()..inner.right() {
            buf.set_string(x, mid_y, "\u{2500}", grid_style);
        }
        for y in inner.top()..inner.bottom() {
            buf.set_string(mid_x, y, "\u{2502}", grid_style);
        }
        buf.set_string(mid_x, mid_y, "\u{253c}", grid_style);

        self.render_quadrant_labels(frame.buffer_mut(), inner);

        // Markers, selected item last so it stays visible on overlap
        let buf = frame.buffer_mut();
        let order: Vec<usize> = (0..self.store.len())
            .filter(|&i| i != self.selected)
            .chain(std::iter::once(self.selected))
            .filter(|&i| i < self.store.len())
            .collect();

        for index in order {
            let item = &self.store.items()[index];
            let quadrant = Quadrant::classify(item.impact(), item.effort());
            let (x, y) = plot_position(item.impact(), item.effort());

            let col = inner.x + (x * f64::from(inner.width - 1)).round() as u16;
            let row = inner.y + (y * f64::from(inner.height - 1)).round() as u16;

            let name = ui::truncate(item.name(), UI_MARKER_NAME_TRUNCATE_LEN);
            let editing = if item.is_editing() { "*" } else { "" };
            let caption = format!(
                "\u{25cf} {name}{editing} I:{} E:{}",
                item.impact(),
                item.effort()
            );

            // Keep the caption inside the plot area
            let width = caption.width() as u16;
            let col = if col + width > inner.right() {
                inner.right().saturating_sub(width).max(inner.x)
            } else {
                col
            };

            let (r, g, b) = quadrant.color();
            let mut style = Style::default().fg(Color::Rgb(r, g, b));
            if index == self.selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            buf.set_string(col, row, caption, style);
        }
    }

    fn render_quadrant_labels(&self, buf: &mut ratatui::buffer::Buffer, inner: Rect) {
        let corners = [
            (Quadrant::QuickWins, false, false),
            (Quadrant::MajorProjects, true, false),
            (Quadrant::FillIns, false, true),
            (Quadrant::ThanklessTasks, true, true),
        ];

        for (quadrant, right, bottom) in corners {
            let label = quadrant.label();
            #[allow(clippy::cast_possible_truncation)]
            let width = label.width() as u16;
            let x = if right {
                inner.right().saturating_sub(width + 1)
            } else {
                inner.x + 1
            };
            let y = if bottom {
                inner.bottom().saturating_sub(1)
            } else {
                inner.y
            };

            let (r, g, b) = quadrant.color();
            buf.set_string(
                x,
                y,
                label,
                Style::default()
                    .fg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::DIM),
            );
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Items ({}) ", self.store.len()))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.is_empty() {
            let empty = Paragraph::new("No items yet. Press a to add one.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        // Keep the selection visible in a short window
        let visible = usize::from(inner.height);
        let start = if visible == 0 {
            0
        } else {
            self.selected.saturating_sub(visible.saturating_sub(1))
        };

        let lines: Vec<Line> = self
            .store
            .items()
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(i, item)| {
                let quadrant = Quadrant::classify(item.impact(), item.effort());
                let (r, g, b) = quadrant.color();
                let selected = i == self.selected;

                let row_style = if selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let mut spans = vec![
                    Span::styled(if selected { "> " } else { "  " }, row_style),
                    Span::styled("\u{25cf} ", Style::default().fg(Color::Rgb(r, g, b))),
                    Span::styled(
                        format!(
                            "{:<width$}",
                            ui::truncate(item.name(), UI_NAME_TRUNCATE_LEN),
                            width = UI_NAME_TRUNCATE_LEN
                        ),
                        row_style,
                    ),
                    Span::styled(
                        format!("  I:{:>2} E:{:>2}  ", item.impact(), item.effort()),
                        row_style,
                    ),
                    Span::styled(
                        format!("{:<16}", quadrant.label()),
                        Style::default().fg(Color::Rgb(r, g, b)),
                    ),
                    Span::styled(
                        quadrant.priority(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if item.is_editing() {
                    spans.push(Span::styled(
                        "  (editing)",
                        Style::default().fg(Color::Yellow),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let line = match &self.status {
            Some(status) => {
                let style = match status.kind {
                    StatusKind::Info => Style::default().fg(Color::Green),
                    StatusKind::Error => Style::default().fg(Color::Red),
                };
                Line::from(Span::styled(status.message.clone(), style))
            }
            None => {
                let key = Style::default().fg(Color::Cyan);
                let text = Style::default();
                Line::from(vec![
                    Span::styled("a", key),
                    Span::styled(" Add  ", text),
                    Span::styled("e", key),
                    Span::styled(" Edit  ", text),
                    Span::styled("d", key),
                    Span::styled(" Delete  ", text),
                    Span::styled("x", key),
                    Span::styled(" Export  ", text),
                    Span::styled("\u{2191}\u{2193}", key),
                    Span::styled(" Select  ", text),
                    Span::styled("q", key),
                    Span::styled(" Quit", text),
                ])
            }
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Score;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn board() -> Board {
        Board::new(ItemStore::seeded(), PathBuf::from("test.png"))
    }

    fn type_str(board: &mut Board, text: &str) {
        for c in text.chars() {
            board.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            board().handle_event(&key(KeyCode::Char('q'))),
            Some(AppResult::Done(()))
        );
        assert_eq!(
            board().handle_event(&key(KeyCode::Esc)),
            Some(AppResult::Done(()))
        );
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut board = board();
        board.handle_event(&key(KeyCode::Up));
        assert_eq!(board.selected, 0);

        for _ in 0..10 {
            board.handle_event(&key(KeyCode::Down));
        }
        assert_eq!(board.selected, board.store.len() - 1);
    }

    #[test]
    fn test_add_flow_appends_item() {
        let mut board = board();
        let before = board.store.len();

        board.handle_event(&key(KeyCode::Char('a')));
        type_str(&mut board, "New Feature");
        board.handle_event(&key(KeyCode::Enter));

        assert_eq!(board.store.len(), before + 1);
        let added = board.store.items().last().unwrap();
        assert_eq!(added.name(), "New Feature");
        assert_eq!(added.impact(), Score::DEFAULT);
        assert_eq!(added.effort(), Score::DEFAULT);
        assert_eq!(board.selected, board.store.len() - 1);
    }

    #[test]
    fn test_add_empty_name_keeps_form_open() {
        let mut board = board();
        let before = board.store.len();

        board.handle_event(&key(KeyCode::Char('a')));
        board.handle_event(&key(KeyCode::Enter));

        assert!(matches!(board.mode, Mode::Adding { .. }));
        assert_eq!(board.store.len(), before);
    }

    #[test]
    fn test_edit_stages_draft_and_commit_applies() {
        let mut board = board();
        let id = board.store.items()[0].id().to_string();

        board.handle_event(&key(KeyCode::Char('e')));
        assert!(board.store.get(&id).unwrap().is_editing());

        // Bump impact on the slider (name field first, then impact)
        board.handle_event(&key(KeyCode::Tab));
        board.handle_event(&key(KeyCode::Right));

        // Draft sees the change, committed value does not
        let item = board.store.get(&id).unwrap();
        assert_eq!(item.draft().unwrap().impact.get(), 9);
        assert_eq!(item.impact().get(), 8);

        board.handle_event(&key(KeyCode::Enter));
        let item = board.store.get(&id).unwrap();
        assert_eq!(item.impact().get(), 9);
        assert!(!item.is_editing());
    }

    #[test]
    fn test_edit_cancel_restores_committed() {
        let mut board = board();
        let id = board.store.items()[0].id().to_string();

        board.handle_event(&key(KeyCode::Char('e')));
        board.handle_event(&key(KeyCode::Tab));
        board.handle_event(&key(KeyCode::End));
        board.handle_event(&key(KeyCode::Esc));

        let item = board.store.get(&id).unwrap();
        assert_eq!(item.impact().get(), 8);
        assert!(!item.is_editing());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut board = board();
        let before = board.store.len();

        board.handle_event(&key(KeyCode::Char('d')));
        assert!(matches!(board.mode, Mode::ConfirmingDelete { .. }));
        assert_eq!(board.store.len(), before);

        board.handle_event(&key(KeyCode::Char('n')));
        assert_eq!(board.store.len(), before);

        board.handle_event(&key(KeyCode::Char('d')));
        board.handle_event(&key(KeyCode::Char('y')));
        assert_eq!(board.store.len(), before - 1);
    }

    #[test]
    fn test_delete_last_item_clamps_selection() {
        let mut board = board();
        let last = board.store.len() - 1;
        for _ in 0..last {
            board.handle_event(&key(KeyCode::Down));
        }

        board.handle_event(&key(KeyCode::Char('d')));
        board.handle_event(&key(KeyCode::Char('y')));
        assert_eq!(board.selected, board.store.len() - 1);
    }

    #[test]
    fn test_export_failure_sets_error_status() {
        let mut board = Board::new(
            ItemStore::seeded(),
            PathBuf::from("/nonexistent-priogrid-dir/out.png"),
        );
        board.handle_event(&key(KeyCode::Char('x')));

        let status = board.status.expect("status set");
        assert!(matches!(status.kind, StatusKind::Error));
        assert!(status.message.contains("screenshot"));
        // Export failures never touch the store
        assert_eq!(board.store.len(), 4);
    }
}
