//! Terminal event handling.
//!
//! Wraps crossterm's event stream into the small set of events the TUI
//! screens care about. Reads are blocking: the application is fully
//! event-driven and redraws only after handling an event.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events delivered to TUI applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press
    Key(KeyEvent),
    /// Bracketed paste content
    Paste(String),
    /// Terminal was resized to (columns, rows)
    Resize(u16, u16),
}

/// Blocking reader over terminal events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Reads the next relevant event, skipping key releases and other
    /// events the screens do not handle.
    pub fn next(&self) -> Result<TuiEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TuiEvent::Key(key));
                }
                Event::Paste(content) => return Ok(TuiEvent::Paste(content)),
                Event::Resize(columns, rows) => return Ok(TuiEvent::Resize(columns, rows)),
                _ => {}
            }
        }
    }
}
