//! # Board Command
//!
//! Runs the interactive matrix session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io::IsTerminal, path::PathBuf};

use anyhow::Result;

use crate::{config::Config, item::ItemStore, tui, tui::screens::Board};

/// Executes the board command.
///
/// Item state lives only for the duration of the session; nothing is
/// persisted on exit.
pub fn execute() -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The interactive board requires a terminal");
    }

    let config = Config::load()?;

    let store = if config.seed_items() {
        ItemStore::seeded()
    } else {
        ItemStore::new()
    };

    let export_path = PathBuf::from(config.export_path());
    tui::run(Board::new(store, export_path))?;

    Ok(())
}
