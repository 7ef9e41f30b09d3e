//! # Export Command
//!
//! Renders a matrix image without entering the interactive session.
//!
//! Items are passed as `NAME:IMPACT:EFFORT` specs; with none given, the
//! example seed set is rendered. Only the last two colon-separated fields
//! are scores, so names may themselves contain colons.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    config::Config,
    export,
    item::{ItemStore, Score},
    ui,
};

/// Arguments for the export command
#[derive(Debug, Clone, Default)]
pub struct ExportArgs {
    /// Item specs in `NAME:IMPACT:EFFORT` form
    pub items: Vec<String>,

    /// Output path; falls back to the configured default
    pub output: Option<PathBuf>,
}

/// Executes the export command.
pub fn execute(args: ExportArgs) -> Result<()> {
    let config = Config::load()?;

    let store = if args.items.is_empty() {
        ItemStore::seeded()
    } else {
        let mut store = ItemStore::new();
        for spec in &args.items {
            let (name, impact, effort) =
                parse_item_spec(spec).with_context(|| format!("Invalid item spec '{spec}'"))?;
            store
                .add(name, impact, effort)
                .with_context(|| format!("Invalid item spec '{spec}'"))?;
        }
        store
    };

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(config.export_path()));

    export::export(store.items(), &path)?;

    ui::print_success(&format!("Exported matrix: {}", path.display()));
    Ok(())
}

/// Splits `NAME:IMPACT:EFFORT` into its parts.
///
/// Scores are taken from the right so the name may contain colons.
fn parse_item_spec(spec: &str) -> Result<(&str, Score, Score)> {
    let mut parts = spec.rsplitn(3, ':');

    let effort = parts
        .next()
        .context("missing effort score")?
        .parse::<Score>()
        .context("effort must be an integer between 1 and 10")?;
    let impact = parts
        .next()
        .context("missing impact score")?
        .parse::<Score>()
        .context("impact must be an integer between 1 and 10")?;
    let name = parts.next().context("missing name")?;

    Ok((name, impact, effort))
}
