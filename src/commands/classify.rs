//! # Classify Command
//!
//! Prints the quadrant and priority for a score pair.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    classify::{plot_position, Quadrant},
    item::Score,
    ui,
};

/// Arguments for the classify command
#[derive(Debug, Clone, Copy)]
pub struct ClassifyArgs {
    pub impact: u8,
    pub effort: u8,
}

/// Executes the classify command.
pub fn execute(args: ClassifyArgs) -> Result<()> {
    let impact = Score::new(args.impact).context("impact must be between 1 and 10")?;
    let effort = Score::new(args.effort).context("effort must be between 1 and 10")?;

    let quadrant = Quadrant::classify(impact, effort);
    let (x, y) = plot_position(impact, effort);

    println!("{}", ui::classification_line(quadrant));
    println!("  {}", quadrant.description());
    println!("  position: x={x:.2} y={y:.2}");

    Ok(())
}
