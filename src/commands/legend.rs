//! # Legend Command
//!
//! Prints the four-quadrant legend table.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{classify::Quadrant, ui};

/// Executes the legend command.
pub fn execute() -> Result<()> {
    for quadrant in Quadrant::ALL {
        println!("{}", ui::legend_row(quadrant));
    }
    Ok(())
}
