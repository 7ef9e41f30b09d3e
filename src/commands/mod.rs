//! # Commands
//!
//! CLI command implementations for priogrid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod board;
pub mod classify;
pub mod completions;
pub mod export;
pub mod legend;

pub use self::{
    board::execute as board,
    classify::{execute as classify, ClassifyArgs},
    export::{execute as export, ExportArgs},
    legend::execute as legend,
};
