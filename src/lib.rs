//! # priogrid
//!
//! An interactive impact/effort prioritization matrix for the terminal.
//!
//! Items are plotted on a two-dimensional grid by their impact and effort
//! scores, classified into one of four priority quadrants, and can be
//! exported as a PNG snapshot for sharing.
//!
//! ## Features
//!
//! - **Interactive Board**: Add, edit, and delete items in a TUI session
//! - **Quadrant Classification**: Quick Wins, Major Projects, Fill-ins,
//!   Thankless Tasks
//! - **PNG Export**: Render the matrix and legend to an image file
//! - **Scriptable**: Classify scores and export matrices from the CLI
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod classify;
pub mod commands;
pub mod config;
pub mod constants;
pub mod export;
pub mod id;
pub mod item;
pub mod tui;
pub mod ui;

pub use classify::Quadrant;
pub use config::{set_home_override, Config};
pub use item::{DraftField, Item, ItemStore, Score, StoreError};
