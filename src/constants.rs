//! # Constants
//!
//! Centralized constants for magic values used throughout priogrid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// UI Display
// =============================================================================

/// Maximum length for item names in the board list (truncated with ellipsis).
pub const UI_NAME_TRUNCATE_LEN: usize = 24;

/// Maximum length for item names next to a plotted marker.
pub const UI_MARKER_NAME_TRUNCATE_LEN: usize = 16;

// =============================================================================
// Seed Items
// =============================================================================

/// Example items a fresh session starts with: (name, impact, effort).
pub const SEED_ITEMS: [(&str, u8, u8); 4] = [
    ("User Authentication", 8, 6),
    ("Push Notifications", 7, 4),
    ("Dark Mode", 3, 2),
    ("Advanced Analytics", 9, 8),
];

// =============================================================================
// Export
// =============================================================================

/// Default file name for the exported matrix image.
pub const EXPORT_FILE_NAME: &str = "prioritization-matrix.png";

/// Title rendered at the top of the exported image.
pub const EXPORT_TITLE: &str = "Feature Prioritization Matrix";

/// Subtitle rendered below the title.
pub const EXPORT_SUBTITLE: &str = "Impact vs Effort Analysis";

/// Total width of the exported image in pixels.
pub const EXPORT_WIDTH: u32 = 800;

/// Total height of the exported image in pixels.
pub const EXPORT_HEIGHT: u32 = 1000;

/// Height of the plotted matrix area within the export.
pub const EXPORT_MATRIX_HEIGHT: u32 = 600;

/// Outer padding around the export layout.
pub const EXPORT_PADDING: u32 = 20;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside user's config directory).
pub const GLOBAL_CONFIG_DIR: &str = "priogrid";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
