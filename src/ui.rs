//! # UI Utilities
//!
//! Shared user interface utilities for colored terminal output and common
//! formatting used across commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;

use crate::classify::Quadrant;

// =============================================================================
// Quadrant Formatting
// =============================================================================

/// Returns a colored swatch block for a quadrant.
pub fn swatch(quadrant: Quadrant) -> String {
    let (r, g, b) = quadrant.color();
    "\u{25a0}".truecolor(r, g, b).to_string()
}

/// Formats one legend row: swatch, label, priority, description.
pub fn legend_row(quadrant: Quadrant) -> String {
    // Pad before styling so ANSI codes don't count against the column width
    let label = format!("{:<16}", quadrant.label());
    format!(
        "{} {} {:<18} {}",
        swatch(quadrant),
        label.bold(),
        quadrant.priority(),
        quadrant.description()
    )
}

/// Formats a classification result for a score pair.
pub fn classification_line(quadrant: Quadrant) -> String {
    format!(
        "{} {} ({})",
        swatch(quadrant),
        quadrant.label().bold(),
        quadrant.priority()
    )
}

// =============================================================================
// Success Messages
// =============================================================================

/// Prints a success message.
///
/// Format: `✓ {message}`
pub fn print_success(message: &str) {
    println!("{} {message}", "\u{2713}".green());
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to the specified maximum length in characters,
/// adding an ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}\u{2026}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("abcdefgh", 5), "abcd\u{2026}");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate("abcde", 5), "abcde");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("\u{65e5}\u{672c}\u{8a9e}\u{8a9e}", 3), "\u{65e5}\u{672c}\u{2026}");
    }

    #[test]
    fn test_legend_row_contains_metadata() {
        let row = legend_row(Quadrant::QuickWins);
        assert!(row.contains("Quick Wins"));
        assert!(row.contains("High Priority"));
    }
}
