//! # Configuration
//!
//! Handles the user configuration stored at `~/.config/priogrid/config`.
//!
//! All settings are optional preferences; a missing file yields defaults.
//! Item state is never persisted here; sessions are in-memory only.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{EXPORT_FILE_NAME, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// User configuration stored at ~/.config/priogrid/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output path for exported matrix images
    #[serde(default)]
    pub export_path: Option<String>,

    /// Whether interactive sessions start with the example seed items
    #[serde(default = "default_true")]
    pub seed_items: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: None,
            seed_items: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

impl Config {
    /// Returns the path to the config file (~/.config/priogrid/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        // Check for thread-local test override first (no env var modification)
        if let Some(home) = get_home_override() {
            return Some(
                home.join(".config")
                    .join(GLOBAL_CONFIG_DIR)
                    .join(GLOBAL_CONFIG_FILENAME),
            );
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Loads the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Returns the effective export file path.
    pub fn export_path(&self) -> &str {
        self.export_path.as_deref().unwrap_or(EXPORT_FILE_NAME)
    }

    /// Whether interactive sessions start with the example seed items.
    pub const fn seed_items(&self) -> bool {
        self.seed_items
    }
}
