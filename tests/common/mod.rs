//! # Test Harness
//!
//! Provides utilities for integration testing priogrid without affecting
//! user configuration. Uses thread-local storage instead of environment
//! variables to avoid any interference with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use priogrid::set_home_override;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that manages temporary directories for both
/// the "home" directory (for config) and the working directory
/// (where default exports land).
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/priogrid/config)
    pub home_dir: TempDir,
    /// Temporary working directory
    pub work_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Uses thread-local storage to redirect config (no env var
    /// modification). Changes to the working directory for the duration
    /// of the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let work_dir = TempDir::new().expect("Failed to create temp work dir");

        // Save original cwd
        let original_cwd = env::current_dir().expect("Failed to get current dir");

        // Set up test environment using thread-local (NOT env vars)
        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(work_dir.path()).expect("Failed to change to work dir");

        Self {
            home_dir,
            work_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the working directory.
    pub fn work_path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("priogrid")
            .join("config")
    }

    /// Creates a config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

/// PNG signature bytes.
pub const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Asserts a file exists and starts with the PNG signature.
pub fn assert_is_png(path: &Path) {
    let bytes = fs::read(path)
        .unwrap_or_else(|_| panic!("expected file at {}", path.display()));
    assert!(bytes.len() > 8, "file too small to be a PNG");
    assert_eq!(bytes[..8], PNG_MAGIC, "missing PNG signature");
}
