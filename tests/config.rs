//! # Config Tests
//!
//! Tests for configuration loading and precedence.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::TestEnv;
use priogrid::Config;

#[test]
fn test_load_defaults_when_missing() {
    let _env = TestEnv::new();

    let config = Config::load().expect("defaults when file absent");
    assert!(config.seed_items());
    assert_eq!(config.export_path(), "prioritization-matrix.png");
}

#[test]
fn test_load_reads_file() {
    let env = TestEnv::new();
    env.write_config(
        r#"
export_path = "out/board.png"
seed_items = false
"#,
    );

    let config = Config::load().expect("config should parse");
    assert_eq!(config.export_path(), "out/board.png");
    assert!(!config.seed_items());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let env = TestEnv::new();
    env.write_config(r#"seed_items = false"#);

    let config = Config::load().expect("config should parse");
    assert!(!config.seed_items());
    assert_eq!(config.export_path(), "prioritization-matrix.png");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let env = TestEnv::new();
    env.write_config("export_path = [not toml");

    let err = Config::load().expect_err("invalid TOML should fail");
    assert!(format!("{err:#}").contains("Failed to parse config"));
}
