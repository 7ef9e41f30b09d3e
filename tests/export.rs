//! # Export Command Tests
//!
//! Tests for the `pg export` command run in-process.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{assert_is_png, TestEnv};
use priogrid::commands::{self, ExportArgs};

#[test]
fn test_export_writes_default_file() {
    let env = TestEnv::new();

    commands::export(ExportArgs::default()).expect("export should succeed");

    assert_is_png(&env.work_path().join("prioritization-matrix.png"));
}

#[test]
fn test_export_honors_configured_path() {
    let env = TestEnv::new();
    env.write_config(r#"export_path = "custom.png""#);

    commands::export(ExportArgs::default()).expect("export should succeed");

    assert_is_png(&env.work_path().join("custom.png"));
    assert!(!env.work_path().join("prioritization-matrix.png").exists());
}

#[test]
fn test_export_explicit_output_overrides_config() {
    let env = TestEnv::new();
    env.write_config(r#"export_path = "custom.png""#);

    let output = env.work_path().join("explicit.png");
    commands::export(ExportArgs {
        items: vec![],
        output: Some(output.clone()),
    })
    .expect("export should succeed");

    assert_is_png(&output);
    assert!(!env.work_path().join("custom.png").exists());
}

#[test]
fn test_export_with_item_specs() {
    let env = TestEnv::new();

    let output = env.work_path().join("items.png");
    commands::export(ExportArgs {
        items: vec![
            "Dark Mode:3:2".to_string(),
            "feat: sso login:8:6".to_string(),
        ],
        output: Some(output.clone()),
    })
    .expect("export should succeed");

    assert_is_png(&output);
}

#[test]
fn test_export_rejects_invalid_spec() {
    let _env = TestEnv::new();

    let err = commands::export(ExportArgs {
        items: vec!["Broken:0:5".to_string()],
        output: None,
    })
    .expect_err("out-of-range score should fail");

    assert!(format!("{err:#}").contains("Invalid item spec"));
}

#[test]
fn test_export_rejects_empty_name_spec() {
    let env = TestEnv::new();

    let err = commands::export(ExportArgs {
        items: vec![":5:5".to_string()],
        output: None,
    })
    .expect_err("empty name should fail");

    assert!(format!("{err:#}").contains("Invalid item spec"));
    assert!(!env.work_path().join("prioritization-matrix.png").exists());
}

#[test]
fn test_export_decodes_with_expected_dimensions() {
    let env = TestEnv::new();

    let output = env.work_path().join("decode.png");
    commands::export(ExportArgs {
        items: vec!["Solo:10:1".to_string()],
        output: Some(output.clone()),
    })
    .expect("export should succeed");

    let bytes = std::fs::read(&output).expect("file written");
    let decoded = image::load_from_memory(&bytes).expect("valid PNG");
    assert_eq!(decoded.width(), 800);
    assert_eq!(decoded.height(), 1000);
}
