// crates/formbind-config/tests/config_validation.rs
// ============================================================================
// Module: Config Validation Tests
// Description: Tests for strict, fail-closed configuration loading.
// Purpose: Ensure invalid or oversized configuration is refused.
// Dependencies: formbind-config, tempfile
// ============================================================================

//! ## Overview
//! Covers model validation, unknown-key rejection, defaulting, file loading
//! with the size cap, and the canonical example round-trip.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use std::fs;
use std::io::Write;

use formbind_config::ConfigError;
use formbind_config::ResolverConfig;
use formbind_config::config_toml_example;

#[test]
fn minimal_config_parses_with_defaults() {
    let config =
        ResolverConfig::from_toml_str(r#"target_marker = "app.request_dto""#).expect("parse");
    assert_eq!(config.target_marker, "app.request_dto");
    assert_eq!(config.max_body_bytes, 1024 * 1024);
}

#[test]
fn explicit_limits_are_honored() {
    let raw = "target_marker = \"app.request_dto\"\nmax_body_bytes = 4096\n";
    let config = ResolverConfig::from_toml_str(raw).expect("parse");
    assert_eq!(config.max_body_bytes, 4096);
}

#[test]
fn empty_target_marker_is_refused() {
    let err = ResolverConfig::from_toml_str(r#"target_marker = "  ""#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref detail) if detail.contains("target_marker")));
}

#[test]
fn oversized_target_marker_is_refused() {
    let raw = format!("target_marker = \"{}\"", "m".repeat(300));
    let err = ResolverConfig::from_toml_str(&raw).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref detail) if detail.contains("target_marker")));
}

#[test]
fn zero_body_limit_is_refused() {
    let raw = "target_marker = \"app.request_dto\"\nmax_body_bytes = 0\n";
    let err = ResolverConfig::from_toml_str(raw).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref detail) if detail.contains("max_body_bytes")));
}

#[test]
fn unknown_keys_are_refused() {
    let raw = "target_marker = \"app.request_dto\"\nunexpected = true\n";
    let err = ResolverConfig::from_toml_str(raw).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_target_marker_is_refused() {
    let err = ResolverConfig::from_toml_str("max_body_bytes = 4096\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_an_explicit_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("formbind.toml");
    fs::write(&path, "target_marker = \"app.request_dto\"\n").expect("write config");

    let config = ResolverConfig::load(Some(&path)).expect("load");
    assert_eq!(config.target_marker, "app.request_dto");
}

#[test]
fn load_refuses_missing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = ResolverConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn load_refuses_oversized_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("formbind.toml");
    let mut file = fs::File::create(&path).expect("create config");
    writeln!(file, "target_marker = \"app.request_dto\"").expect("write header");
    let filler = format!("# {}\n", "x".repeat(1022));
    for _ in 0..65 {
        file.write_all(filler.as_bytes()).expect("write filler");
    }
    drop(file);

    let err = ResolverConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::TooLarge { .. }));
}

#[test]
fn canonical_example_round_trips() {
    let config = ResolverConfig::from_toml_str(&config_toml_example()).expect("example parses");
    assert_eq!(config.target_marker, "app.request_dto");
    assert_eq!(config.max_body_bytes, 1_048_576);
}
