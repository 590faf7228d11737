// tests/unit_config.rs
//! Tests for settings defaults, TOML parsing, and validation.

use std::fs;

use surfrank_core::config::{Settings, SETTINGS_FILE};
use surfrank_core::error::RankError;

#[test]
fn test_defaults() {
    let s = Settings::new();
    assert!((s.damping - 0.85).abs() < 1e-12);
    assert_eq!(s.samples, 10_000);
    assert!((s.threshold - 0.0005).abs() < 1e-12);
    assert_eq!(s.seed, None);
    assert_eq!(s.batches, None);
}

#[test]
fn test_parse_toml_partial_override() {
    let s = Settings::parse_toml("damping = 0.5\nseed = 99\n");
    assert!((s.damping - 0.5).abs() < 1e-12);
    assert_eq!(s.seed, Some(99));
    assert_eq!(s.samples, 10_000, "unset keys keep their defaults");
}

#[test]
fn test_parse_toml_garbage_falls_back_to_defaults() {
    let s = Settings::parse_toml("damping = \"not a number");
    assert!((s.damping - 0.85).abs() < 1e-12);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let s = Settings::load(dir.path());
    assert_eq!(s.samples, 10_000);
}

#[test]
fn test_load_reads_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SETTINGS_FILE), "samples = 500\nbatches = 2\n").unwrap();
    let s = Settings::load(dir.path());
    assert_eq!(s.samples, 500);
    assert_eq!(s.batches, Some(2));
}

#[test]
fn test_validate_rejects_bad_damping() {
    let s = Settings { damping: 1.2, ..Settings::default() };
    assert!(matches!(
        s.validate().unwrap_err(),
        RankError::InvalidDamping { .. }
    ));
}

#[test]
fn test_validate_rejects_zero_samples() {
    let s = Settings { samples: 0, ..Settings::default() };
    assert!(matches!(
        s.validate().unwrap_err(),
        RankError::InvalidSampleCount { .. }
    ));
}

#[test]
fn test_validate_rejects_non_positive_threshold() {
    let s = Settings { threshold: 0.0, ..Settings::default() };
    assert!(matches!(
        s.validate().unwrap_err(),
        RankError::InvalidThreshold { .. }
    ));
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Settings::default().validate().is_ok());
}
