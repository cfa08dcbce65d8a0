// ABOUTME: Tests for environment-driven tracker configuration loading
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use workout_stats::config::{ConfigError, TrackerConfig};
use workout_stats::errors::{AppError, ErrorCode};
use workout_stats::formatters::OutputFormat;
use workout_stats::logging::LoggingConfig;

const VARS: [&str; 3] = [
    "WORKOUT_OUTPUT_FORMAT",
    "WORKOUT_STRICT_INPUTS",
    "WORKOUT_INPUT",
];

fn clear_vars() {
    for name in VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_vars();
    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config, TrackerConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_vars();
    env::set_var("WORKOUT_OUTPUT_FORMAT", "Json");
    env::set_var("WORKOUT_STRICT_INPUTS", "yes");
    env::set_var("WORKOUT_INPUT", "/tmp/packages.json");

    let config = TrackerConfig::from_env().unwrap();
    clear_vars();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(config.strict_inputs);
    assert!(config.factory().is_strict());
    assert_eq!(config.input_path, Some(PathBuf::from("/tmp/packages.json")));
}

#[test]
#[serial]
fn test_blank_input_path_is_ignored() {
    clear_vars();
    env::set_var("WORKOUT_INPUT", "  ");
    let config = TrackerConfig::from_env().unwrap();
    clear_vars();
    assert!(config.input_path.is_none());
}

#[test]
#[serial]
fn test_invalid_format_is_parse_error() {
    clear_vars();
    env::set_var("WORKOUT_OUTPUT_FORMAT", "xml");
    let err = TrackerConfig::from_env().unwrap_err();
    clear_vars();

    assert!(matches!(err, ConfigError::Parse(ref message) if message.contains("WORKOUT_OUTPUT_FORMAT")));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_invalid_strict_flag_is_parse_error() {
    clear_vars();
    env::set_var("WORKOUT_STRICT_INPUTS", "sometimes");
    let err = TrackerConfig::from_env().unwrap_err();
    clear_vars();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
#[serial]
fn test_command_line_overrides_environment() {
    clear_vars();
    env::set_var("WORKOUT_OUTPUT_FORMAT", "json");
    env::set_var("WORKOUT_INPUT", "/tmp/env.json");

    let config = TrackerConfig::from_env().unwrap().with_overrides(
        Some(OutputFormat::Text),
        true,
        Some(PathBuf::from("/tmp/cli.json")),
    );
    clear_vars();

    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.strict_inputs);
    assert_eq!(config.input_path, Some(PathBuf::from("/tmp/cli.json")));
}

#[test]
#[serial]
fn test_log_location_flag_honours_false() {
    env::set_var("LOG_INCLUDE_LOCATION", "false");
    assert!(!LoggingConfig::from_env().include_location);

    env::set_var("LOG_INCLUDE_LOCATION", "1");
    assert!(LoggingConfig::from_env().include_location);

    env::set_var("LOG_INCLUDE_LOCATION", "garbage");
    assert!(!LoggingConfig::from_env().include_location);

    env::remove_var("LOG_INCLUDE_LOCATION");
    assert!(!LoggingConfig::from_env().include_location);
}
