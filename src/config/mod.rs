// ABOUTME: Configuration management for the workout statistics CLI
// ABOUTME: Loads output format, strict input policy, and input path from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Settings come from environment variables; command-line flags override them
//! after loading.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `WORKOUT_OUTPUT_FORMAT` | `text`, `json` | `text` |
//! | `WORKOUT_STRICT_INPUTS` | `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` | `false` |
//! | `WORKOUT_INPUT` | path to a JSON package file | unset (demo packages) |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::constants::env_config;
use crate::factory::TrainingFactory;
use crate::formatters::OutputFormat;

/// Runtime settings for processing workout packages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Rendering format for summaries
    pub output_format: OutputFormat,
    /// Reject zero/negative/non-finite measurements instead of computing with them
    pub strict_inputs: bool,
    /// JSON file of packages to process instead of the built-in samples
    pub input_path: Option<PathBuf>,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let output_format = match read_var(env_config::OUTPUT_FORMAT)? {
            Some(raw) => raw.parse::<OutputFormat>().map_err(|e| {
                ConfigError::Parse(format!("{}: {e}", env_config::OUTPUT_FORMAT))
            })?,
            None => OutputFormat::default(),
        };

        let strict_inputs = match read_var(env_config::STRICT_INPUTS)? {
            Some(raw) => parse_flag(env_config::STRICT_INPUTS, &raw)?,
            None => false,
        };

        let input_path = read_var(env_config::INPUT_PATH)?
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            output_format,
            strict_inputs,
            input_path,
        };
        debug!(
            output_format = %config.output_format,
            strict_inputs = config.strict_inputs,
            input_path = ?config.input_path,
            "Loaded tracker configuration"
        );
        Ok(config)
    }

    /// Factory honouring the configured input policy
    #[must_use]
    pub const fn factory(&self) -> TrainingFactory {
        TrainingFactory::with_strict_inputs(self.strict_inputs)
    }

    /// Apply command-line overrides on top of the loaded settings
    ///
    /// `strict` can only switch the policy on; an unset format or input keeps
    /// the environment value.
    #[must_use]
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        strict: bool,
        input_path: Option<PathBuf>,
    ) -> Self {
        if let Some(format) = format {
            self.output_format = format;
        }
        self.strict_inputs |= strict;
        if input_path.is_some() {
            self.input_path = input_path;
        }
        self
    }
}

fn read_var(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Parse a boolean-like flag value
///
/// # Errors
///
/// Returns `ConfigError::Parse` for anything other than the accepted spellings
pub fn parse_flag(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Parse(format!(
            "{name}: expected a boolean flag, got '{other}'"
        ))),
    }
}
