// ABOUTME: Driver that turns raw workout packages into rendered summaries
// ABOUTME: Loads packages from JSON or CLI text, builds calculators, and writes output lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Package processing pipeline
//!
//! `RawPackage` -> [`TrainingFactory`] -> `Training::build_summary` ->
//! [`format_summary`] -> one output line. Processing stops at the first
//! failing package; a package is rendered completely before anything is
//! written for it.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::TrackerConfig;
use crate::errors::{AppError, AppResult};
use crate::factory::TrainingFactory;
use crate::formatters::{format_summary, OutputFormat};
use crate::models::InfoMessage;

/// Sensor package as delivered by the reader: a discipline code plus
/// positional numeric values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPackage {
    /// Discipline code (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Ordered values, meaning depends on the discipline
    pub data: Vec<Value>,
}

impl RawPackage {
    /// Create a raw package
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<Value>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Reference packages processed when no input is given
#[must_use]
pub fn demo_packages() -> Vec<RawPackage> {
    vec![
        RawPackage::new(
            "SWM",
            vec![720.into(), 1.into(), 80.into(), 25.into(), 40.into()],
        ),
        RawPackage::new("RUN", vec![15_000.into(), 1.into(), 75.into()]),
        RawPackage::new("WLK", vec![9000.into(), 1.into(), 75.into(), 180.into()]),
    ]
}

/// Read a JSON array of packages from a file
///
/// ```json
/// [{"workout_type": "RUN", "data": [15000, 1, 75]}]
/// ```
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and a serialization
/// error if it is not a JSON array of packages
pub fn load_packages(path: &Path) -> AppResult<Vec<RawPackage>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("failed to read {}", path.display())).with_source(e)
    })?;
    let packages: Vec<RawPackage> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), count = packages.len(), "Loaded workout packages");
    Ok(packages)
}

/// Parse a package from `CODE:v1,v2,...` text
///
/// Values that parse as integers stay integers so they can fill count fields;
/// everything else is read as a float. A single trailing comma is tolerated.
///
/// # Errors
///
/// Returns `AppError::invalid_input` if the separator is missing, a field is
/// empty, or a value is not a finite number
pub fn parse_package_spec(spec: &str) -> AppResult<RawPackage> {
    let (code, values) = spec.split_once(':').ok_or_else(|| {
        AppError::invalid_input(format!("package '{spec}' must look like CODE:v1,v2,..."))
    })?;

    let mut fields: Vec<&str> = values.split(',').map(str::trim).collect();
    if fields.last().is_some_and(|last| last.is_empty()) {
        fields.pop();
    }

    let data = fields
        .into_iter()
        .enumerate()
        .map(|(position, raw)| parse_value(position, raw))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(RawPackage::new(code.trim(), data))
}

fn parse_value(position: usize, raw: &str) -> AppResult<Value> {
    if raw.is_empty() {
        return Err(AppError::invalid_input(format!(
            "value {} is empty",
            position + 1
        )));
    }
    if let Ok(unsigned) = raw.parse::<u64>() {
        return Ok(Value::from(unsigned));
    }
    if let Ok(signed) = raw.parse::<i64>() {
        return Ok(Value::from(signed));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| AppError::invalid_input(format!("'{raw}' is not a finite number")))
}

/// Packages from the configured input file and `CODE:v1,...` specs
///
/// Falls back to [`demo_packages`] when neither source is given.
///
/// # Errors
///
/// Returns any load or parse error, or `AppError::invalid_input` if an input
/// file yields no packages
pub fn resolve_packages(config: &TrackerConfig, specs: &[String]) -> AppResult<Vec<RawPackage>> {
    let mut packages = match &config.input_path {
        Some(path) => load_packages(path)?,
        None => Vec::new(),
    };
    for spec in specs {
        packages.push(parse_package_spec(spec)?);
    }

    if packages.is_empty() {
        if config.input_path.is_some() {
            return Err(AppError::invalid_input("input file contains no packages"));
        }
        debug!("No packages given, using demo packages");
        return Ok(demo_packages());
    }
    Ok(packages)
}

/// Builds calculators for packages and renders their summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutProcessor {
    factory: TrainingFactory,
    format: OutputFormat,
}

impl WorkoutProcessor {
    /// Create a processor from an explicit factory and output format
    #[must_use]
    pub const fn new(factory: TrainingFactory, format: OutputFormat) -> Self {
        Self { factory, format }
    }

    /// Create a processor from loaded configuration
    #[must_use]
    pub const fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.factory(), config.output_format)
    }

    /// Compute the summary for one package
    ///
    /// # Errors
    ///
    /// Returns the factory or calculator error converted into `AppError`
    pub fn summarize(&self, package: &RawPackage) -> AppResult<InfoMessage> {
        let training = self.factory.build(&package.workout_type, &package.data)?;
        Ok(training.build_summary()?)
    }

    /// Compute and render the summary for one package
    ///
    /// # Errors
    ///
    /// Returns any error from [`WorkoutProcessor::summarize`] or from formatting
    pub fn render(&self, package: &RawPackage) -> AppResult<String> {
        let summary = self.summarize(package)?;
        Ok(format_summary(&summary, self.format)?.data)
    }

    /// Render every package as one line, stopping at the first failure
    ///
    /// Returns the number of packages written.
    ///
    /// # Errors
    ///
    /// Returns the first package error, or a storage error if writing fails
    pub fn run<W: Write>(&self, packages: &[RawPackage], out: &mut W) -> AppResult<usize> {
        for (index, package) in packages.iter().enumerate() {
            let line = self.render(package).inspect_err(|e| {
                warn!(
                    index,
                    workout_type = %package.workout_type,
                    error = %e,
                    "Failed to process workout package"
                );
            })?;
            writeln!(out, "{line}")
                .map_err(|e| AppError::storage("failed to write summary").with_source(e))?;
            debug!(index, workout_type = %package.workout_type, "Processed workout package");
        }

        info!(
            processed = packages.len(),
            format = %self.format,
            "Processed workout packages"
        );
        Ok(packages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_package_spec_keeps_integers() {
        let package = parse_package_spec("WLK: 9000, 1.5, 75, 180").unwrap();
        assert_eq!(package.workout_type, "WLK");
        assert_eq!(package.data.len(), 4);
        assert!(package.data[0].is_u64());
        assert!(package.data[1].is_f64());
    }

    #[test]
    fn test_parse_package_spec_rejects_garbage() {
        assert_eq!(
            parse_package_spec("RUN 1,2,3").unwrap_err().code,
            ErrorCode::InvalidInput
        );
        assert!(parse_package_spec("RUN:1,abc,3").is_err());
        assert!(parse_package_spec("RUN:1,inf,3").is_err());
    }

    #[test]
    fn test_parse_package_spec_rejects_empty_fields() {
        let err = parse_package_spec("RUN:15000,,1,75").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("value 2"));
        assert!(parse_package_spec("RUN:,15000,1,75").is_err());
        assert!(parse_package_spec("RUN:15000,1,75,,").is_err());
    }

    #[test]
    fn test_parse_package_spec_allows_trailing_comma() {
        let package = parse_package_spec("RUN:15000,1,75,").unwrap();
        assert_eq!(package.data.len(), 3);
    }

    #[test]
    fn test_demo_packages_cover_every_discipline() {
        let codes: Vec<_> = demo_packages()
            .into_iter()
            .map(|package| package.workout_type)
            .collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let packages = vec![
            RawPackage::new("RUN", vec![15_000.into(), 1.into(), 75.into()]),
            RawPackage::new("XYZ", vec![1.into()]),
            RawPackage::new("RUN", vec![15_000.into(), 1.into(), 75.into()]),
        ];
        let mut out = Vec::new();
        let err = WorkoutProcessor::default()
            .run(&packages, &mut out)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.lines().count(), 1);
    }
}
