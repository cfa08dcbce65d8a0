// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, stride lengths, calorie coefficients, and discipline codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Calculators read them as a per-discipline
//! table; nothing here is ever mutated.

/// Unit conversion and stride length constants
pub mod units;

/// Calorie formula coefficients per discipline
pub mod calories;

/// Discipline codes recognised by the training factory
pub mod discipline_codes {
    /// Running sample code
    pub const RUNNING: &str = "RUN";
    /// Sports walking sample code
    pub const SPORTS_WALKING: &str = "WLK";
    /// Swimming sample code
    pub const SWIMMING: &str = "SWM";
}

/// Service names used in structured logs
pub mod service_names {
    /// Workout statistics CLI service name
    pub const WORKOUT_STATS: &str = "workout-stats";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Output format selector (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
    /// Enables rejection of degenerate numeric input
    pub const STRICT_INPUTS: &str = "WORKOUT_STRICT_INPUTS";
    /// Path to a JSON file of workout packages
    pub const INPUT_PATH: &str = "WORKOUT_INPUT";
}

pub use units::{METERS_PER_KM, STEP_LENGTH_M, SWIM_STEP_LENGTH_M};
