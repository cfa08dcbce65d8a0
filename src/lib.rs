// ABOUTME: Main library entry point for the workout statistics engine
// ABOUTME: Computes distance, speed, and calories for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Stats
//!
//! Computes workout statistics from raw sensor packages and renders a
//! one-line summary per workout.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::Value;
//! use workout_stats::factory::read_package;
//! use workout_stats::training::Training;
//!
//! let data: [Value; 3] = [15000.into(), 1.into(), 75.into()];
//! let training = read_package("RUN", &data)?;
//! println!("{}", training.build_summary()?.message());
//! # Ok::<(), workout_stats::errors::TrainingError>(())
//! ```
//!
//! ## Modules
//!
//! - **training**: The `Training` trait and the per-discipline calculators
//! - **factory**: Discipline code dispatch and typed package parsing
//! - **driver**: Package loading and the processing loop
//! - **formatters**: Text and JSON rendering of summaries
//! - **config** / **logging**: Environment-driven settings and tracing setup

/// Error types re-exported from `workout-core`
pub mod errors;

/// Constants re-exported from `workout-core`
pub mod constants;

/// Data models re-exported from `workout-core`
pub mod models;

/// Training calculators and the shared `Training` trait
pub mod training;

/// Discipline code dispatch to calculators
pub mod factory;

/// Summary output formats
pub mod formatters;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Package loading and processing loop
pub mod driver;
