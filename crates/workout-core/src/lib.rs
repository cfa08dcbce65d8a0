// ABOUTME: Core types and constants for the workout statistics engine
// ABOUTME: Foundation crate with error handling, unit constants, disciplines, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! statistics engine. Calculators, the factory, and the CLI live in the
//! `workout_stats` crate and build on the types defined here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `TrainingError`
//! - **constants**: Unit conversion factors, stride lengths, and calorie coefficients
//! - **models**: Discipline tokens and the `InfoMessage` summary record

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and per-discipline formula coefficients
pub mod constants;

/// Core data models (`Discipline`, `InfoMessage`)
pub mod models;
