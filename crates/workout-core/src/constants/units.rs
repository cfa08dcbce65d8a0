// ABOUTME: Unit conversion factors and stride lengths for distance calculation
// ABOUTME: Base step length for running and walking, stroke length for swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters in one kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Distance covered by one running or walking step (meters)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by one swimming stroke (meters)
pub const SWIM_STEP_LENGTH_M: f64 = 1.38;
