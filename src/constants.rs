// ABOUTME: System-wide constants re-exported from workout-core
// ABOUTME: Unit conversions, stride lengths, calorie coefficients, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::constants::*;
