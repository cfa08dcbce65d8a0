// ABOUTME: Core data models re-exported from workout-core
// ABOUTME: Discipline tokens and the InfoMessage training summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::models::*;
