// ABOUTME: Swimming calculator with stroke length and pool-geometry speed
// ABOUTME: Overrides stride length, mean speed, and the calorie formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Session, Training};
use crate::constants::calories::swimming::{SPEED_OFFSET, WEIGHT_MULTIPLIER};
use crate::constants::{METERS_PER_KM, SWIM_STEP_LENGTH_M};
use crate::errors::TrainingError;
use crate::models::Discipline;

/// Swimming session
///
/// Distance is still stroke-based and reported in the summary, while speed and
/// calories come from the pool geometry alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    /// Shared session measurements
    pub session: Session,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_lap_count: u32,
}

impl Swimming {
    /// Create a swimming calculator
    #[must_use]
    pub const fn new(session: Session, pool_length_m: f64, pool_lap_count: u32) -> Self {
        Self {
            session,
            pool_length_m,
            pool_lap_count,
        }
    }
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        Discipline::Swimming.label()
    }

    fn step_length_m(&self) -> f64 {
        SWIM_STEP_LENGTH_M
    }

    /// `pool_length x laps / 1000 / hours`
    fn mean_speed(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count)
            / METERS_PER_KM
            / self.session.duration_hours
    }

    /// `(speed + 1.1) x 2 x weight`
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Ok((self.mean_speed() + SPEED_OFFSET) * WEIGHT_MULTIPLIER * self.session.weight_kg)
    }
}
