// ABOUTME: Running calculator with a speed-driven calorie formula
// ABOUTME: Uses the shared stride-based distance and mean speed unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Session, Training};
use crate::constants::calories::running::{SPEED_MULTIPLIER, SPEED_OFFSET};
use crate::constants::METERS_PER_KM;
use crate::errors::TrainingError;
use crate::models::Discipline;

/// Running session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    /// Shared session measurements
    pub session: Session,
}

impl Running {
    /// Create a running calculator
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        Discipline::Running.label()
    }

    /// `(18 x speed + 1.79) x weight / 1000 x hours`
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let speed_term = SPEED_MULTIPLIER.mul_add(self.mean_speed(), SPEED_OFFSET);
        Ok(speed_term * self.session.weight_kg / METERS_PER_KM * self.session.duration_hours)
    }
}
