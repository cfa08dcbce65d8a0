// ABOUTME: Sports walking calculator whose calorie formula depends on athlete height
// ABOUTME: Uses the shared stride-based distance and mean speed unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Session, Training};
use crate::constants::calories::walking::{SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER};
use crate::errors::TrainingError;
use crate::models::Discipline;

/// Sports walking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    /// Shared session measurements
    pub session: Session,
    /// Athlete height in centimeters (must be non-zero)
    pub height_cm: f64,
}

impl SportsWalking {
    /// Create a sports walking calculator
    #[must_use]
    pub const fn new(session: Session, height_cm: f64) -> Self {
        Self { session, height_cm }
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        Discipline::SportsWalking.label()
    }

    /// `(0.035 x weight + (speed^2 / height) x 0.029 x weight) x hours`
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let weight = self.session.weight_kg;
        let speed_term = self.mean_speed().powi(2) / self.height_cm;
        let per_hour =
            (speed_term * SPEED_HEIGHT_MULTIPLIER).mul_add(weight, WEIGHT_MULTIPLIER * weight);
        Ok(per_hour * self.session.duration_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_walk() {
        let walk = SportsWalking::new(Session::new(9000, 1.0, 75.0), 180.0);
        assert!((walk.distance() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed() - 5.85).abs() < 1e-9);
        // 0.035 * 75 + (5.85^2 / 180) * 0.029 * 75
        assert!((walk.spent_calories().unwrap() - 3.038_521_875).abs() < 1e-9);
    }

    #[test]
    fn test_zero_height_is_not_guarded() {
        let walk = SportsWalking::new(Session::new(9000, 1.0, 75.0), 0.0);
        assert!(!walk.spent_calories().unwrap().is_finite());
    }
}
