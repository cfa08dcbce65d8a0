// ABOUTME: Training calculator abstraction with shared distance and speed math
// ABOUTME: Defines the Training trait, session state, and the bare base calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Calculators
//!
//! Each discipline is a small struct implementing [`Training`]. The trait
//! carries the shared stride-based distance and speed formulas as default
//! methods; disciplines override what differs:
//!
//! | Discipline | stride | `mean_speed` | `spent_calories` |
//! |---|---|---|---|
//! | [`Running`] | 0.65 m | default | overridden |
//! | [`SportsWalking`] | 0.65 m | default | overridden |
//! | [`Swimming`] | 1.38 m | pool geometry | overridden |
//! | [`BaseTraining`] | 0.65 m | default | not implemented |
//!
//! Numeric input is not validated here. A zero duration or height yields a
//! non-finite result; callers wanting rejection go through the strict factory
//! policy instead.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::constants::{METERS_PER_KM, STEP_LENGTH_M};
use crate::errors::TrainingError;
use crate::models::InfoMessage;

/// Raw measurements shared by every discipline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps (running, walking) or strokes (swimming)
    pub action_count: u32,
    /// Session length in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl Session {
    /// Create session measurements
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Workout statistics calculator
pub trait Training {
    /// Shared session measurements
    fn session(&self) -> &Session;

    /// Label reported as the training type
    fn training_type(&self) -> &'static str;

    /// Distance covered by a single action, in meters
    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.session().action_count) * self.step_length_m() / METERS_PER_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration_hours
    }

    /// Calories spent in kcal
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::UnimplementedOperation` unless the discipline
    /// provides its own formula
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Err(TrainingError::unimplemented(
            "spent_calories",
            self.training_type(),
        ))
    }

    /// Snapshot every statistic into a summary record
    ///
    /// Distance, speed, and calories are evaluated in that order; calorie
    /// formulas read the mean speed.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Training::spent_calories`]
    fn build_summary(&self) -> Result<InfoMessage, TrainingError> {
        let distance_km = self.distance();
        let mean_speed_kmh = self.mean_speed();
        let calories_kcal = self.spent_calories()?;
        Ok(InfoMessage::new(
            self.training_type(),
            self.session().duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        ))
    }
}

/// Base calculator without a calorie formula
///
/// Only useful for the distance and speed math; asking it for calories (or a
/// summary) fails with `UnimplementedOperation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTraining {
    session: Session,
}

impl BaseTraining {
    /// Create a base calculator
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Training for BaseTraining {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }
}
