// ABOUTME: Discipline enumeration for the three supported workout types
// ABOUTME: Maps sensor discipline codes to labels and expected sample fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use crate::constants::discipline_codes;
use crate::errors::TrainingError;

/// Workout discipline identified by a sensor package code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Running (`RUN`)
    Running,
    /// Sports walking (`WLK`)
    SportsWalking,
    /// Swimming (`SWM`)
    Swimming,
}

impl Discipline {
    /// All registered disciplines
    pub const ALL: [Self; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

    /// Resolve a sensor package code
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::UnknownDiscipline` if the code is not registered
    pub fn from_code(code: &str) -> Result<Self, TrainingError> {
        match code {
            discipline_codes::RUNNING => Ok(Self::Running),
            discipline_codes::SPORTS_WALKING => Ok(Self::SportsWalking),
            discipline_codes::SWIMMING => Ok(Self::Swimming),
            other => Err(TrainingError::unknown_discipline(other)),
        }
    }

    /// Sensor package code for this discipline
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => discipline_codes::RUNNING,
            Self::SportsWalking => discipline_codes::SPORTS_WALKING,
            Self::Swimming => discipline_codes::SWIMMING,
        }
    }

    /// Label shown as the training type in summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Ordered field names a raw sample for this discipline must carry
    #[must_use]
    pub const fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Discipline {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
