// ABOUTME: Training factory mapping discipline codes and raw sensor tuples to calculators
// ABOUTME: Parses positional samples into typed packages with optional strict validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Factory
//!
//! Sensor packages arrive as a discipline code plus an ordered list of numbers.
//! The factory resolves the code, checks the tuple against the discipline's
//! field list, and produces a typed [`WorkoutPackage`] with named fields before
//! handing out a boxed [`Training`] calculator.
//!
//! | Code | Fields |
//! |---|---|
//! | `RUN` | `action_count, duration_hours, weight_kg` |
//! | `WLK` | `action_count, duration_hours, weight_kg, height_cm` |
//! | `SWM` | `action_count, duration_hours, weight_kg, pool_length_m, pool_lap_count` |
//!
//! Count fields must be non-negative JSON integers; every other field accepts
//! any JSON number.

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::TrainingError;
use crate::models::Discipline;
use crate::training::{Running, Session, SportsWalking, Swimming, Training};

/// Typed, named-field view of one sensor package
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutPackage {
    /// Running sample
    Running(Running),
    /// Sports walking sample
    SportsWalking(SportsWalking),
    /// Swimming sample
    Swimming(Swimming),
}

impl WorkoutPackage {
    /// Parse a positional tuple for the given discipline
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::ConstructionMismatch` if the tuple length differs
    /// from the discipline's field count or a field has the wrong type
    pub fn from_values(discipline: Discipline, data: &[Value]) -> Result<Self, TrainingError> {
        let fields = SampleFields::new(discipline, data)?;
        let session = Session::new(fields.count(0)?, fields.number(1)?, fields.number(2)?);

        Ok(match discipline {
            Discipline::Running => Self::Running(Running::new(session)),
            Discipline::SportsWalking => {
                Self::SportsWalking(SportsWalking::new(session, fields.number(3)?))
            }
            Discipline::Swimming => Self::Swimming(Swimming::new(
                session,
                fields.number(3)?,
                fields.count(4)?,
            )),
        })
    }

    /// Discipline of this package
    #[must_use]
    pub const fn discipline(&self) -> Discipline {
        match self {
            Self::Running(_) => Discipline::Running,
            Self::SportsWalking(_) => Discipline::SportsWalking,
            Self::Swimming(_) => Discipline::Swimming,
        }
    }

    /// Reject numeric input that would make the formulas divide by zero or
    /// report nonsense
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::DegenerateInput` naming the first offending field
    pub fn validate(&self) -> Result<(), TrainingError> {
        let session = match self {
            Self::Running(run) => &run.session,
            Self::SportsWalking(walk) => &walk.session,
            Self::Swimming(swim) => &swim.session,
        };
        require_positive("duration_hours", session.duration_hours)?;
        require_non_negative("weight_kg", session.weight_kg)?;

        match self {
            Self::Running(_) => Ok(()),
            Self::SportsWalking(walk) => require_positive("height_cm", walk.height_cm),
            Self::Swimming(swim) => require_non_negative("pool_length_m", swim.pool_length_m),
        }
    }

    /// Convert into a calculator
    #[must_use]
    pub fn into_training(self) -> Box<dyn Training> {
        match self {
            Self::Running(run) => Box::new(run),
            Self::SportsWalking(walk) => Box::new(walk),
            Self::Swimming(swim) => Box::new(swim),
        }
    }
}

/// Builds calculators from raw sensor packages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainingFactory {
    strict_inputs: bool,
}

impl TrainingFactory {
    /// Factory that passes numeric input through unchecked
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_inputs: false,
        }
    }

    /// Factory with an explicit input policy
    #[must_use]
    pub const fn with_strict_inputs(strict_inputs: bool) -> Self {
        Self { strict_inputs }
    }

    /// Whether degenerate numeric input is rejected
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict_inputs
    }

    /// Parse a raw package into its typed form
    ///
    /// # Errors
    ///
    /// - `TrainingError::UnknownDiscipline` if the code is not registered
    /// - `TrainingError::ConstructionMismatch` if the tuple does not fit
    /// - `TrainingError::DegenerateInput` in strict mode for unusable values
    pub fn parse(&self, code: &str, data: &[Value]) -> Result<WorkoutPackage, TrainingError> {
        let discipline = Discipline::from_code(code).inspect_err(|_| {
            warn!(code = %code, "Rejected unknown discipline code");
        })?;

        let package = WorkoutPackage::from_values(discipline, data)?;
        if self.strict_inputs {
            package.validate()?;
        }

        debug!(
            discipline = %discipline,
            fields = data.len(),
            strict = self.strict_inputs,
            "Constructed training calculator"
        );
        Ok(package)
    }

    /// Build a calculator from a raw package
    ///
    /// # Errors
    ///
    /// Same as [`TrainingFactory::parse`]
    pub fn build(&self, code: &str, data: &[Value]) -> Result<Box<dyn Training>, TrainingError> {
        Ok(self.parse(code, data)?.into_training())
    }
}

/// Build a calculator with the default (unchecked) input policy
///
/// # Errors
///
/// Same as [`TrainingFactory::parse`]
pub fn read_package(code: &str, data: &[Value]) -> Result<Box<dyn Training>, TrainingError> {
    TrainingFactory::new().build(code, data)
}

/// Positional accessor over a tuple whose length already matches
struct SampleFields<'a> {
    discipline: Discipline,
    data: &'a [Value],
}

impl<'a> SampleFields<'a> {
    fn new(discipline: Discipline, data: &'a [Value]) -> Result<Self, TrainingError> {
        let expected = discipline.field_names().len();
        if data.len() != expected {
            return Err(TrainingError::construction_mismatch(
                discipline,
                format!(
                    "expected {expected} values ({}), got {}",
                    discipline.field_names().join(", "),
                    data.len()
                ),
            ));
        }
        Ok(Self { discipline, data })
    }

    fn field(&self, index: usize) -> Result<(&'static str, &'a Value), TrainingError> {
        let name = self.discipline.field_names().get(index).copied();
        match (name, self.data.get(index)) {
            (Some(name), Some(value)) => Ok((name, value)),
            _ => Err(TrainingError::construction_mismatch(
                self.discipline,
                format!("missing value at position {index}"),
            )),
        }
    }

    fn count(&self, index: usize) -> Result<u32, TrainingError> {
        let (name, value) = self.field(index)?;
        value
            .as_u64()
            .and_then(|count| u32::try_from(count).ok())
            .ok_or_else(|| {
                TrainingError::construction_mismatch(
                    self.discipline,
                    format!("{name} must be a non-negative integer, got {value}"),
                )
            })
    }

    fn number(&self, index: usize) -> Result<f64, TrainingError> {
        let (name, value) = self.field(index)?;
        value.as_f64().ok_or_else(|| {
            TrainingError::construction_mismatch(
                self.discipline,
                format!("{name} must be a number, got {value}"),
            )
        })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), TrainingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrainingError::degenerate(field, value))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), TrainingError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TrainingError::degenerate(field, value))
    }
}
