// ABOUTME: Immutable summary record produced by a training calculator
// ABOUTME: Renders distance, speed, and calories into a single display line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed results of one training session
///
/// Built once by `Training::build_summary` and consumed immediately by a
/// formatter. Distance, speed, and calories keep full precision here; rounding
/// only happens in [`InfoMessage::message`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Training type label (e.g. `Running`)
    pub training_type: String,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories spent in kcal
    pub calories_kcal: f64,
}

impl InfoMessage {
    /// Create a summary from computed values
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    /// Render the summary as one human-readable line
    ///
    /// Distance, speed, and calories always carry three decimal places; duration
    /// is printed as-is.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories spent: {:.3}",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
