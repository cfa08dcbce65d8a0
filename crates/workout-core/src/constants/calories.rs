// ABOUTME: Calorie formula coefficients for running, sports walking, and swimming
// ABOUTME: Each discipline module holds the two coefficients its formula multiplies by
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Running: `(18 x speed + 1.79) x weight / 1000 x hours`
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset added to the speed term
    pub const SPEED_OFFSET: f64 = 1.79;
}

/// Sports walking: `(0.035 x weight + (speed^2 / height) x 0.029 x weight) x hours`
pub mod walking {
    /// Weight multiplier for the resting component
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier for the speed-squared over height component
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming: `(speed + 1.1) x 2 x weight`
pub mod swimming {
    /// Offset added to mean speed (km/h)
    pub const SPEED_OFFSET: f64 = 1.1;
    /// Weight multiplier
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
