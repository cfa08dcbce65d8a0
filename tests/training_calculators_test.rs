// ABOUTME: Integration tests for the training calculators through the public API
// ABOUTME: Covers reference workouts, summary snapshots, and swimming speed independence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use workout_stats::errors::TrainingError;
use workout_stats::training::{BaseTraining, Running, Session, SportsWalking, Swimming, Training};

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{what}: expected {expected}, got {actual}"
    );
}

fn reference_calculators() -> Vec<Box<dyn Training>> {
    vec![
        Box::new(Swimming::new(Session::new(720, 1.0, 80.0), 25.0, 40)),
        Box::new(Running::new(Session::new(15_000, 1.0, 75.0))),
        Box::new(SportsWalking::new(Session::new(9000, 1.0, 75.0), 180.0)),
    ]
}

// === Reference workouts ===

#[test]
fn test_swimming_reference_summary() {
    let swim = Swimming::new(Session::new(720, 1.0, 80.0), 25.0, 40);
    let summary = swim.build_summary().unwrap();

    assert_eq!(summary.training_type, "Swimming");
    assert_close(summary.duration_hours, 1.0, "duration");
    assert_close(summary.distance_km, 0.9936, "distance");
    assert_close(summary.mean_speed_kmh, 1.0, "speed");
    assert_close(summary.calories_kcal, 336.0, "calories");
}

#[test]
fn test_running_reference_summary() {
    let run = Running::new(Session::new(15_000, 1.0, 75.0));
    let summary = run.build_summary().unwrap();

    assert_eq!(summary.training_type, "Running");
    assert_close(summary.distance_km, 9.75, "distance");
    assert_close(summary.mean_speed_kmh, 9.75, "speed");
    // (18 * 9.75 + 1.79) * 75 / 1000 * 1
    assert_close(summary.calories_kcal, 13.296_75, "calories");
}

#[test]
fn test_walking_reference_summary() {
    let walk = SportsWalking::new(Session::new(9000, 1.0, 75.0), 180.0);
    let summary = walk.build_summary().unwrap();

    assert_eq!(summary.training_type, "SportsWalking");
    assert_close(summary.distance_km, 5.85, "distance");
    assert_close(summary.mean_speed_kmh, 5.85, "speed");
    // 0.035 * 75 + (5.85^2 / 180) * 0.029 * 75
    assert_close(summary.calories_kcal, 3.038_521_875, "calories");
}

#[test]
fn test_reference_messages() {
    let messages: Vec<String> = reference_calculators()
        .iter()
        .map(|training| training.build_summary().unwrap().message())
        .collect();

    assert_eq!(
        messages,
        [
            "Training type: Swimming; Duration: 1 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories spent: 336.000",
            "Training type: Running; Duration: 1 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories spent: 13.297",
            "Training type: SportsWalking; Duration: 1 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories spent: 3.039",
        ]
    );
}

// === Properties ===

#[test]
fn test_running_distance_formula_across_counts() {
    for action_count in [0_u32, 1, 999, 15_000, 123_457, u32::MAX] {
        let run = Running::new(Session::new(action_count, 1.0, 70.0));
        let expected = f64::from(action_count) * 0.65 / 1000.0;
        assert!(
            (run.distance() - expected).abs() <= expected.abs() * 1e-12 + TOLERANCE,
            "distance for {action_count} steps"
        );
    }
}

#[test]
fn test_summary_is_faithful_snapshot() {
    for training in reference_calculators() {
        let summary = training.build_summary().unwrap();
        assert_eq!(summary.distance_km, training.distance());
        assert_eq!(summary.mean_speed_kmh, training.mean_speed());
        assert_eq!(summary.calories_kcal, training.spent_calories().unwrap());
        assert_eq!(summary.duration_hours, training.session().duration_hours);
    }
}

#[test]
fn test_summary_is_repeatable() {
    for training in reference_calculators() {
        assert_eq!(
            training.build_summary().unwrap(),
            training.build_summary().unwrap()
        );
    }
}

#[test]
fn test_swimming_speed_independent_of_action_count() {
    let speeds: Vec<f64> = [0_u32, 1, 720, 50_000]
        .into_iter()
        .map(|strokes| Swimming::new(Session::new(strokes, 0.75, 62.0), 50.0, 36).mean_speed())
        .collect();
    assert!(speeds.windows(2).all(|pair| pair[0] == pair[1]));
    assert_close(speeds[0], 50.0 * 36.0 / 1000.0 / 0.75, "pool speed");
}

#[test]
fn test_swimming_distance_uses_stroke_length() {
    let swim = Swimming::new(Session::new(1000, 1.0, 70.0), 25.0, 0);
    assert_close(swim.step_length_m(), 1.38, "stroke length");
    assert_close(swim.distance(), 1.38, "distance");
    // Reported distance and pool speed are allowed to disagree
    assert_close(swim.mean_speed(), 0.0, "speed");
}

#[test]
fn test_formatted_fields_have_three_decimals() {
    let samples = [
        Running::new(Session::new(1, 3.0, 0.1)).build_summary().unwrap(),
        Running::new(Session::new(77_777, 0.33, 101.5))
            .build_summary()
            .unwrap(),
        Swimming::new(Session::new(3, 2.5, 55.5), 33.3, 7)
            .build_summary()
            .unwrap(),
    ];
    for summary in samples {
        let message = summary.message();
        for label in ["Distance: ", "Avg speed: ", "Calories spent: "] {
            let start = message.find(label).unwrap() + label.len();
            let number: String = message[start..]
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            let decimals = number.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 3, "{label} in {message}");
        }
    }
}

// === Base calculator ===

#[test]
fn test_base_training_has_no_calorie_formula() {
    let base = BaseTraining::new(Session::new(15_000, 1.0, 75.0));
    assert_close(base.distance(), 9.75, "distance");
    assert_close(base.mean_speed(), 9.75, "speed");

    let err = base.build_summary().unwrap_err();
    assert!(matches!(
        err,
        TrainingError::UnimplementedOperation {
            operation: "spent_calories",
            ..
        }
    ));
}

#[test]
fn test_zero_duration_propagates_non_finite_values() {
    let run = Running::new(Session::new(15_000, 0.0, 75.0));
    let summary = run.build_summary().unwrap();
    assert!(summary.mean_speed_kmh.is_infinite());
    assert!(!summary.calories_kcal.is_finite());
}
