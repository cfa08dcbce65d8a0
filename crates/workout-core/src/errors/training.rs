// ABOUTME: Structured errors for training calculator construction and evaluation
// ABOUTME: Covers unknown discipline codes, tuple mismatches, and unimplemented formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::ErrorCode;
use crate::models::Discipline;

/// Errors raised while building or evaluating a training calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// Discipline code matches none of the registered tokens
    #[error("Unknown discipline code '{code}'")]
    UnknownDiscipline {
        /// Code as supplied by the caller
        code: String,
    },

    /// Raw sample length or field types do not fit the discipline's parameters
    #[error("Cannot construct {discipline} from sample: {reason}")]
    ConstructionMismatch {
        /// Discipline the sample was routed to
        discipline: Discipline,
        /// What did not match
        reason: String,
    },

    /// Operation has no implementation for this training type
    #[error("Operation '{operation}' is not implemented for {training_type}")]
    UnimplementedOperation {
        /// Operation that was requested
        operation: &'static str,
        /// Label of the training type it was requested on
        training_type: &'static str,
    },

    /// Numeric input makes the formulas meaningless (only raised by strict validation)
    #[error("Degenerate input: {field} = {value}")]
    DegenerateInput {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
    },
}

impl TrainingError {
    /// Create an "unknown discipline" error
    #[must_use]
    pub fn unknown_discipline(code: impl Into<String>) -> Self {
        Self::UnknownDiscipline { code: code.into() }
    }

    /// Create a "construction mismatch" error
    #[must_use]
    pub fn construction_mismatch(discipline: Discipline, reason: impl Into<String>) -> Self {
        Self::ConstructionMismatch {
            discipline,
            reason: reason.into(),
        }
    }

    /// Create an "unimplemented operation" error
    #[must_use]
    pub const fn unimplemented(operation: &'static str, training_type: &'static str) -> Self {
        Self::UnimplementedOperation {
            operation,
            training_type,
        }
    }

    /// Create a "degenerate input" error
    #[must_use]
    pub const fn degenerate(field: &'static str, value: f64) -> Self {
        Self::DegenerateInput { field, value }
    }

    /// Application error code this error maps to
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownDiscipline { .. } => ErrorCode::InvalidInput,
            Self::ConstructionMismatch { .. } => ErrorCode::InvalidFormat,
            Self::UnimplementedOperation { .. } => ErrorCode::InternalError,
            Self::DegenerateInput { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}
