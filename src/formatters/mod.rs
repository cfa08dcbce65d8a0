// ABOUTME: Output format abstraction for rendering training summaries
// ABOUTME: Supports the one-line text summary (default) and JSON records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, the human-readable line from `InfoMessage::message`
//! - **JSON**: One JSON object per summary with unrounded values
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_stats::formatters::{format_summary, OutputFormat};
//!
//! let output = format_summary(&summary, OutputFormat::Json)?;
//! println!("{}", output.data);
//! ```

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, ErrorCode};
use crate::models::InfoMessage;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable one-line summary (default)
    #[default]
    Text,
    /// JSON object per summary
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    /// Parse a format name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(FormatError {
                message: format!("unknown output format '{other}' (expected text or json)"),
                format: Self::default(),
            }),
        }
    }
}

/// Formatted output containing the rendered summary and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered summary
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
    }
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails (for example a
/// non-finite value produced by a zero duration, which JSON cannot carry)
pub fn format_summary(
    summary: &InfoMessage,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => summary.message(),
        OutputFormat::Json => {
            let value = serde_json::to_value(summary).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?;
            let has_non_finite = value
                .as_object()
                .is_some_and(|fields| fields.values().any(Value::is_null));
            if has_non_finite {
                return Err(FormatError {
                    message: "summary contains non-finite values".to_owned(),
                    format,
                });
            }
            value.to_string()
        }
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
