// ABOUTME: Core data models for workout statistics
// ABOUTME: Re-exports discipline tokens and the training summary record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Discipline enumeration and code parsing
pub mod discipline;

/// Immutable training summary record
pub mod summary;

pub use discipline::Discipline;
pub use summary::InfoMessage;
