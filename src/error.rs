//! Crate error type.
//!
//! All failures are deterministic input-shape failures surfaced to the
//! caller immediately; nothing is retried internally. Conflict resolution
//! itself never fails — overlaps are data to resolve, not errors.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result alias for fallible plan operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors raised by activity construction, intake parsing, and refresh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Activity constructed with an empty (or whitespace-only) title.
    #[error("activity title must not be empty")]
    EmptyTitle,

    /// Activity constructed with `start >= end`.
    #[error("'{title}': start {start} is not before end {end}")]
    InvalidWindow {
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Intake received date or time text chrono could not parse.
    #[error("invalid date or time '{value}'")]
    InvalidDateTime {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// Refresh targeted a title that is not in the plan.
    #[error("no activity titled '{0}' in the plan")]
    NotFound(String),
}
