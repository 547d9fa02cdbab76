//! Activity model.
//!
//! An activity is one timed, titled item in a timetable: a class, a work
//! shift, a study session. Its title is the stable identity used when an
//! updated version replaces it in a plan.
//!
//! # Time Model
//! Wall-clock `NaiveDateTime` with minute resolution by convention.
//! Windows are half-open `[start, end)`: two activities that only touch
//! at an endpoint do not overlap.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Priority assigned when a caller supplies none.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A timed activity tracked for scheduling conflicts.
///
/// Fixed on construction except for `start`/`end`, which only the owning
/// plan reassigns when it shifts the activity out of an overlap, and the
/// `conflicts`/`conflict_info` pair, which the plan sets while resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Title — unique key within a plan.
    pub title: String,
    /// Window start (inclusive).
    pub start: NaiveDateTime,
    /// Window end (exclusive).
    pub end: NaiveDateTime,
    /// Scheduling priority (higher = less likely to be moved).
    pub priority: i32,
    /// Free-form classification tag ("class", "work", "study"). Not used
    /// in resolution.
    pub kind: String,
    /// Whether this activity was moved or overlapped another.
    pub conflicts: bool,
    /// Description of the most recent shift affecting this activity.
    pub conflict_info: Option<String>,
}

impl Activity {
    /// Creates an activity with the default priority and an empty kind.
    ///
    /// Fails if the title is empty or `start` is not before `end`.
    /// Callers parse and validate raw text before this point; the
    /// constructor assumes already-parsed timestamps.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> PlanResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(PlanError::EmptyTitle);
        }
        if start >= end {
            return Err(PlanError::InvalidWindow { title, start, end });
        }
        Ok(Self {
            title,
            start,
            end,
            priority: DEFAULT_PRIORITY,
            kind: String::new(),
            conflicts: false,
            conflict_info: None,
        })
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the classification tag.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Whether two activities' windows intersect.
    ///
    /// Strict half-open test: exact touching endpoints do not count.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Window length (`end - start`).
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_activity_creation() {
        let act = Activity::new("Math Class", t(10, 0), t(11, 15))
            .unwrap()
            .with_priority(3)
            .with_kind("class");

        assert_eq!(act.title, "Math Class");
        assert_eq!(act.kind, "class");
        assert_eq!(act.priority, 3);
        assert_eq!(act.start, t(10, 0));
        assert_eq!(act.end, t(11, 15));
        assert!(!act.conflicts);
        assert!(act.conflict_info.is_none());
    }

    #[test]
    fn test_default_priority() {
        let act = Activity::new("Reading", t(9, 0), t(10, 0)).unwrap();
        assert_eq!(act.priority, DEFAULT_PRIORITY);
        assert_eq!(act.kind, "");
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = Activity::new("Backwards", t(11, 0), t(10, 0)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidWindow { .. }));

        // Zero-length windows are rejected too
        let err = Activity::new("Instant", t(10, 0), t(10, 0)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidWindow { .. }));
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(
            Activity::new("", t(9, 0), t(10, 0)).unwrap_err(),
            PlanError::EmptyTitle
        );
        assert_eq!(
            Activity::new("   ", t(9, 0), t(10, 0)).unwrap_err(),
            PlanError::EmptyTitle
        );
    }

    #[test]
    fn test_overlaps() {
        let a = Activity::new("A", t(9, 0), t(10, 0)).unwrap();
        let b = Activity::new("B", t(9, 30), t(10, 30)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Activity::new("C", t(10, 30), t(11, 0)).unwrap();
        assert!(!a.overlaps(&c));

        // Containment counts as overlap
        let inner = Activity::new("Inner", t(9, 15), t(9, 45)).unwrap();
        assert!(a.overlaps(&inner));
        assert!(inner.overlaps(&a));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = Activity::new("A", t(9, 0), t(10, 0)).unwrap();
        let b = Activity::new("B", t(10, 0), t(11, 0)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_duration() {
        let act = Activity::new("Lab", t(10, 15), t(11, 0)).unwrap();
        assert_eq!(act.duration(), Duration::minutes(45));
    }

    #[test]
    fn test_field_equality() {
        let a = Activity::new("Same", t(9, 0), t(10, 0)).unwrap().with_priority(2);
        let b = Activity::new("Same", t(9, 0), t(10, 0)).unwrap().with_priority(2);
        assert_eq!(a, b);

        let c = b.clone().with_priority(3);
        assert_ne!(a, c);
    }
}
