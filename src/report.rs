//! Human-readable rendering of plans and conflict records.
//!
//! The engine formats nothing on its own; this module turns a plan and
//! the records returned by insertion/refresh into display strings for
//! callers to print, log, or ship elsewhere.

use serde::{Deserialize, Serialize};

use crate::models::Conflict;
use crate::plan::Plan;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One line per activity in ascending-start order:
/// `"Title: 2025-11-10 09:00 - 2025-11-10 10:00"`.
pub fn schedule_lines(plan: &Plan) -> Vec<String> {
    plan.events()
        .iter()
        .map(|e| {
            format!(
                "{}: {} - {}",
                e.title,
                e.start.format(TIME_FORMAT),
                e.end.format(TIME_FORMAT)
            )
        })
        .collect()
}

/// One line per conflict record, in resolution order.
pub fn conflict_lines(conflicts: &[Conflict]) -> Vec<String> {
    conflicts.iter().map(|c| c.message.clone()).collect()
}

/// The whole schedule as one newline-joined block.
pub fn render_schedule(plan: &Plan) -> String {
    schedule_lines(plan).join("\n")
}

/// Read-only summary of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDigest {
    /// Number of activities in the plan.
    pub activity_count: usize,
    /// Number of activities flagged by conflict resolution.
    pub flagged_count: usize,
    /// Total scheduled minutes across all activities.
    pub scheduled_minutes: i64,
}

/// Computes summary counts for a plan.
pub fn digest(plan: &Plan) -> PlanDigest {
    PlanDigest {
        activity_count: plan.len(),
        flagged_count: plan.events().iter().filter(|e| e.conflicts).count(),
        scheduled_minutes: plan
            .events()
            .iter()
            .map(|e| e.duration().num_minutes())
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;
    use chrono::{NaiveDate, NaiveDateTime};

    fn t(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample_plan() -> (Plan, Vec<Conflict>) {
        let mut plan = Plan::new();
        plan.add_activity(
            Activity::new("Math Class", t(9, 0), t(10, 0))
                .unwrap()
                .with_priority(3)
                .with_kind("class"),
        );
        let conflicts = plan.add_activity(
            Activity::new("Study Chemistry", t(9, 30), t(11, 0))
                .unwrap()
                .with_kind("study"),
        );
        (plan, conflicts)
    }

    #[test]
    fn test_schedule_lines() {
        let (plan, _) = sample_plan();
        let lines = schedule_lines(&plan);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Math Class: 2025-11-10 09:00 - 2025-11-10 10:00");
        assert_eq!(
            lines[1],
            "Study Chemistry: 2025-11-10 10:05 - 2025-11-10 11:35"
        );
    }

    #[test]
    fn test_conflict_lines() {
        let (_, conflicts) = sample_plan();
        let lines = conflict_lines(&conflicts);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Math Class"));
        assert!(lines[0].contains("Study Chemistry"));
    }

    #[test]
    fn test_render_schedule_joins_lines() {
        let (plan, _) = sample_plan();
        let block = render_schedule(&plan);
        assert_eq!(block.lines().count(), 2);
        assert!(block.starts_with("Math Class:"));
    }

    #[test]
    fn test_digest() {
        let (plan, _) = sample_plan();
        let d = digest(&plan);

        assert_eq!(d.activity_count, 2);
        assert_eq!(d.flagged_count, 2);
        assert_eq!(d.scheduled_minutes, 60 + 90);
    }

    #[test]
    fn test_digest_empty_plan() {
        let d = digest(&Plan::new());
        assert_eq!(d, PlanDigest {
            activity_count: 0,
            flagged_count: 0,
            scheduled_minutes: 0,
        });
    }
}
