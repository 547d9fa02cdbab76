//! Activity intake boundary.
//!
//! Turns raw, user-supplied activity details into validated activities
//! before the plan ever sees them. The engine itself never parses text:
//! callers collect details however they like (prompts, forms, files),
//! build [`ActivityDraft`]s, and convert them here.
//!
//! Dates use `%Y-%m-%d`, times `%H:%M` (24-hour). Start and end fall on
//! the same date; windows spanning midnight are out of scope.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::models::{Activity, Conflict, DEFAULT_PRIORITY};
use crate::plan::Plan;

/// Default priority for class activities.
pub const CLASS_PRIORITY: i32 = 3;
/// Default priority for work activities.
pub const WORK_PRIORITY: i32 = 2;

/// Raw construction request for one activity.
///
/// Field values are uninterpreted text; [`ActivityDraft::into_activity`]
/// does all parsing and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDraft {
    /// Activity title, e.g. "Math Class" or "Work Shift".
    pub title: String,
    /// Classification tag, e.g. "class" or "work".
    pub kind: String,
    /// Date of the activity (`%Y-%m-%d`).
    pub date: String,
    /// Start time (`%H:%M`, 24-hour).
    pub start_time: String,
    /// End time (`%H:%M`, 24-hour).
    pub end_time: String,
    /// Explicit priority. `None` = derive from `kind`.
    pub priority: Option<i32>,
}

impl ActivityDraft {
    /// Creates a draft with no explicit priority.
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            priority: None,
        }
    }

    /// Sets an explicit priority, overriding the kind-based default.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Parses and validates the draft into an [`Activity`].
    ///
    /// Malformed date or time text fails here with
    /// [`PlanError::InvalidDateTime`]; an inverted or empty window fails
    /// in the activity constructor.
    pub fn into_activity(self) -> PlanResult<Activity> {
        let date = parse_date(&self.date)?;
        let start = date.and_time(parse_time(&self.start_time)?);
        let end = date.and_time(parse_time(&self.end_time)?);
        let priority = self
            .priority
            .unwrap_or_else(|| default_priority(&self.kind));

        Ok(Activity::new(self.title, start, end)?
            .with_priority(priority)
            .with_kind(self.kind))
    }
}

/// Priority assigned when a draft carries none: class = 3, work = 2,
/// anything else (study, ad-hoc) = 1.
pub fn default_priority(kind: &str) -> i32 {
    match kind {
        "class" => CLASS_PRIORITY,
        "work" => WORK_PRIORITY,
        _ => DEFAULT_PRIORITY,
    }
}

/// Drains a sequence of drafts into a plan.
///
/// Each draft is parsed and inserted in order; conflict records from all
/// insertions are accumulated. Stops at the first malformed draft,
/// leaving earlier insertions in place.
pub fn load_into(
    plan: &mut Plan,
    drafts: impl IntoIterator<Item = ActivityDraft>,
) -> PlanResult<Vec<Conflict>> {
    let mut records = Vec::new();
    for draft in drafts {
        records.extend(plan.add_activity(draft.into_activity()?));
    }
    Ok(records)
}

fn parse_date(value: &str) -> PlanResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| PlanError::InvalidDateTime {
        value: value.to_string(),
        source,
    })
}

fn parse_time(value: &str) -> PlanResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|source| PlanError::InvalidDateTime {
        value: value.to_string(),
        source,
    })
}
