//! Insertion and fixed-point overlap resolution.
//!
//! # Algorithm
//!
//! 1. Append the new activity and stable-sort by start (equal starts keep
//!    prior relative order, so a newcomer lands after existing entries).
//! 2. Scan adjacent pairs in ascending-start order. On overlap, the
//!    lower-priority member moves; on a priority tie, the later of the
//!    pair moves. The mover is reassigned to start five minutes after the
//!    anchor's end with its original duration.
//! 3. Every shift re-sorts and restarts the scan. The loop ends when a
//!    full pass performs no shift. In sorted order, adjacent non-overlap
//!    implies no pair overlaps at all, so the fixed point is global.
//!
//! A shift moves its mover strictly later, so collisions only propagate
//! toward later activities and the loop terminates. A quadratic shift
//! budget guards the fixed point anyway; exhausting it is a logic defect
//! and is logged, never reported as a caller error.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{PlanError, PlanResult};
use crate::models::{Activity, Conflict};

/// Gap in minutes between an anchor's end and a shifted mover's start.
pub const SHIFT_BUFFER_MINUTES: i64 = 5;

/// An ordered collection of activities with automatic conflict resolution.
///
/// Activities are kept sorted ascending by start after every mutating
/// operation. Titles act as stable identifiers: [`Plan::refresh_activity`]
/// replaces the activity carrying the same title.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timeplan::models::Activity;
/// use timeplan::plan::Plan;
///
/// let day = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
/// let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
///
/// let physics = Activity::new("Physics", at(9, 0), at(10, 0))
///     .unwrap()
///     .with_priority(3)
///     .with_kind("class");
/// let study = Activity::new("Study", at(9, 30), at(10, 30)).unwrap();
///
/// let mut plan = Plan::new();
/// assert!(plan.add_activity(physics).is_empty());
///
/// let conflicts = plan.add_activity(study);
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(plan.activity("Study").unwrap().start, at(10, 5));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    events: Vec<Activity>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activities in ascending-start order.
    pub fn events(&self) -> &[Activity] {
        &self.events
    }

    /// Looks up an activity by exact title.
    pub fn activity(&self, title: &str) -> Option<&Activity> {
        self.events.iter().find(|e| e.title == title)
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the plan holds no activities.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether no two activities overlap.
    ///
    /// Events are kept sorted, and in sorted order adjacent non-overlap
    /// implies pairwise non-overlap. Holds after every mutating call.
    pub fn is_conflict_free(&self) -> bool {
        self.events.windows(2).all(|pair| !pair[0].overlaps(&pair[1]))
    }

    /// Earliest start and latest end across the plan.
    pub fn span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.events.first()?.start;
        let end = self.events.iter().map(|e| e.end).max()?;
        Some((start, end))
    }

    /// Inserts an activity and resolves any overlaps it causes.
    ///
    /// Returns one [`Conflict`] record per shift performed, in the order
    /// the shifts happened; empty if the newcomer overlapped nothing.
    /// Activities not involved in any overlap are left untouched.
    ///
    /// Title uniqueness is the caller's contract: an activity meant to
    /// replace an existing one goes through [`Plan::refresh_activity`].
    pub fn add_activity(&mut self, activity: Activity) -> Vec<Conflict> {
        debug!(title = %activity.title, start = %activity.start, "adding activity");
        self.events.push(activity);
        self.sort_events();
        self.resolve_overlaps()
    }

    /// Replaces the activity with a matching title and re-resolves.
    ///
    /// The updated activity takes the old one's place (no duplicate
    /// remains) and is validated against the whole plan exactly as if
    /// newly added. Previously shifted activities are not reverted;
    /// resolution proceeds from current state.
    ///
    /// Fails with [`PlanError::NotFound`] if no activity carries the
    /// title, leaving the plan unchanged.
    pub fn refresh_activity(&mut self, updated: Activity) -> PlanResult<Vec<Conflict>> {
        let idx = self
            .events
            .iter()
            .position(|e| e.title == updated.title)
            .ok_or_else(|| PlanError::NotFound(updated.title.clone()))?;

        debug!(title = %updated.title, "refreshing activity");
        self.events[idx] = updated;
        self.sort_events();
        Ok(self.resolve_overlaps())
    }

    /// Stable sort by start. Equal starts keep prior relative order.
    fn sort_events(&mut self) {
        self.events.sort_by_key(|e| e.start);
    }

    /// Runs the shift loop to a fixed point and returns the records.
    fn resolve_overlaps(&mut self) -> Vec<Conflict> {
        let mut records = Vec::new();
        let budget = self.events.len() * self.events.len() + 1;
        let mut shifts = 0usize;

        'scan: loop {
            for i in 0..self.events.len().saturating_sub(1) {
                let earlier = &self.events[i];
                let later = &self.events[i + 1];
                if !earlier.overlaps(later) {
                    continue;
                }

                if shifts >= budget {
                    error!(shifts, "overlap resolution exceeded its shift budget");
                    debug_assert!(false, "overlap resolution failed to reach a fixed point");
                    break 'scan;
                }

                // Lower priority moves; on a tie the later of the pair moves.
                let (anchor, mover) = if earlier.priority < later.priority {
                    (i + 1, i)
                } else {
                    (i, i + 1)
                };
                records.push(self.shift_past(anchor, mover));
                shifts += 1;

                self.sort_events();
                continue 'scan;
            }
            break;
        }

        records
    }

    /// Pushes `mover` five minutes past `anchor`'s end, flags both, and
    /// returns the record. Indices refer to the current sorted order.
    fn shift_past(&mut self, anchor: usize, mover: usize) -> Conflict {
        let (anchor_title, anchor_end) = {
            let anchor = &mut self.events[anchor];
            anchor.conflicts = true;
            (anchor.title.clone(), anchor.end)
        };

        let mover = &mut self.events[mover];
        let duration = mover.duration();
        let previous_start = mover.start;
        let previous_end = mover.end;

        mover.start = anchor_end + Duration::minutes(SHIFT_BUFFER_MINUTES);
        mover.end = mover.start + duration;
        mover.conflicts = true;

        let record = Conflict::shift(
            anchor_title,
            mover.title.clone(),
            previous_start,
            previous_end,
            mover.start,
            mover.end,
        );
        mover.conflict_info = Some(record.message.clone());

        debug!(
            mover = %record.mover,
            anchor = %record.anchor,
            new_start = %record.new_start,
            "shifted activity"
        );

        record
    }
}
