//! Timetable domain models.
//!
//! Provides the core data types for a personal timetable: the timed,
//! titled, prioritized [`Activity`] and the [`Conflict`] record describing
//! one resolution shift.
//!
//! # Ownership
//!
//! `conflicts` and `conflict_info` on an activity are owned by the plan:
//! they start cleared and are only mutated as a side effect of insertion
//! or refresh. Conflict records carry owned copies of titles and windows,
//! so they remain valid snapshots after the plan mutates further.

mod activity;
mod conflict;

pub use activity::{Activity, DEFAULT_PRIORITY};
pub use conflict::Conflict;
