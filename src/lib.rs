//! Personal timetable engine.
//!
//! Maintains a plan of timed activities (classes, work shifts, study
//! sessions) and resolves time overlaps automatically with a priority
//! rule: when two activities collide, the lower-priority one is pushed
//! to start five minutes after the other ends, keeping its original
//! duration. A shift can collide with the next activity in turn, so
//! resolution cascades until the plan is overlap-free.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Conflict`
//! - **`plan`**: `Plan` — insertion, conflict resolution, refresh
//! - **`intake`**: Parsing of raw activity requests into validated activities
//! - **`report`**: Human-readable rendering of plans and conflict records
//! - **`error`**: Crate error type
//!
//! # Boundaries
//!
//! The engine never reads input, prints, or persists anything. Callers
//! feed it constructed (or intake-parsed) activities and render the
//! returned conflict records themselves. The `Plan` holds the only
//! authoritative copy of each activity's current state; re-fetch through
//! its accessors after any mutating call.
//!
//! # Reference
//!
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4:
//! Priority Dispatching

pub mod error;
pub mod intake;
pub mod models;
pub mod plan;
pub mod report;
