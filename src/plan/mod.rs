//! Plan container and conflict resolution.
//!
//! A [`Plan`] owns an ordered collection of activities and resolves time
//! overlaps on every insertion or refresh: the lower-priority side of a
//! collision is pushed five minutes past the other's end, keeping its
//! duration, and the push cascades until nothing overlaps.
//!
//! # Ownership
//!
//! The plan holds the only authoritative copy of each activity. External
//! holders of a previously-returned reference read a possibly-stale
//! snapshot once the plan mutates; re-fetch through [`Plan::activity`] or
//! [`Plan::events`] after any mutating call.

mod engine;

pub use engine::{Plan, SHIFT_BUFFER_MINUTES};
