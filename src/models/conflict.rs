//! Conflict record model.
//!
//! One record per shift performed during conflict resolution: which
//! activity held its slot (the anchor), which one moved (the mover), and
//! where the mover went.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A resolved scheduling conflict.
///
/// Titles and windows are owned copies taken at resolution time; the
/// record stays a valid snapshot even after the plan mutates further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Title of the activity that kept its slot.
    pub anchor: String,
    /// Title of the activity that was shifted.
    pub mover: String,
    /// Mover window before the shift.
    pub previous_start: NaiveDateTime,
    /// Mover window end before the shift.
    pub previous_end: NaiveDateTime,
    /// Mover window after the shift.
    pub new_start: NaiveDateTime,
    /// Mover window end after the shift.
    pub new_end: NaiveDateTime,
    /// Human-readable description of the shift.
    pub message: String,
}

impl Conflict {
    /// Creates a record for a mover pushed past an anchor.
    pub fn shift(
        anchor: impl Into<String>,
        mover: impl Into<String>,
        previous_start: NaiveDateTime,
        previous_end: NaiveDateTime,
        new_start: NaiveDateTime,
        new_end: NaiveDateTime,
    ) -> Self {
        let anchor = anchor.into();
        let mover = mover.into();
        let message = format!(
            "'{}' overlapped '{}' and was moved to {} - {}",
            mover,
            anchor,
            new_start.format("%Y-%m-%d %H:%M"),
            new_end.format("%H:%M"),
        );
        Self {
            anchor,
            mover,
            previous_start,
            previous_end,
            new_start,
            new_end,
            message,
        }
    }

    /// How far the mover was pushed.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.new_start - self.previous_start
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
    fn test_shift_record() {
        let c = Conflict::shift("Physics Class", "Study Session", t(9, 30), t(10, 30), t(10, 5), t(11, 5));

        assert_eq!(c.anchor, "Physics Class");
        assert_eq!(c.mover, "Study Session");
        assert!(c.message.contains("Physics Class"));
        assert!(c.message.contains("Study Session"));
        assert!(c.message.contains("10:05"));
    }

    #[test]
    fn test_delay() {
        let c = Conflict::shift("A", "B", t(9, 30), t(10, 30), t(10, 5), t(11, 5));
        assert_eq!(c.delay(), Duration::minutes(35));
    }

    #[test]
    fn test_serialization() {
        let c = Conflict::shift("A", "B", t(9, 30), t(10, 30), t(10, 5), t(11, 5));
        let json = serde_json::to_string(&c).unwrap();
        let back: Conflict = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
