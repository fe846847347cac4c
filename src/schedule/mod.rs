//! # Recurrence predicates for schedule-gated consumers.
//!
//! A [`Schedule`] answers one question: does a given instant match the
//! configured recurrence? Evaluation is deterministic and has no side
//! effects, which keeps the predicate trivially testable.
//!
//! Consumers hold zero or more schedules; they are OR-combined, so any
//! single match fires the consumer's trigger once (see
//! [`TimeConsumer`](crate::consumers::TimeConsumer)).
//!
//! ## Matching semantics
//! Matching is date-agnostic and second-precision. `OncePerDay` compares the
//! instant's UTC time-of-day against the configured time, which is what
//! "once per day" implies; exact-instant equality would make a schedule fire
//! at most once ever.
//!
//! ## Example
//! ```rust
//! use chrono::{NaiveTime, TimeZone, Utc};
//! use omnibus::Schedule;
//!
//! let daily = Schedule::once_per_day(NaiveTime::from_hms_opt(14, 30, 0).unwrap());
//! let hit = Utc.with_ymd_and_hms(2019, 7, 4, 14, 30, 0).unwrap();
//! let miss = Utc.with_ymd_and_hms(2019, 7, 4, 14, 30, 1).unwrap();
//!
//! assert!(daily.is_match(hit));
//! assert!(!daily.is_match(miss));
//! ```

use chrono::{DateTime, NaiveTime, Timelike, Utc};

/// Recurrence descriptor: a frequency classifier plus its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Matches once per day, when the instant's UTC time-of-day equals `at`
    /// (second precision, date-agnostic).
    OncePerDay { at: NaiveTime },

    /// Matches once per minute, when the instant's seconds-of-minute field
    /// equals `at_second`.
    OncePerMinute { at_second: u32 },
}

impl Schedule {
    /// Daily recurrence at the given UTC time-of-day.
    pub fn once_per_day(at: NaiveTime) -> Self {
        Self::OncePerDay { at }
    }

    /// Per-minute recurrence at the given second offset (wrapped into 0..60).
    pub fn once_per_minute(at_second: u32) -> Self {
        Self::OncePerMinute {
            at_second: at_second % 60,
        }
    }

    /// Returns `true` when `instant` falls on this recurrence.
    pub fn is_match(&self, instant: DateTime<Utc>) -> bool {
        match *self {
            Schedule::OncePerDay { at } => {
                let t = instant.time();
                (t.hour(), t.minute(), t.second()) == (at.hour(), at.minute(), at.second())
            }
            Schedule::OncePerMinute { at_second } => instant.second() == at_second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 7, 4, h, m, s).unwrap()
    }

    #[test]
    fn once_per_day_matches_exact_time_of_day() {
        let s = Schedule::once_per_day(NaiveTime::from_hms_opt(9, 15, 30).unwrap());
        assert!(s.is_match(at(9, 15, 30)));
    }

    #[test]
    fn once_per_day_rejects_one_second_off() {
        let s = Schedule::once_per_day(NaiveTime::from_hms_opt(9, 15, 30).unwrap());
        assert!(!s.is_match(at(9, 15, 29)));
        assert!(!s.is_match(at(9, 15, 31)));
    }

    #[test]
    fn once_per_day_is_date_agnostic() {
        let s = Schedule::once_per_day(NaiveTime::from_hms_opt(9, 15, 30).unwrap());
        let other_day = Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 30).unwrap();
        assert!(s.is_match(other_day));
    }

    #[test]
    fn once_per_day_ignores_subsecond_noise() {
        let s = Schedule::once_per_day(NaiveTime::from_hms_opt(9, 15, 30).unwrap());
        let noisy = at(9, 15, 30) + chrono::Duration::milliseconds(250);
        assert!(s.is_match(noisy));
    }

    #[test]
    fn once_per_minute_matches_every_minute() {
        let s = Schedule::once_per_minute(42);
        assert!(s.is_match(at(9, 0, 42)));
        assert!(s.is_match(at(10, 30, 42)));
        assert!(!s.is_match(at(9, 0, 41)));
    }

    #[test]
    fn once_per_minute_wraps_unit_offset() {
        assert_eq!(
            Schedule::once_per_minute(72),
            Schedule::once_per_minute(12)
        );
    }
}
