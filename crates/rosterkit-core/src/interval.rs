//! TimeInterval - Recurring weekly time window with overlap testing

use std::fmt;

use chrono::{NaiveTime, Weekday};

use crate::error::InvalidInterval;

/// A half-open time range `[start, end)` on one day of the week.
///
/// Intervals recur weekly: "Mon 08:00-09:30" describes every Monday inside
/// an assignment's effective range. Boundaries have minute precision and
/// lie inside `[00:00, 24:00)`; `start < end` holds for every constructed
/// value, so zero-length and inverted intervals cannot exist.
///
/// Two intervals overlap when they share at least one minute of the week.
/// Back-to-back slots (one ending exactly when the other starts) do not
/// overlap, and intervals on different days never overlap.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use rosterkit_core::TimeInterval;
///
/// let first = TimeInterval::from_hm(Weekday::Mon, (8, 0), (9, 30)).unwrap();
/// let second = TimeInterval::from_hm(Weekday::Mon, (9, 0), (10, 0)).unwrap();
///
/// assert!(first.overlaps(&second));
/// assert_eq!(first.duration_minutes(), 90);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInterval {
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeInterval {
    /// Creates an interval from two times of day.
    ///
    /// Fails with [`InvalidInterval::StartNotBeforeEnd`] unless
    /// `start < end`.
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Result<Self, InvalidInterval> {
        if start >= end {
            return Err(InvalidInterval::StartNotBeforeEnd { start, end });
        }
        Ok(TimeInterval { day, start, end })
    }

    /// Creates an interval from `(hour, minute)` boundary pairs.
    pub fn from_hm(
        day: Weekday,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Result<Self, InvalidInterval> {
        TimeInterval::new(day, time_of_day(start.0, start.1)?, time_of_day(end.0, end.1)?)
    }

    /// Parses an interval from `"HH:MM"` boundary strings, the time format
    /// scheduling front ends exchange.
    pub fn parse(day: Weekday, start: &str, end: &str) -> Result<Self, InvalidInterval> {
        TimeInterval::new(day, parse_time_of_day(start)?, parse_time_of_day(end)?)
    }

    /// Returns the day of the week this interval recurs on.
    #[inline]
    pub const fn day(&self) -> Weekday {
        self.day
    }

    /// Returns the inclusive start time.
    #[inline]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the exclusive end time.
    #[inline]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Tests whether two intervals share any minute of the week.
    #[inline]
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// Returns the interval length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Debug for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeInterval({self})")
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime, InvalidInterval> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(InvalidInterval::OutOfRange { hour, minute })
}

fn parse_time_of_day(value: &str) -> Result<NaiveTime, InvalidInterval> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| InvalidInterval::Unparseable {
        value: value.to_string(),
    })
}
