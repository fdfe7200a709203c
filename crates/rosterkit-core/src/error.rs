//! Error types for rosterkit core

use chrono::NaiveTime;
use thiserror::Error;

/// Rejected [`TimeInterval`](crate::TimeInterval) construction input.
///
/// Raised only while building an interval; a constructed interval always
/// satisfies `start < end` with both boundaries inside `[00:00, 24:00)`,
/// so detection never sees a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInterval {
    /// The start time is not strictly before the end time.
    #[error("interval start {start} is not before end {end}")]
    StartNotBeforeEnd {
        /// Requested start of the interval.
        start: NaiveTime,
        /// Requested end of the interval.
        end: NaiveTime,
    },

    /// An hour/minute pair does not name a time of day.
    #[error("time {hour:02}:{minute:02} is outside 00:00..24:00")]
    OutOfRange {
        /// Requested hour component.
        hour: u32,
        /// Requested minute component.
        minute: u32,
    },

    /// A time string is not `HH:MM`.
    #[error("cannot parse time of day {value:?}: expected HH:MM")]
    Unparseable {
        /// The rejected input.
        value: String,
    },
}
