//! Builders shared by the rosterkit test suites.
//!
//! Every assignment builder uses the spring-2025 [`term`] so tests can pick
//! dates like 2025-02-03 (a Monday) without restating the window. Builders
//! panic on malformed input, which is what a fixture should do.

use chrono::{NaiveDate, Weekday};

use rosterkit_core::{Assignment, EffectiveRange, ResourceKeys, TimeInterval};

/// Shorthand for `NaiveDate::from_ymd_opt`.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Spring term 2025: 2025-01-06 (a Monday) through 2025-06-27 (a Friday).
pub fn term() -> EffectiveRange {
    EffectiveRange::bounded(date(2025, 1, 6), date(2025, 6, 27))
}

/// Weekly slot from `"HH:MM"` strings.
pub fn slot(day: Weekday, start: &str, end: &str) -> TimeInterval {
    TimeInterval::parse(day, start, end).expect("valid fixture slot")
}

/// Teacher-only assignment over the spring term.
pub fn assignment(id: &str, teacher: &str, day: Weekday, start: &str, end: &str) -> Assignment {
    Assignment::new(id, ResourceKeys::new(teacher), slot(day, start, end), term())
}

/// Teacher and class assignment over the spring term.
pub fn class_assignment(
    id: &str,
    teacher: &str,
    class: &str,
    day: Weekday,
    start: &str,
    end: &str,
) -> Assignment {
    Assignment::new(
        id,
        ResourceKeys::new(teacher).with_class(class),
        slot(day, start, end),
        term(),
    )
}

/// Assignment with all three clash dimensions over the spring term.
pub fn full_assignment(
    id: &str,
    teacher: &str,
    class: &str,
    room: &str,
    day: Weekday,
    start: &str,
    end: &str,
) -> Assignment {
    Assignment::new(
        id,
        ResourceKeys::new(teacher).with_class(class).with_room(room),
        slot(day, start, end),
        term(),
    )
}
