//! EffectiveRange - Date window an assignment is in force for

use std::fmt;

use chrono::NaiveDate;

/// The dates a recurring assignment applies to.
///
/// Both bounds are inclusive; `until = None` means open-ended. The range is
/// deliberately plain data: assignments arrive from storage unvalidated, so
/// an inverted window is representable and is rejected at the detection
/// entry point instead of at construction.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rosterkit_core::EffectiveRange;
///
/// let spring = EffectiveRange::bounded(
///     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
/// );
/// let ongoing = EffectiveRange::starting(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
///
/// assert!(spring.intersects(&ongoing));
/// assert!(ongoing.intersects(&spring));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveRange {
    /// First date the assignment applies to.
    pub from: NaiveDate,
    /// Last date the assignment applies to, or `None` for open-ended.
    pub until: Option<NaiveDate>,
}

impl EffectiveRange {
    /// Creates a range covering `[from, until]`.
    pub const fn bounded(from: NaiveDate, until: NaiveDate) -> Self {
        EffectiveRange {
            from,
            until: Some(until),
        }
    }

    /// Creates an open-ended range starting at `from`.
    pub const fn starting(from: NaiveDate) -> Self {
        EffectiveRange { from, until: None }
    }

    /// True when `from` lies after a set `until`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        matches!(self.until, Some(until) if self.from > until)
    }

    /// Tests whether two ranges share at least one date.
    pub fn intersects(&self, other: &EffectiveRange) -> bool {
        self.until.map_or(true, |until| other.from <= until)
            && other.until.map_or(true, |until| self.from <= until)
    }

    /// Tests whether `date` falls inside the range.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.from <= date && self.until.map_or(true, |until| date <= until)
    }

    /// Tests whether the bounded pair `[from, until]` lies fully inside.
    pub fn contains_span(&self, from: NaiveDate, until: NaiveDate) -> bool {
        self.from <= from && self.until.map_or(true, |own| until <= own)
    }
}

impl fmt::Display for EffectiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.until {
            Some(until) => write!(f, "{}..{}", self.from, until),
            None => write!(f, "{}..", self.from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_intersects_bounded_ranges() {
        let spring = EffectiveRange::bounded(d(2025, 1, 6), d(2025, 6, 27));
        let summer = EffectiveRange::bounded(d(2025, 7, 1), d(2025, 8, 29));
        let may = EffectiveRange::bounded(d(2025, 5, 1), d(2025, 5, 31));

        assert!(spring.intersects(&may));
        assert!(may.intersects(&spring));
        assert!(!spring.intersects(&summer));
    }

    #[test]
    fn test_intersects_is_inclusive_at_the_boundary() {
        let first = EffectiveRange::bounded(d(2025, 1, 6), d(2025, 3, 31));
        let second = EffectiveRange::bounded(d(2025, 3, 31), d(2025, 6, 27));
        assert!(first.intersects(&second));
    }

    #[test]
    fn test_intersects_open_ended() {
        let ongoing = EffectiveRange::starting(d(2025, 1, 6));
        let past = EffectiveRange::bounded(d(2024, 9, 2), d(2024, 12, 20));
        let future = EffectiveRange::starting(d(2030, 1, 1));

        assert!(!ongoing.intersects(&past));
        assert!(ongoing.intersects(&future));
        assert!(future.intersects(&ongoing));
    }

    #[test]
    fn test_contains_date() {
        let spring = EffectiveRange::bounded(d(2025, 1, 6), d(2025, 6, 27));
        assert!(spring.contains_date(d(2025, 1, 6)));
        assert!(spring.contains_date(d(2025, 6, 27)));
        assert!(!spring.contains_date(d(2025, 1, 5)));
        assert!(!spring.contains_date(d(2025, 6, 28)));

        let ongoing = EffectiveRange::starting(d(2025, 1, 6));
        assert!(ongoing.contains_date(d(2030, 1, 1)));
    }

    #[test]
    fn test_contains_span() {
        let spring = EffectiveRange::bounded(d(2025, 1, 6), d(2025, 6, 27));
        assert!(spring.contains_span(d(2025, 2, 1), d(2025, 2, 28)));
        assert!(spring.contains_span(d(2025, 1, 6), d(2025, 6, 27)));
        assert!(!spring.contains_span(d(2025, 1, 1), d(2025, 2, 28)));
        assert!(!spring.contains_span(d(2025, 6, 1), d(2025, 7, 4)));

        let ongoing = EffectiveRange::starting(d(2025, 1, 6));
        assert!(ongoing.contains_span(d(2025, 2, 1), d(2031, 2, 28)));
    }

    #[test]
    fn test_is_inverted() {
        assert!(EffectiveRange::bounded(d(2025, 6, 27), d(2025, 1, 6)).is_inverted());
        assert!(!EffectiveRange::bounded(d(2025, 1, 6), d(2025, 1, 6)).is_inverted());
        assert!(!EffectiveRange::starting(d(2025, 1, 6)).is_inverted());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            EffectiveRange::bounded(d(2025, 1, 6), d(2025, 6, 27)).to_string(),
            "2025-01-06..2025-06-27"
        );
        assert_eq!(EffectiveRange::starting(d(2025, 1, 6)).to_string(), "2025-01-06..");
    }
}
