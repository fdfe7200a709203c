//! Assignment - resource bindings to recurring weekly slots
//!
//! An [`Assignment`] ties a teacher (and optionally a class and a room) to a
//! [`TimeInterval`] for the dates of an [`EffectiveRange`]. Its lifecycle
//! status decides whether it occupies resources; a [`Substitution`] layers a
//! temporary replacement teacher on top without losing the original record.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

use crate::effective::EffectiveRange;
use crate::interval::TimeInterval;

/// Opaque assignment identifier, assigned by the owning store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AssignmentId(String);

impl AssignmentId {
    /// Wraps a store-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        AssignmentId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssignmentId {
    fn from(id: &str) -> Self {
        AssignmentId(id.to_string())
    }
}

impl From<String> for AssignmentId {
    fn from(id: String) -> Self {
        AssignmentId(id)
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque resource identifier: a teacher, class, room, or subject.
///
/// The core never validates that a resource exists; identity comparison is
/// all it needs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wraps an application-owned resource identifier.
    pub fn new(id: impl Into<String>) -> Self {
        ResourceId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The dimensions a double-booking can occur on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ResourceDimension {
    /// The teacher holding the lesson.
    Teacher,
    /// The class receiving it.
    Class,
    /// The room it happens in.
    Room,
}

impl fmt::Display for ResourceDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceDimension::Teacher => "teacher",
            ResourceDimension::Class => "class",
            ResourceDimension::Room => "room",
        })
    }
}

/// Resource key tuple compared dimension-by-dimension during detection.
///
/// The teacher is always present; class and room are optional. A shared
/// non-null id between two assignments whose intervals overlap is a
/// conflict on that dimension, independent of the other dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceKeys {
    /// Teacher holding the slot.
    pub teacher: ResourceId,
    /// Class attending, if tracked.
    pub class: Option<ResourceId>,
    /// Room occupied, if tracked.
    pub room: Option<ResourceId>,
}

impl ResourceKeys {
    /// Keys with only the teacher dimension set.
    pub fn new(teacher: impl Into<ResourceId>) -> Self {
        ResourceKeys {
            teacher: teacher.into(),
            class: None,
            room: None,
        }
    }

    /// Sets the class dimension.
    pub fn with_class(mut self, class: impl Into<ResourceId>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the room dimension.
    pub fn with_room(mut self, room: impl Into<ResourceId>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Returns the id occupying `dimension`, if any.
    pub fn get(&self, dimension: ResourceDimension) -> Option<&ResourceId> {
        match dimension {
            ResourceDimension::Teacher => Some(&self.teacher),
            ResourceDimension::Class => self.class.as_ref(),
            ResourceDimension::Room => self.room.as_ref(),
        }
    }
}

/// Lifecycle state of an assignment.
///
/// Only `Scheduled` and `Substituted` occupy resources and take part in
/// conflict checks. `Cancelled` and `Rescheduled` drop out of the active
/// pool but are kept in storage for history; nothing is hard-deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AssignmentStatus {
    /// In force as created.
    #[default]
    Scheduled,
    /// Soft-terminated; frees its resources.
    Cancelled,
    /// Superseded by a newer assignment; frees its resources.
    Rescheduled,
    /// In force with a temporary replacement teacher layered on top.
    Substituted,
}

impl AssignmentStatus {
    /// True for the statuses that occupy resources.
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, AssignmentStatus::Scheduled | AssignmentStatus::Substituted)
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssignmentStatus::Scheduled => "scheduled",
            AssignmentStatus::Cancelled => "cancelled",
            AssignmentStatus::Rescheduled => "rescheduled",
            AssignmentStatus::Substituted => "substituted",
        })
    }
}

/// Temporary replacement of the teacher for a bounded sub-range of the
/// parent assignment's effective range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Substitution {
    /// Teacher standing in.
    pub replacement: ResourceId,
    /// First date the replacement covers.
    pub active_from: NaiveDate,
    /// Last date the replacement covers.
    pub active_until: NaiveDate,
    /// Caller-supplied reason, kept for reporting.
    pub reason: String,
}

impl Substitution {
    /// Creates a substitution record.
    pub fn new(
        replacement: impl Into<ResourceId>,
        active_from: NaiveDate,
        active_until: NaiveDate,
        reason: impl Into<String>,
    ) -> Self {
        Substitution {
            replacement: replacement.into(),
            active_from,
            active_until,
            reason: reason.into(),
        }
    }

    /// The bounded window the replacement is active for.
    pub fn active_range(&self) -> EffectiveRange {
        EffectiveRange::bounded(self.active_from, self.active_until)
    }

    /// True while `date` falls inside the active window.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.active_range().contains_date(date)
    }
}

/// A scheduled binding of resources to a recurring weekly slot.
///
/// Plain data with public fields: the owning application stores and mutates
/// assignments, the engine only reads them and returns updated values.
/// Invariants that span fields (effective range not inverted, substitution
/// window inside the parent range) are enforced by the operations that rely
/// on them, so records loaded from storage can be represented as-is.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use rosterkit_core::{Assignment, EffectiveRange, ResourceKeys, TimeInterval};
///
/// let slot = TimeInterval::from_hm(Weekday::Mon, (8, 0), (9, 0)).unwrap();
/// let term = EffectiveRange::starting(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
/// let lesson = Assignment::new(
///     "W-1",
///     ResourceKeys::new("T-1").with_class("C-1").with_room("R-1"),
///     slot,
///     term,
/// )
/// .with_subject("MATH");
///
/// assert!(lesson.is_active());
/// assert_eq!(lesson.interval.duration_minutes(), 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Store-assigned identifier.
    pub id: AssignmentId,
    /// Clash dimensions.
    pub keys: ResourceKeys,
    /// Descriptive subject; never a clash dimension.
    pub subject: Option<ResourceId>,
    /// Recurring weekly slot.
    pub interval: TimeInterval,
    /// Dates the slot applies to.
    pub effective: EffectiveRange,
    /// Lifecycle state.
    pub status: AssignmentStatus,
    /// Present only while `status == Substituted`.
    pub substitution: Option<Substitution>,
    /// Locked assignments refuse placement changes (swap).
    pub locked: bool,
}

impl Assignment {
    /// Creates a `Scheduled`, unlocked assignment.
    pub fn new(
        id: impl Into<AssignmentId>,
        keys: ResourceKeys,
        interval: TimeInterval,
        effective: EffectiveRange,
    ) -> Self {
        Assignment {
            id: id.into(),
            keys,
            subject: None,
            interval,
            effective,
            status: AssignmentStatus::Scheduled,
            substitution: None,
            locked: false,
        }
    }

    /// Sets the descriptive subject.
    pub fn with_subject(mut self, subject: impl Into<ResourceId>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    /// True while the assignment occupies its resources.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Active and not locked; placement may change.
    pub fn can_be_modified(&self) -> bool {
        self.is_active() && !self.locked
    }

    /// Locks the assignment against placement changes.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Releases the lock.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// The teacher actually in front of the class on `date`: the
    /// replacement while an active substitution covers the date, the
    /// original teacher otherwise.
    pub fn effective_teacher_on(&self, date: NaiveDate) -> &ResourceId {
        match (&self.status, &self.substitution) {
            (AssignmentStatus::Substituted, Some(sub)) if sub.covers(date) => &sub.replacement,
            _ => &self.keys.teacher,
        }
    }

    /// Teacher-dimension claims: the original teacher over the whole
    /// effective range, plus the replacement over its active window while
    /// substituted. A substitution never frees the original teacher.
    pub fn teacher_claims(&self) -> Vec<(&ResourceId, EffectiveRange)> {
        let mut claims = vec![(&self.keys.teacher, self.effective)];
        if self.status == AssignmentStatus::Substituted {
            if let Some(sub) = &self.substitution {
                claims.push((&sub.replacement, sub.active_range()));
            }
        }
        claims
    }

    /// Tests whether the effective range contains `date`, regardless of
    /// status or weekday.
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.effective.contains_date(date)
    }

    /// Tests whether the recurring slot lands on `date`: active status,
    /// effective range, and matching weekday.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.is_active() && self.is_effective_on(date) && date.weekday() == self.interval.day()
    }

    /// Concrete occurrence dates inside `[from, until]`, intersected with
    /// the effective range. Empty for inactive assignments.
    pub fn occurrences_between(&self, from: NaiveDate, until: NaiveDate) -> Vec<NaiveDate> {
        if !self.is_active() {
            return Vec::new();
        }
        let start = self.effective.from.max(from);
        let end = match self.effective.until {
            Some(own) => own.min(until),
            None => until,
        };
        if start > end {
            return Vec::new();
        }

        let target = i64::from(self.interval.day().num_days_from_monday());
        let offset = (target - i64::from(start.weekday().num_days_from_monday())).rem_euclid(7);
        let mut date = match start.checked_add_signed(Duration::days(offset)) {
            Some(first) => first,
            None => return Vec::new(),
        };

        let mut dates = Vec::new();
        while date <= end {
            dates.push(date);
            match date.checked_add_signed(Duration::days(7)) {
                Some(next) => date = next,
                None => break,
            }
        }
        dates
    }

    /// The blackout dates this assignment would occur on, in calendar
    /// order. Callers supply the blackout calendar; the core does not know
    /// about holidays.
    pub fn blackout_hits(&self, blackouts: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
        blackouts
            .iter()
            .copied()
            .filter(|date| self.occurs_on(*date))
            .collect()
    }
}
