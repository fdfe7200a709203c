//! ScheduleRepository - the seam to the owning application's storage

use chrono::Weekday;

use crate::assignment::{Assignment, ResourceId};
use crate::effective::EffectiveRange;

/// Narrows which assignments a repository returns.
///
/// All set criteria must hold; an unset criterion matches everything, so
/// the default filter matches every active assignment. Resource matching is
/// any-of across the listed ids and considers substitution replacements as
/// well as the original keys, since a replacement occupies its window like
/// an original booking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScopeFilter {
    /// Only assignments recurring on this day.
    pub day: Option<Weekday>,
    /// Only assignments referencing at least one of these ids.
    pub resources: Vec<ResourceId>,
    /// Only assignments whose effective range intersects this window.
    pub window: Option<EffectiveRange>,
}

impl ScopeFilter {
    /// A filter with no criteria.
    pub fn new() -> Self {
        ScopeFilter::default()
    }

    /// Restricts to one day of the week.
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    /// Adds a resource id to match.
    pub fn with_resource(mut self, resource: impl Into<ResourceId>) -> Self {
        self.resources.push(resource.into());
        self
    }

    /// Restricts to ranges intersecting `window`.
    pub fn with_window(mut self, window: EffectiveRange) -> Self {
        self.window = Some(window);
        self
    }

    /// The scope a candidate should be checked inside: its day, every
    /// resource id it references (including a substitution replacement),
    /// and its effective range.
    pub fn for_candidate(candidate: &Assignment) -> Self {
        let mut filter = ScopeFilter::new()
            .with_day(candidate.interval.day())
            .with_window(candidate.effective)
            .with_resource(candidate.keys.teacher.clone());
        if let Some(class) = &candidate.keys.class {
            filter.resources.push(class.clone());
        }
        if let Some(room) = &candidate.keys.room {
            filter.resources.push(room.clone());
        }
        if let Some(sub) = &candidate.substitution {
            filter.resources.push(sub.replacement.clone());
        }
        filter
    }

    /// Tests an assignment against the criteria. Status is not part of the
    /// filter; repositories exclude inactive assignments themselves.
    pub fn matches(&self, assignment: &Assignment) -> bool {
        if let Some(day) = self.day {
            if assignment.interval.day() != day {
                return false;
            }
        }
        if let Some(window) = &self.window {
            if !window.intersects(&assignment.effective) {
                return false;
            }
        }
        self.resources.is_empty() || self.references_any(assignment)
    }

    fn references_any(&self, assignment: &Assignment) -> bool {
        self.resources.iter().any(|resource| {
            assignment.keys.teacher == *resource
                || assignment.keys.class.as_ref() == Some(resource)
                || assignment.keys.room.as_ref() == Some(resource)
                || assignment
                    .substitution
                    .as_ref()
                    .map_or(false, |sub| sub.replacement == *resource)
        })
    }
}

/// Supplies pools of existing assignments; implemented by the owning
/// application over its storage. The engine never queries storage itself.
///
/// Implementations return only active assignments (`Scheduled` or
/// `Substituted`) matching the filter. Detection re-checks status, so an
/// over-inclusive implementation degrades performance, not correctness;
/// an under-inclusive one loses conflicts.
pub trait ScheduleRepository {
    /// Fetches the active assignments matching `filter`.
    fn fetch_active_assignments(&self, filter: &ScopeFilter) -> Vec<Assignment>;
}
