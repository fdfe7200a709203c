//! Weekly workload summary for a single teacher.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::debug;

use rosterkit_config::EngineConfig;
use rosterkit_core::{Assignment, AssignmentStatus, ResourceId};

/// Weekly-minutes threshold a teacher is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkloadPolicy {
    /// Minutes per week counting as full load.
    pub max_weekly_minutes: u32,
}

impl WorkloadPolicy {
    /// The original application's 40-hour week.
    pub const DEFAULT_MAX_WEEKLY_MINUTES: u32 = 2400;

    /// Policy with the given weekly threshold.
    pub const fn new(max_weekly_minutes: u32) -> Self {
        WorkloadPolicy { max_weekly_minutes }
    }
}

impl Default for WorkloadPolicy {
    fn default() -> Self {
        WorkloadPolicy::new(Self::DEFAULT_MAX_WEEKLY_MINUTES)
    }
}

impl From<&EngineConfig> for WorkloadPolicy {
    fn from(config: &EngineConfig) -> Self {
        WorkloadPolicy::new(config.workload.max_weekly_minutes)
    }
}

/// Per-subject share of a teacher's week.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectLoad {
    /// Subject taught; `None` groups assignments without one.
    pub subject: Option<ResourceId>,
    /// Minutes per week across this subject's slots.
    pub minutes_per_week: i64,
    /// Number of weekly slots.
    pub assignment_count: usize,
    /// Distinct classes receiving the subject, sorted.
    pub classes: Vec<ResourceId>,
}

/// A teacher's aggregated week, grouped by subject.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeacherWorkload {
    /// Teacher the summary is for.
    pub teacher: ResourceId,
    /// Minutes per week across all slots.
    pub total_minutes_per_week: i64,
    /// Number of weekly slots.
    pub assignment_count: usize,
    /// Per-subject breakdown; no-subject group first, then subject
    /// ascending.
    pub subjects: Vec<SubjectLoad>,
    /// Share of the policy threshold in use, capped at 100.
    pub utilization_percent: f64,
    /// True when the total exceeds the threshold.
    pub overloaded: bool,
}

/// Aggregates the teacher's own `Scheduled` assignments effective on
/// `as_of` into a [`TeacherWorkload`].
///
/// Substituted-out assignments are excluded: while a replacement covers the
/// slot it does not count toward the original teacher's delivered load.
pub fn teacher_workload(
    teacher: &ResourceId,
    pool: &[Assignment],
    as_of: NaiveDate,
    policy: &WorkloadPolicy,
) -> TeacherWorkload {
    let mut total_minutes = 0i64;
    let mut assignment_count = 0usize;
    let mut groups: BTreeMap<Option<ResourceId>, SubjectLoad> = BTreeMap::new();
    let mut classes: BTreeMap<Option<ResourceId>, BTreeSet<ResourceId>> = BTreeMap::new();

    for assignment in pool {
        if assignment.keys.teacher != *teacher
            || assignment.status != AssignmentStatus::Scheduled
            || !assignment.is_effective_on(as_of)
        {
            continue;
        }

        let minutes = assignment.interval.duration_minutes();
        total_minutes += minutes;
        assignment_count += 1;

        let group = groups
            .entry(assignment.subject.clone())
            .or_insert_with(|| SubjectLoad {
                subject: assignment.subject.clone(),
                minutes_per_week: 0,
                assignment_count: 0,
                classes: Vec::new(),
            });
        group.minutes_per_week += minutes;
        group.assignment_count += 1;
        if let Some(class) = &assignment.keys.class {
            classes
                .entry(assignment.subject.clone())
                .or_default()
                .insert(class.clone());
        }
    }

    let subjects = groups
        .into_iter()
        .map(|(subject, mut load)| {
            if let Some(distinct) = classes.remove(&subject) {
                load.classes = distinct.into_iter().collect();
            }
            load
        })
        .collect::<Vec<_>>();

    let max = i64::from(policy.max_weekly_minutes);
    let utilization_percent = if max > 0 {
        (total_minutes as f64 / max as f64 * 100.0).min(100.0)
    } else {
        0.0
    };
    debug!(
        event = "workload_computed",
        teacher = %teacher,
        total_minutes = total_minutes,
        subjects = subjects.len(),
    );

    TeacherWorkload {
        teacher: teacher.clone(),
        total_minutes_per_week: total_minutes,
        assignment_count,
        subjects,
        utilization_percent,
        overloaded: total_minutes > max,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use rosterkit_core::Substitution;
    use rosterkit_test::{assignment, date, full_assignment};

    use super::*;

    fn pool() -> Vec<Assignment> {
        vec![
            full_assignment("W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00")
                .with_subject("MATH"),
            full_assignment("W-2", "T-1", "C-2", "R-1", Weekday::Tue, "08:00", "09:00")
                .with_subject("MATH"),
            full_assignment("W-3", "T-1", "C-1", "R-2", Weekday::Wed, "10:00", "11:30")
                .with_subject("ENG"),
            // no subject recorded
            assignment("W-4", "T-1", Weekday::Fri, "13:00", "13:45"),
            // someone else's lesson
            full_assignment("W-5", "T-2", "C-1", "R-1", Weekday::Mon, "10:00", "11:00")
                .with_subject("MATH"),
        ]
    }

    #[test]
    fn test_workload_groups_by_subject() {
        let summary = teacher_workload(
            &ResourceId::new("T-1"),
            &pool(),
            date(2025, 3, 10),
            &WorkloadPolicy::default(),
        );

        assert_eq!(summary.total_minutes_per_week, 60 + 60 + 90 + 45);
        assert_eq!(summary.assignment_count, 4);
        assert!(!summary.overloaded);

        // no-subject group first, then subjects ascending
        let subjects: Vec<Option<&str>> = summary
            .subjects
            .iter()
            .map(|s| s.subject.as_ref().map(ResourceId::as_str))
            .collect();
        assert_eq!(subjects, vec![None, Some("ENG"), Some("MATH")]);

        let math = &summary.subjects[2];
        assert_eq!(math.minutes_per_week, 120);
        assert_eq!(math.assignment_count, 2);
        assert_eq!(math.classes, vec![ResourceId::new("C-1"), ResourceId::new("C-2")]);
    }

    #[test]
    fn test_workload_utilization() {
        let summary = teacher_workload(
            &ResourceId::new("T-1"),
            &pool(),
            date(2025, 3, 10),
            &WorkloadPolicy::new(2400),
        );
        // 255 of 2400 minutes
        assert!((summary.utilization_percent - 10.625).abs() < 1e-9);
    }

    #[test]
    fn test_overload_caps_utilization() {
        let summary = teacher_workload(
            &ResourceId::new("T-1"),
            &pool(),
            date(2025, 3, 10),
            &WorkloadPolicy::new(120),
        );
        assert!(summary.overloaded);
        assert_eq!(summary.utilization_percent, 100.0);
    }

    #[test]
    fn test_workload_skips_inactive_and_expired() {
        let mut pool = pool();
        // substituted out: excluded from the original teacher's load
        pool[0].status = AssignmentStatus::Substituted;
        pool[0].substitution = Some(Substitution::new(
            "T-9",
            date(2025, 3, 3),
            date(2025, 3, 14),
            "",
        ));
        pool[1].status = AssignmentStatus::Cancelled;

        let summary = teacher_workload(
            &ResourceId::new("T-1"),
            &pool,
            date(2025, 3, 10),
            &WorkloadPolicy::default(),
        );
        assert_eq!(summary.total_minutes_per_week, 90 + 45);
        assert_eq!(summary.assignment_count, 2);

        // outside every effective range
        let later = teacher_workload(
            &ResourceId::new("T-1"),
            &pool,
            date(2026, 3, 10),
            &WorkloadPolicy::default(),
        );
        assert_eq!(later.total_minutes_per_week, 0);
        assert!(later.subjects.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_workload_json_round_trip() {
        let summary = teacher_workload(
            &ResourceId::new("T-1"),
            &pool(),
            date(2025, 3, 10),
            &WorkloadPolicy::default(),
        );

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_minutes_per_week\":255"));

        let back: TeacherWorkload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
