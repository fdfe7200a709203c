//! Free/busy queries over an assignment pool.
//!
//! Backs substitute and room pickers: given a slot and a validity window,
//! which of these resources are still unclaimed? A resource counts as
//! occupied when any active assignment claims it on an overlapping interval
//! with an intersecting window, on any dimension. Substitution replacements
//! claim their teacher inside the substitution window only.

use rosterkit_core::{Assignment, EffectiveRange, ResourceId, TimeInterval};

/// Whether `resource` is unclaimed for `interval` across `window`.
pub fn is_resource_free(
    resource: &ResourceId,
    interval: &TimeInterval,
    window: &EffectiveRange,
    pool: &[Assignment],
) -> bool {
    !pool.iter().any(|assignment| {
        assignment.status.is_active()
            && assignment.interval.overlaps(interval)
            && claims(assignment, resource, window)
    })
}

/// Filters `candidates` down to the free ones, preserving input order.
pub fn filter_available(
    candidates: &[ResourceId],
    interval: &TimeInterval,
    window: &EffectiveRange,
    pool: &[Assignment],
) -> Vec<ResourceId> {
    candidates
        .iter()
        .filter(|resource| is_resource_free(resource, interval, window, pool))
        .cloned()
        .collect()
}

fn claims(assignment: &Assignment, resource: &ResourceId, window: &EffectiveRange) -> bool {
    let teacher_claim = assignment
        .teacher_claims()
        .iter()
        .any(|(id, claim_window)| *id == resource && claim_window.intersects(window));
    if teacher_claim {
        return true;
    }
    if !assignment.effective.intersects(window) {
        return false;
    }
    let held = |key: &Option<ResourceId>| key.as_ref() == Some(resource);
    held(&assignment.keys.class) || held(&assignment.keys.room)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use rosterkit_core::{AssignmentStatus, Substitution};
    use rosterkit_test::{assignment, date, full_assignment, slot, term};

    use super::*;

    fn ids(raw: &[&str]) -> Vec<ResourceId> {
        raw.iter().map(|s| ResourceId::new(*s)).collect()
    }

    #[test]
    fn test_booked_teacher_is_not_free() {
        let pool = vec![full_assignment(
            "W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00",
        )];
        let monday_morning = slot(Weekday::Mon, "08:30", "09:30");

        assert!(!is_resource_free(
            &ResourceId::new("T-1"),
            &monday_morning,
            &term(),
            &pool
        ));
        assert!(is_resource_free(
            &ResourceId::new("T-2"),
            &monday_morning,
            &term(),
            &pool
        ));
    }

    #[test]
    fn test_rooms_and_classes_are_claimed_too() {
        let pool = vec![full_assignment(
            "W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00",
        )];
        let monday_morning = slot(Weekday::Mon, "08:00", "09:00");

        assert!(!is_resource_free(&ResourceId::new("R-1"), &monday_morning, &term(), &pool));
        assert!(!is_resource_free(&ResourceId::new("C-1"), &monday_morning, &term(), &pool));
    }

    #[test]
    fn test_other_slots_and_windows_leave_the_resource_free() {
        let pool = vec![full_assignment(
            "W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00",
        )];
        let teacher = ResourceId::new("T-1");

        // same day, later slot
        assert!(is_resource_free(
            &teacher,
            &slot(Weekday::Mon, "09:00", "10:00"),
            &term(),
            &pool
        ));
        // overlapping slot, disjoint validity window
        assert!(is_resource_free(
            &teacher,
            &slot(Weekday::Mon, "08:00", "09:00"),
            &EffectiveRange::bounded(date(2025, 9, 1), date(2025, 12, 19)),
            &pool
        ));
    }

    #[test]
    fn test_cancelled_assignments_do_not_claim() {
        let pool = vec![
            full_assignment("W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00")
                .with_status(AssignmentStatus::Cancelled),
        ];
        assert!(is_resource_free(
            &ResourceId::new("T-1"),
            &slot(Weekday::Mon, "08:00", "09:00"),
            &term(),
            &pool
        ));
    }

    #[test]
    fn test_replacement_is_busy_inside_the_substitution_window() {
        let mut covered = assignment("W-1", "T-1", Weekday::Mon, "08:00", "09:00")
            .with_status(AssignmentStatus::Substituted);
        covered.substitution = Some(Substitution::new(
            "T-2",
            date(2025, 2, 3),
            date(2025, 2, 28),
            "sick leave",
        ));
        let pool = vec![covered];
        let monday_morning = slot(Weekday::Mon, "08:00", "09:00");
        let replacement = ResourceId::new("T-2");

        let february = EffectiveRange::bounded(date(2025, 2, 10), date(2025, 2, 14));
        assert!(!is_resource_free(&replacement, &monday_morning, &february, &pool));

        let march = EffectiveRange::bounded(date(2025, 3, 3), date(2025, 3, 7));
        assert!(is_resource_free(&replacement, &monday_morning, &march, &pool));

        // the original teacher stays claimed across the whole range
        assert!(!is_resource_free(
            &ResourceId::new("T-1"),
            &monday_morning,
            &february,
            &pool
        ));
    }

    #[test]
    fn test_filter_available_preserves_candidate_order() {
        let pool = vec![
            full_assignment("W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00"),
            full_assignment("W-2", "T-3", "C-2", "R-2", Weekday::Mon, "08:30", "09:30"),
        ];
        let candidates = ids(&["T-3", "T-2", "T-1", "T-4"]);

        let free = filter_available(
            &candidates,
            &slot(Weekday::Mon, "08:00", "09:00"),
            &term(),
            &pool,
        );
        assert_eq!(free, ids(&["T-2", "T-4"]));
    }
}
