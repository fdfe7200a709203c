//! In-memory `ScheduleRepository` backing integration tests.

use rosterkit_core::{Assignment, ScheduleRepository, ScopeFilter};

/// Vec-backed repository honoring the repository contract: only active
/// assignments matching the filter come back.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    assignments: Vec<Assignment>,
}

impl InMemoryRepository {
    /// Repository over the given assignments.
    pub fn new(assignments: Vec<Assignment>) -> Self {
        InMemoryRepository { assignments }
    }

    /// Adds an assignment to the pool.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Every stored assignment, active or not.
    pub fn all(&self) -> &[Assignment] {
        &self.assignments
    }
}

impl ScheduleRepository for InMemoryRepository {
    fn fetch_active_assignments(&self, filter: &ScopeFilter) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.is_active() && filter.matches(assignment))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use rosterkit_core::AssignmentStatus;

    use crate::fixtures::full_assignment;

    use super::*;

    #[test]
    fn test_fetch_drops_inactive_and_filtered_assignments() {
        let repository = InMemoryRepository::new(vec![
            full_assignment("W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00"),
            full_assignment("W-2", "T-1", "C-2", "R-2", Weekday::Tue, "08:00", "09:00"),
            full_assignment("W-3", "T-1", "C-3", "R-3", Weekday::Mon, "10:00", "11:00")
                .with_status(AssignmentStatus::Cancelled),
        ]);

        let monday = ScopeFilter::new().with_day(Weekday::Mon);
        let fetched = repository.fetch_active_assignments(&monday);

        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id.as_str(), "W-1");
    }
}
