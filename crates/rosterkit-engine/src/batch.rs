//! Sequential admission of a batch of candidate assignments.

use tracing::{info, warn};

use rosterkit_core::{Assignment, ConflictReport};

use crate::detect::ConflictDetector;
use crate::error::BatchError;

/// Checks `candidates` in order against `pool` plus every candidate already
/// admitted, so two candidates clashing with each other are caught even when
/// neither clashes with the pool.
///
/// All-or-nothing: the first candidate with a high-severity entry aborts the
/// whole batch. On success the per-candidate reports come back in input
/// order; any entries they carry are medium warnings the caller may surface.
///
/// # Errors
///
/// [`BatchError::Conflict`] with the offending candidate's position, id,
/// and report.
pub fn plan_batch(
    candidates: &[Assignment],
    pool: &[Assignment],
    detector: &ConflictDetector,
) -> Result<Vec<ConflictReport>, BatchError> {
    let mut admitted: Vec<&Assignment> = Vec::with_capacity(candidates.len());
    let mut reports = Vec::with_capacity(candidates.len());

    for (index, candidate) in candidates.iter().enumerate() {
        let report = detector.detect_filtered(
            candidate,
            pool.iter().chain(admitted.iter().copied()),
            None,
        )?;
        if report.has_high() {
            warn!(
                event = "batch_rejected",
                index = index,
                candidate = %candidate.id,
                conflicts = report.len(),
            );
            return Err(BatchError::Conflict {
                index,
                id: candidate.id.clone(),
                report,
            });
        }
        admitted.push(candidate);
        reports.push(report);
    }

    info!(event = "batch_planned", admitted = reports.len());
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use rosterkit_test::full_assignment;

    use super::*;

    #[test]
    fn test_disjoint_batch_is_admitted_with_empty_reports() {
        let candidates = vec![
            full_assignment("N-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00"),
            full_assignment("N-2", "T-2", "C-2", "R-2", Weekday::Mon, "08:00", "09:00"),
            full_assignment("N-3", "T-1", "C-1", "R-1", Weekday::Tue, "08:00", "09:00"),
        ];

        let reports = plan_batch(&candidates, &[], &ConflictDetector::default()).unwrap();
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(ConflictReport::is_empty));
    }

    #[test]
    fn test_candidates_are_checked_against_each_other() {
        // neither candidate clashes with the pool, only with one another
        let candidates = vec![
            full_assignment("N-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00"),
            full_assignment("N-2", "T-1", "C-2", "R-2", Weekday::Mon, "08:30", "09:30"),
        ];

        let err = plan_batch(&candidates, &[], &ConflictDetector::default()).unwrap_err();
        match err {
            BatchError::Conflict { index, id, report } => {
                assert_eq!(index, 1);
                assert_eq!(id.as_str(), "N-2");
                assert_eq!(report.entries()[0].with.as_str(), "N-1");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_pool_clash_aborts_at_the_offending_position() {
        let pool = vec![full_assignment(
            "W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00",
        )];
        let candidates = vec![
            full_assignment("N-1", "T-2", "C-2", "R-2", Weekday::Tue, "08:00", "09:00"),
            full_assignment("N-2", "T-1", "C-3", "R-3", Weekday::Mon, "08:00", "09:00"),
        ];

        let err = plan_batch(&candidates, &pool, &ConflictDetector::default()).unwrap_err();
        assert!(matches!(err, BatchError::Conflict { index: 1, .. }));
    }

    #[test]
    fn test_medium_conflicts_pass_through_in_the_reports() {
        let pool = vec![full_assignment(
            "W-1", "T-1", "C-1", "R-1", Weekday::Mon, "08:00", "09:00",
        )];
        let candidates = vec![full_assignment(
            "N-1", "T-2", "C-2", "R-1", Weekday::Mon, "08:00", "09:00",
        )];

        let reports = plan_batch(&candidates, &pool, &ConflictDetector::default()).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].len(), 1);
        assert!(!reports[0].has_high());
    }
}
