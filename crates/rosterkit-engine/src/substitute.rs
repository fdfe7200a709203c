//! Temporary replacement of the teacher on an existing assignment.
//!
//! A substitution never rewrites history: the original teacher stays on the
//! record and the replacement is layered on top for a bounded sub-range of
//! the assignment's validity window. While substituted, the assignment
//! occupies both teachers for conflict purposes (the replacement inside the
//! window, the original over the whole range).

use chrono::NaiveDate;
use tracing::{info, warn};

use rosterkit_core::{Assignment, AssignmentStatus, EffectiveRange, ResourceId, Substitution};

use crate::detect::ConflictDetector;
use crate::error::SubstitutionError;

/// Validates and applies substitutions on top of a [`ConflictDetector`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SubstitutionManager {
    detector: ConflictDetector,
}

impl SubstitutionManager {
    /// Creates a manager that validates candidates with `detector`.
    pub const fn new(detector: ConflictDetector) -> Self {
        SubstitutionManager { detector }
    }

    /// Covers `assignment` with `replacement` over `[active_from, active_until]`.
    ///
    /// The replacement is validated as if it held the assignment's slot
    /// itself: a synthetic candidate with the replacement as teacher and the
    /// effective range narrowed to the substitution window is checked
    /// against `replacement_pool`, excluding the assignment's own id. Only a
    /// high-severity clash blocks; medium entries are logged and accepted.
    ///
    /// Returns the updated assignment value with `status` set to
    /// [`AssignmentStatus::Substituted`] and the substitution record
    /// populated. The input is left untouched; persisting the result is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// - [`SubstitutionError::InvalidRange`] when the window is inverted.
    /// - [`SubstitutionError::OutOfBounds`] when the window leaves the
    ///   assignment's effective range.
    /// - [`SubstitutionError::Conflict`] when the replacement is already
    ///   booked at high severity; carries the full report.
    pub fn assign_substitute(
        &self,
        assignment: &Assignment,
        replacement: impl Into<ResourceId>,
        active_from: NaiveDate,
        active_until: NaiveDate,
        reason: impl Into<String>,
        replacement_pool: &[Assignment],
    ) -> Result<Assignment, SubstitutionError> {
        if active_from > active_until {
            return Err(SubstitutionError::InvalidRange {
                from: active_from,
                until: active_until,
            });
        }
        if !assignment.effective.contains_span(active_from, active_until) {
            return Err(SubstitutionError::OutOfBounds {
                from: active_from,
                until: active_until,
                effective: assignment.effective,
            });
        }
        let window = EffectiveRange::bounded(active_from, active_until);

        let replacement = replacement.into();
        let candidate = synthetic_candidate(assignment, &replacement, window);
        let report =
            self.detector
                .detect(&candidate, replacement_pool, Some(&assignment.id))?;
        if report.has_high() {
            return Err(SubstitutionError::Conflict(report));
        }
        for entry in &report {
            warn!(
                event = "substitute_tolerated_conflict",
                assignment = %assignment.id,
                replacement = %replacement,
                conflict = %entry,
            );
        }

        let mut updated = assignment.clone();
        updated.status = AssignmentStatus::Substituted;
        updated.substitution = Some(Substitution::new(
            replacement.clone(),
            active_from,
            active_until,
            reason,
        ));
        info!(
            event = "substitute_assigned",
            assignment = %updated.id,
            replacement = %replacement,
            from = %active_from,
            until = %active_until,
        );
        Ok(updated)
    }

    /// Ends the substitution and restores the original teacher.
    ///
    /// No conflict re-check runs: the original combination was valid before
    /// the substitution was layered on.
    ///
    /// # Errors
    ///
    /// [`SubstitutionError::NotSubstituted`] when the assignment carries no
    /// active substitution.
    pub fn remove_substitute(
        &self,
        assignment: &Assignment,
    ) -> Result<Assignment, SubstitutionError> {
        if assignment.status != AssignmentStatus::Substituted
            || assignment.substitution.is_none()
        {
            return Err(SubstitutionError::NotSubstituted);
        }
        let mut updated = assignment.clone();
        updated.status = AssignmentStatus::Scheduled;
        updated.substitution = None;
        info!(event = "substitute_removed", assignment = %updated.id);
        Ok(updated)
    }
}

/// The replacement standing in the assignment's slot, narrowed to the
/// substitution window. Same id, so detection excludes the stored version.
fn synthetic_candidate(
    assignment: &Assignment,
    replacement: &ResourceId,
    window: EffectiveRange,
) -> Assignment {
    let mut candidate = assignment.clone();
    candidate.keys.teacher = replacement.clone();
    candidate.effective = window;
    candidate.status = AssignmentStatus::Scheduled;
    candidate.substitution = None;
    candidate
}
