//! Atomic exchange of two assignments' placements.
//!
//! Placement is the slot-bound part of an assignment: interval, class and
//! room. Teacher and subject stay with their records, so a swap moves two
//! teachers into each other's slots without rewiring who teaches what.

use tracing::{info, warn};

use rosterkit_core::{Assignment, ConflictReport};

use crate::detect::ConflictDetector;
use crate::error::SwapError;

/// Exchanges the placements of `a` and `b`, re-validating both sides.
///
/// Each swapped value is checked against `pool` with both participants
/// excluded, then the two are cross-checked against each other (normally
/// empty since they occupy each other's previously disjoint slots, but it
/// closes the degenerate identical-placement case). A high-severity entry
/// on either side rejects the whole exchange; partial swaps are never
/// produced. Inputs are borrowed and new values returned, so a failed swap
/// observably mutates nothing.
///
/// # Errors
///
/// - [`SwapError::SameAssignment`] when both arguments carry one id.
/// - [`SwapError::Locked`] when a participant is locked.
/// - [`SwapError::Conflict`] with both reports when either side would be
///   double-booked at high severity.
pub fn swap_assignments(
    a: &Assignment,
    b: &Assignment,
    pool: &[Assignment],
    detector: &ConflictDetector,
) -> Result<(Assignment, Assignment), SwapError> {
    if a.id == b.id {
        return Err(SwapError::SameAssignment(a.id.clone()));
    }
    if a.locked {
        return Err(SwapError::Locked(a.id.clone()));
    }
    if b.locked {
        return Err(SwapError::Locked(b.id.clone()));
    }

    let a_next = with_placement(a, b);
    let b_next = with_placement(b, a);
    let remaining = || pool.iter().filter(|x| x.id != a.id && x.id != b.id);

    let mut first_entries = detector
        .detect_filtered(&a_next, remaining(), None)?
        .into_entries();
    first_entries.extend(detector.conflicts_between(&a_next, &b_next));
    let first = ConflictReport::from_entries(first_entries);

    let mut second_entries = detector
        .detect_filtered(&b_next, remaining(), None)?
        .into_entries();
    second_entries.extend(detector.conflicts_between(&b_next, &a_next));
    let second = ConflictReport::from_entries(second_entries);

    if first.has_high() || second.has_high() {
        warn!(
            event = "swap_rejected",
            first = %a.id,
            second = %b.id,
            first_conflicts = first.len(),
            second_conflicts = second.len(),
        );
        return Err(SwapError::Conflict { first, second });
    }

    info!(event = "swap_applied", first = %a_next.id, second = %b_next.id);
    Ok((a_next, b_next))
}

fn with_placement(keep: &Assignment, donor: &Assignment) -> Assignment {
    let mut next = keep.clone();
    next.interval = donor.interval;
    next.keys.class = donor.keys.class.clone();
    next.keys.room = donor.keys.room.clone();
    next
}
