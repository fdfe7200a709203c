//! Error types for engine operations
//!
//! Conflicts found by detection are data (a `ConflictReport`), not errors.
//! The enums here cover malformed input and the operations that refuse to
//! proceed over a high-severity report; the blocking variants carry the
//! full report so callers can render what collided.

use chrono::NaiveDate;
use thiserror::Error;

use rosterkit_core::{AssignmentId, ConflictReport, EffectiveRange};

/// Rejected conflict-detection input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// The candidate's effective range runs backwards. Malformed intervals
    /// cannot reach detection; an inverted date window can, since
    /// assignments arrive from storage unvalidated.
    #[error("invalid candidate: effective range is inverted ({from} > {until})")]
    InvalidArgument {
        /// Candidate's effective start.
        from: NaiveDate,
        /// Candidate's effective end, before the start.
        until: NaiveDate,
    },
}

/// Failed substitute assignment or removal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    /// `active_from` is after `active_until`.
    #[error("substitution range is inverted ({from} > {until})")]
    InvalidRange {
        /// Requested start of the substitution.
        from: NaiveDate,
        /// Requested end, before the start.
        until: NaiveDate,
    },

    /// The substitution range leaves the parent assignment's effective
    /// range.
    #[error("substitution range {from}..{until} is outside the assignment's effective range {effective}")]
    OutOfBounds {
        /// Requested start of the substitution.
        from: NaiveDate,
        /// Requested end of the substitution.
        until: NaiveDate,
        /// The parent assignment's effective range.
        effective: EffectiveRange,
    },

    /// The replacement is double-booked during the substitution window.
    #[error("substitute is double-booked: {0}")]
    Conflict(ConflictReport),

    /// Removal was requested but no substitution is active.
    #[error("assignment has no active substitution")]
    NotSubstituted,

    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// Failed two-assignment swap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// A new placement would be double-booked. Both sides' reports are
    /// carried, in input order; one may be empty.
    #[error("swap rejected: first: {first}; second: {second}")]
    Conflict {
        /// Report for the first assignment's new placement.
        first: ConflictReport,
        /// Report for the second assignment's new placement.
        second: ConflictReport,
    },

    /// A participant refuses placement changes.
    #[error("assignment {0} is locked")]
    Locked(AssignmentId),

    /// Both sides name the same assignment.
    #[error("cannot swap assignment {0} with itself")]
    SameAssignment(AssignmentId),

    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// Failed batch admission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// Admission stopped at the first blocking candidate; nothing from the
    /// batch should be persisted.
    #[error("candidate {id} (position {index}) is double-booked: {report}")]
    Conflict {
        /// Zero-based position in the batch.
        index: usize,
        /// The rejected candidate's id.
        id: AssignmentId,
        /// What it collided with.
        report: ConflictReport,
    },

    #[error(transparent)]
    Detect(#[from] DetectError),
}
