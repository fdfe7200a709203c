//! Conflict reporting types
//!
//! A detection run produces a [`ConflictReport`]: zero or more
//! [`ConflictEntry`] values in canonical order. Conflicts are data, not
//! errors; the owning application decides whether an entry blocks a save,
//! becomes a warning, or is persisted as an audit row.

use std::fmt;

use chrono::NaiveDate;

use crate::assignment::{AssignmentId, ResourceDimension};

/// How serious one conflict entry is.
///
/// `High` marks a double-booking of the primary dimension and blocks
/// substitution and swap; `Medium` marks a secondary clash callers may
/// accept with a warning. The ordering (`High > Medium`) drives report
/// ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Severity {
    /// Secondary clash; advisory.
    Medium,
    /// Primary-dimension double-booking; blocking.
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Medium => "medium",
            Severity::High => "high",
        })
    }
}

/// What kind of double-booking an entry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ConflictKind {
    /// The same teacher is booked twice on overlapping slots.
    TeacherDoubleBooked,
    /// The same class is booked twice on overlapping slots.
    ClassDoubleBooked,
    /// The same room is booked twice on overlapping slots.
    RoomDoubleBooked,
}

impl ConflictKind {
    /// The resource dimension this kind clashes on.
    pub const fn dimension(self) -> ResourceDimension {
        match self {
            ConflictKind::TeacherDoubleBooked => ResourceDimension::Teacher,
            ConflictKind::ClassDoubleBooked => ResourceDimension::Class,
            ConflictKind::RoomDoubleBooked => ResourceDimension::Room,
        }
    }

    /// The kind reporting a clash on `dimension`.
    pub const fn for_dimension(dimension: ResourceDimension) -> ConflictKind {
        match dimension {
            ResourceDimension::Teacher => ConflictKind::TeacherDoubleBooked,
            ResourceDimension::Class => ConflictKind::ClassDoubleBooked,
            ResourceDimension::Room => ConflictKind::RoomDoubleBooked,
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} double-booked", self.dimension())
    }
}

/// One conflict found between a candidate and an existing assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictEntry {
    /// Which dimension clashed.
    pub kind: ConflictKind,
    /// The existing assignment collided with.
    pub with: AssignmentId,
    /// Classification under the active detection policy.
    pub severity: Severity,
    /// The conflicting assignment's effective start, carried for ordering
    /// and rendering.
    pub valid_from: NaiveDate,
}

impl ConflictEntry {
    /// Creates an entry.
    pub fn new(
        kind: ConflictKind,
        with: impl Into<AssignmentId>,
        severity: Severity,
        valid_from: NaiveDate,
    ) -> Self {
        ConflictEntry {
            kind,
            with: with.into(),
            severity,
            valid_from,
        }
    }
}

impl fmt::Display for ConflictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} with {} (effective {})",
            self.severity, self.kind, self.with, self.valid_from
        )
    }
}

/// Ordered collection of conflicts for one candidate.
///
/// Canonical order is severity descending, then the conflicting
/// assignment's effective start ascending; ties keep first-seen pool
/// order. Sorting happens at construction, so identical detection inputs
/// always produce identical reports.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rosterkit_core::{ConflictEntry, ConflictKind, ConflictReport, Severity};
///
/// let from = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let report = ConflictReport::from_entries(vec![
///     ConflictEntry::new(ConflictKind::RoomDoubleBooked, "W-7", Severity::Medium, from),
///     ConflictEntry::new(ConflictKind::TeacherDoubleBooked, "W-2", Severity::High, from),
/// ]);
///
/// assert!(report.has_high());
/// assert_eq!(report.entries()[0].severity, Severity::High);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictReport {
    entries: Vec<ConflictEntry>,
}

impl ConflictReport {
    /// A report with no conflicts.
    pub const fn empty() -> Self {
        ConflictReport { entries: Vec::new() }
    }

    /// Builds a report in canonical order from detection output.
    pub fn from_entries(mut entries: Vec<ConflictEntry>) -> Self {
        entries.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then(a.valid_from.cmp(&b.valid_from))
        });
        ConflictReport { entries }
    }

    /// The entries in canonical order.
    pub fn entries(&self) -> &[ConflictEntry] {
        &self.entries
    }

    /// Consumes the report, returning its entries.
    pub fn into_entries(self) -> Vec<ConflictEntry> {
        self.entries
    }

    /// Number of conflicts found.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no conflicts were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when any entry is `High` severity.
    pub fn has_high(&self) -> bool {
        self.entries.iter().any(|e| e.severity == Severity::High)
    }

    /// The most severe entry's severity, if any. Canonical order puts it
    /// first.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.entries.first().map(|e| e.severity)
    }

    /// Iterates over the entries in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConflictEntry> {
        self.entries.iter()
    }
}

impl IntoIterator for ConflictReport {
    type Item = ConflictEntry;
    type IntoIter = std::vec::IntoIter<ConflictEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConflictReport {
    type Item = &'a ConflictEntry;
    type IntoIter = std::slice::Iter<'a, ConflictEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("no conflicts");
        }
        write!(f, "{} conflict(s): ", self.entries.len())?;
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
