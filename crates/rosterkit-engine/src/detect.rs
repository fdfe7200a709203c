//! ConflictDetector - pure double-booking detection over assignment pools
//!
//! The detector answers one question: would this candidate assignment
//! collide with the existing pool, and on which dimensions? It mutates
//! nothing and decides no policy beyond severity classification; callers
//! choose what a report means for persistence.

use tracing::{debug, trace};

use rosterkit_config::EngineConfig;
use rosterkit_core::{
    Assignment, AssignmentId, ConflictEntry, ConflictKind, ConflictReport, ResourceDimension,
    ResourceId, ScheduleRepository, ScopeFilter, Severity,
};

use crate::error::DetectError;

/// Selects the dimension whose double-booking is blocking.
///
/// One rule table covers every context: a clash on the primary dimension
/// classifies as [`Severity::High`], any other dimension as
/// [`Severity::Medium`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectionPolicy {
    primary: ResourceDimension,
}

impl DetectionPolicy {
    /// Teaching-schedule context: the teacher is primary.
    pub const fn teaching() -> Self {
        DetectionPolicy {
            primary: ResourceDimension::Teacher,
        }
    }

    /// Academic-schedule context: the class is primary.
    pub const fn academic() -> Self {
        DetectionPolicy {
            primary: ResourceDimension::Class,
        }
    }

    /// Any dimension as primary.
    pub const fn with_primary(primary: ResourceDimension) -> Self {
        DetectionPolicy { primary }
    }

    /// The primary dimension.
    pub const fn primary(&self) -> ResourceDimension {
        self.primary
    }

    /// Classifies a clash on `dimension`.
    pub fn severity_of(&self, dimension: ResourceDimension) -> Severity {
        if dimension == self.primary {
            Severity::High
        } else {
            Severity::Medium
        }
    }
}

impl Default for DetectionPolicy {
    fn default() -> Self {
        DetectionPolicy::teaching()
    }
}

impl From<&EngineConfig> for DetectionPolicy {
    fn from(config: &EngineConfig) -> Self {
        DetectionPolicy::with_primary(config.detection.primary_resource.into())
    }
}

/// Stateless conflict detection over caller-supplied pools.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use rosterkit_core::{Assignment, ConflictKind, EffectiveRange, ResourceKeys, TimeInterval};
/// use rosterkit_engine::{ConflictDetector, DetectionPolicy};
///
/// let term = EffectiveRange::starting(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
/// let existing = Assignment::new(
///     "W-1",
///     ResourceKeys::new("T-1").with_class("C-1"),
///     TimeInterval::from_hm(Weekday::Mon, (8, 0), (9, 0)).unwrap(),
///     term,
/// );
/// let candidate = Assignment::new(
///     "W-2",
///     ResourceKeys::new("T-1").with_class("C-2"),
///     TimeInterval::from_hm(Weekday::Mon, (8, 30), (9, 30)).unwrap(),
///     term,
/// );
///
/// let detector = ConflictDetector::new(DetectionPolicy::teaching());
/// let report = detector.detect(&candidate, &[existing], None).unwrap();
/// assert_eq!(report.entries()[0].kind, ConflictKind::TeacherDoubleBooked);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConflictDetector {
    policy: DetectionPolicy,
}

impl ConflictDetector {
    /// Creates a detector with the given policy.
    pub const fn new(policy: DetectionPolicy) -> Self {
        ConflictDetector { policy }
    }

    /// The active policy.
    pub const fn policy(&self) -> DetectionPolicy {
        self.policy
    }

    /// Checks `candidate` against `pool`.
    ///
    /// Pool entries are skipped when inactive, when their id equals
    /// `exclude` (used on update so a record does not collide with its own
    /// stored version), or when their effective range does not intersect
    /// the candidate's. Every surviving entry is compared
    /// dimension-by-dimension; each shared resource id on an overlapping
    /// interval yields one report entry.
    ///
    /// Pure and deterministic: identical inputs produce identical,
    /// identically-ordered reports.
    ///
    /// # Errors
    ///
    /// [`DetectError::InvalidArgument`] when the candidate's effective
    /// range is inverted.
    pub fn detect(
        &self,
        candidate: &Assignment,
        pool: &[Assignment],
        exclude: Option<&AssignmentId>,
    ) -> Result<ConflictReport, DetectError> {
        self.detect_filtered(candidate, pool.iter(), exclude)
    }

    /// Fetches the candidate's scope through `repository` and delegates to
    /// [`detect`](Self::detect).
    pub fn detect_against<R>(
        &self,
        repository: &R,
        candidate: &Assignment,
        exclude: Option<&AssignmentId>,
    ) -> Result<ConflictReport, DetectError>
    where
        R: ScheduleRepository + ?Sized,
    {
        ensure_window(candidate)?;
        let filter = ScopeFilter::for_candidate(candidate);
        let pool = repository.fetch_active_assignments(&filter);
        trace!(
            event = "scope_fetched",
            candidate = %candidate.id,
            pool = pool.len(),
        );
        self.detect(candidate, &pool, exclude)
    }

    /// `detect` over any assignment iterator; shared by swap and batch,
    /// which pre-filter the pool instead of allocating a trimmed copy.
    pub(crate) fn detect_filtered<'a, I>(
        &self,
        candidate: &Assignment,
        pool: I,
        exclude: Option<&AssignmentId>,
    ) -> Result<ConflictReport, DetectError>
    where
        I: Iterator<Item = &'a Assignment>,
    {
        ensure_window(candidate)?;

        let mut entries = Vec::new();
        let mut scanned = 0usize;
        for existing in pool {
            scanned += 1;
            if !existing.status.is_active() {
                continue;
            }
            if exclude.is_some_and(|id| existing.id == *id) {
                continue;
            }
            if !existing.effective.intersects(&candidate.effective) {
                continue;
            }
            entries.extend(self.conflicts_between(candidate, existing));
        }

        let report = ConflictReport::from_entries(entries);
        debug!(
            event = "detect_end",
            candidate = %candidate.id,
            scanned = scanned,
            conflicts = report.len(),
        );
        Ok(report)
    }

    /// Dimension-by-dimension comparison of two assignments, the primitive
    /// behind [`detect`](Self::detect) and the swap mutual check.
    ///
    /// Entries come back unordered; callers fold them into a
    /// [`ConflictReport`] for canonical ordering. The teacher dimension
    /// compares claims, so a substituted assignment occupies both its
    /// original teacher and the replacement, each over its own window.
    pub fn conflicts_between(
        &self,
        candidate: &Assignment,
        existing: &Assignment,
    ) -> Vec<ConflictEntry> {
        if !candidate.effective.intersects(&existing.effective)
            || !candidate.interval.overlaps(&existing.interval)
        {
            return Vec::new();
        }

        let mut entries = Vec::new();
        if teacher_claims_collide(candidate, existing) {
            entries.push(self.entry(ResourceDimension::Teacher, existing));
        }
        if shared(&candidate.keys.class, &existing.keys.class) {
            entries.push(self.entry(ResourceDimension::Class, existing));
        }
        if shared(&candidate.keys.room, &existing.keys.room) {
            entries.push(self.entry(ResourceDimension::Room, existing));
        }
        entries
    }

    fn entry(&self, dimension: ResourceDimension, existing: &Assignment) -> ConflictEntry {
        ConflictEntry::new(
            ConflictKind::for_dimension(dimension),
            existing.id.clone(),
            self.policy.severity_of(dimension),
            existing.effective.from,
        )
    }
}

fn ensure_window(candidate: &Assignment) -> Result<(), DetectError> {
    match candidate.effective.until {
        Some(until) if candidate.effective.from > until => Err(DetectError::InvalidArgument {
            from: candidate.effective.from,
            until,
        }),
        _ => Ok(()),
    }
}

fn teacher_claims_collide(candidate: &Assignment, existing: &Assignment) -> bool {
    let theirs = existing.teacher_claims();
    candidate.teacher_claims().iter().any(|(id, window)| {
        theirs
            .iter()
            .any(|(other_id, other_window)| id == other_id && window.intersects(other_window))
    })
}

fn shared(a: &Option<ResourceId>, b: &Option<ResourceId>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}
