//! Rosterkit - weekly schedule conflict detection and resolution
//!
//! Given a pool of recurring weekly assignments (a teacher, optionally a
//! class and a room, a time slot, a validity window), rosterkit answers
//! whether a new or changed assignment double-books anything, and handles
//! the follow-up moves: substitute teachers, slot swaps, batch admission,
//! free/busy queries, and workload summaries. Storage, identity, and HTTP
//! stay with the embedding application.
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use rosterkit::prelude::*;
//!
//! let term = EffectiveRange::starting(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
//! let existing = Assignment::new(
//!     "W-1",
//!     ResourceKeys::new("T-1").with_class("C-1"),
//!     TimeInterval::from_hm(Weekday::Mon, (8, 0), (9, 0)).unwrap(),
//!     term,
//! );
//! let candidate = Assignment::new(
//!     "W-2",
//!     ResourceKeys::new("T-1").with_class("C-2"),
//!     TimeInterval::from_hm(Weekday::Mon, (8, 30), (9, 30)).unwrap(),
//!     term,
//! );
//!
//! let report = ConflictDetector::default()
//!     .detect(&candidate, &[existing], None)
//!     .unwrap();
//! assert!(report.has_high());
//! ```

// Domain types
pub use rosterkit_core::{
    Assignment, AssignmentId, AssignmentStatus, ConflictEntry, ConflictKind, ConflictReport,
    EffectiveRange, InvalidInterval, ResourceDimension, ResourceId, ResourceKeys,
    ScheduleRepository, ScopeFilter, Severity, Substitution, TimeInterval,
};

// Operations
pub use rosterkit_engine::{
    filter_available, is_resource_free, plan_batch, swap_assignments, teacher_workload,
    BatchError, ConflictDetector, DetectError, DetectionPolicy, SubjectLoad, SubstitutionError,
    SubstitutionManager, SwapError, TeacherWorkload, WorkloadPolicy,
};

// File-based policy configuration
pub use rosterkit_config::{
    ConfigError, DetectionConfig, EngineConfig, PrimaryResource, WorkloadConfig,
};

pub mod prelude {
    pub use super::{
        swap_assignments, Assignment, AssignmentStatus, ConflictDetector, ConflictKind,
        ConflictReport, DetectionPolicy, EffectiveRange, ResourceId, ResourceKeys,
        ScheduleRepository, ScopeFilter, Severity, SubstitutionManager, TimeInterval,
    };
}
