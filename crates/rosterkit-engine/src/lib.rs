//! Rosterkit Scheduling Engine
//!
//! Operations over the `rosterkit-core` types:
//! - Conflict detection (policy-driven severity, repository scoping)
//! - Substitute assignment and removal
//! - Atomic two-assignment swap
//! - Sequential batch planning
//! - Free/busy availability queries
//! - Teacher workload summaries
//!
//! Everything is synchronous and side-effect-free; pools are caller-supplied
//! snapshots and mutated assignments come back as new values.

pub mod availability;
pub mod batch;
pub mod detect;
pub mod error;
pub mod substitute;
pub mod swap;
pub mod workload;

pub use availability::{filter_available, is_resource_free};
pub use batch::plan_batch;
pub use detect::{ConflictDetector, DetectionPolicy};
pub use error::{BatchError, DetectError, SubstitutionError, SwapError};
pub use substitute::SubstitutionManager;
pub use swap::swap_assignments;
pub use workload::{teacher_workload, SubjectLoad, TeacherWorkload, WorkloadPolicy};
