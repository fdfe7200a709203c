//! Rosterkit Core - domain types for weekly schedule conflict detection
//!
//! This crate provides the data model shared by the rosterkit crates:
//! - [`TimeInterval`] recurring weekly slots with overlap testing
//! - [`EffectiveRange`] date validity windows
//! - [`Assignment`] resource bindings with lifecycle status, substitution,
//!   and an occurrence calendar
//! - Conflict report types ([`ConflictReport`], [`ConflictEntry`])
//! - The [`ScheduleRepository`] seam to the owning application's storage
//!
//! Everything here is plain synchronous data; the operations that act on it
//! live in `rosterkit-engine`. With the `serde` feature enabled all public
//! types serialize, so callers can render reports and assignments directly.

pub mod assignment;
pub mod effective;
pub mod error;
pub mod interval;
pub mod report;
pub mod repository;

pub use assignment::{
    Assignment, AssignmentId, AssignmentStatus, ResourceDimension, ResourceId, ResourceKeys,
    Substitution,
};
pub use effective::EffectiveRange;
pub use error::InvalidInterval;
pub use interval::TimeInterval;
pub use report::{ConflictEntry, ConflictKind, ConflictReport, Severity};
pub use repository::{ScheduleRepository, ScopeFilter};
