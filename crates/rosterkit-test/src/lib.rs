//! Shared test fixtures for rosterkit crates.
//!
//! - [`fixtures`] - date, slot, and assignment builders
//! - [`repository`] - in-memory [`rosterkit_core::ScheduleRepository`]
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rosterkit-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use rosterkit_test::{date, full_assignment, term, InMemoryRepository};
//! ```

pub mod fixtures;
pub mod repository;

pub use fixtures::{assignment, class_assignment, date, full_assignment, slot, term};
pub use repository::InMemoryRepository;
