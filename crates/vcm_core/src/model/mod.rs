//! Domain model for the virtual classroom registry.
//!
//! # Responsibility
//! - Define canonical records for students, classrooms, assignments and
//!   submissions.
//! - Keep aggregate-local locking inside the aggregates themselves.
//!
//! # Invariants
//! - `Student` records are immutable after creation and shared by `Arc`;
//!   the student directory is the single owner.
//! - Assignment submission lists are append-only; no entry is ever removed.

pub mod assignment;
pub mod classroom;
pub mod student;
