//! Top-level entity stores.
//!
//! # Responsibility
//! - Provide the process-wide classroom registry and student directory.
//! - Keep both stores as plain data structures; the manager facade is the
//!   single synchronized boundary for structural mutation.
//!
//! # Invariants
//! - Classroom names and student ids are unique within their store.
//! - Iteration order is first-insertion order, never sorted.

pub mod classroom_registry;
pub mod student_directory;
