//! Student domain model.
//!
//! # Responsibility
//! - Define the single canonical student record shared across classrooms.
//!
//! # Invariants
//! - `id` is stable and never reused for another student.
//! - A student record never changes after creation; classrooms hold an
//!   `Arc` reference into the directory, never a copy.

use serde::{Deserialize, Serialize};

/// Canonical student record, keyed by caller-provided id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Stable external identifier, unique across the whole directory.
    pub id: String,
    /// Display name captured at first enrollment.
    pub name: String,
}

impl Student {
    /// Creates a new student record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
