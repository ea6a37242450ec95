//! Assignment and submission domain model.
//!
//! # Responsibility
//! - Define the assignment record scoped to one classroom.
//! - Own the append-only submission list behind a per-instance lock.
//!
//! # Invariants
//! - `id` is unique within its owning classroom only, never globally.
//! - `title` and `due_date` never change after scheduling.
//! - Submissions are append-only; `submitted_at` is non-decreasing within
//!   one assignment's list.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

/// One student's timestamped response to one assignment.
///
/// Immutable once created. Duplicate submissions by the same student are
/// allowed and kept in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Back-reference to the submitting student.
    pub student_id: String,
    /// Back-reference to the owning assignment.
    pub assignment_id: String,
    /// Free-form submission body.
    pub text: String,
    /// Capture time, assigned when the submission is created.
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Creates a submission timestamped at call time.
    pub fn new(
        student_id: impl Into<String>,
        assignment_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            assignment_id: assignment_id.into(),
            text: text.into(),
            submitted_at: Utc::now(),
        }
    }
}

/// Listing view of an assignment, detached from its submission list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentInfo {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
}

/// A graded task scoped to one classroom.
///
/// Identity and metadata are fixed at scheduling time; only the submission
/// list mutates, and only by append.
#[derive(Debug)]
pub struct Assignment {
    id: String,
    title: String,
    due_date: NaiveDate,
    submissions: Mutex<Vec<Submission>>,
}

impl Assignment {
    /// Creates an assignment with an empty submission list.
    pub fn new(id: impl Into<String>, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the detached listing view of this assignment.
    pub fn info(&self) -> AssignmentInfo {
        AssignmentInfo {
            id: self.id.clone(),
            title: self.title.clone(),
            due_date: self.due_date,
        }
    }

    /// Appends a submission to this assignment's list.
    ///
    /// # Contract
    /// - Never dedups; repeat submissions by one student all stay.
    /// - Caller has already verified classroom and assignment existence.
    pub fn append_submission(&self, submission: Submission) {
        self.locked().push(submission);
    }

    /// Returns an ordered snapshot of all submissions.
    pub fn submissions(&self) -> Vec<Submission> {
        self.locked().clone()
    }

    /// Number of submissions received so far.
    pub fn submission_count(&self) -> usize {
        self.locked().len()
    }

    // The list is append-only, so state stays consistent even when a
    // previous holder panicked mid-call; recover instead of propagating
    // the poison flag.
    fn locked(&self) -> MutexGuard<'_, Vec<Submission>> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
