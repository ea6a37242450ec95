//! Classroom aggregate.
//!
//! # Responsibility
//! - Own the ordered student roster and assignment list for one classroom.
//! - Serialize roster/assignment access through a per-instance lock so
//!   independent classrooms never contend with each other.
//!
//! # Invariants
//! - Roster entries are unique by student id; enrollment is idempotent.
//! - Assignment entries are unique by assignment id; re-adding an existing
//!   id is a silent no-op that keeps the original record.
//! - Both lists preserve first-insertion order.

use crate::model::assignment::Assignment;
use crate::model::student::Student;
use std::sync::{Arc, Mutex, MutexGuard};

struct ClassroomState {
    students: Vec<Arc<Student>>,
    assignments: Vec<Arc<Assignment>>,
}

/// Named aggregate owning enrolled students (by reference) and assignments.
pub struct Classroom {
    name: String,
    inner: Mutex<ClassroomState>,
}

impl Classroom {
    /// Creates an empty classroom.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(ClassroomState {
                students: Vec::new(),
                assignments: Vec::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolls a student, keyed by id.
    ///
    /// # Contract
    /// - Idempotent: re-enrolling an already-present id changes nothing.
    /// - Returns `true` when the student was newly added to the roster.
    pub fn enroll_student(&self, student: Arc<Student>) -> bool {
        let mut state = self.locked();
        if state.students.iter().any(|s| s.id == student.id) {
            return false;
        }
        state.students.push(student);
        true
    }

    /// Returns the roster as an ordered snapshot.
    pub fn students(&self) -> Vec<Arc<Student>> {
        self.locked().students.clone()
    }

    /// Adds an assignment, keyed by id.
    ///
    /// # Contract
    /// - Idempotent: an already-present id is silently skipped and the
    ///   original title/due date are retained.
    /// - Returns `true` when the assignment was newly added.
    pub fn add_assignment(&self, assignment: Assignment) -> bool {
        let mut state = self.locked();
        if state.assignments.iter().any(|a| a.id() == assignment.id()) {
            return false;
        }
        state.assignments.push(Arc::new(assignment));
        true
    }

    /// Returns the assignment list as an ordered snapshot.
    pub fn assignments(&self) -> Vec<Arc<Assignment>> {
        self.locked().assignments.clone()
    }

    /// Looks up one assignment by id.
    pub fn assignment_by_id(&self, id: &str) -> Option<Arc<Assignment>> {
        self.locked()
            .assignments
            .iter()
            .find(|a| a.id() == id)
            .cloned()
    }

    // Roster and assignment lists only ever grow, so a panic in a previous
    // holder cannot leave them half-updated; recover from poison.
    fn locked(&self) -> MutexGuard<'_, ClassroomState> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Classroom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.locked();
        f.debug_struct("Classroom")
            .field("name", &self.name)
            .field("students", &state.students.len())
            .field("assignments", &state.assignments.len())
            .finish()
    }
}
