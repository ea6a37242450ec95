//! Insertion-ordered store of students, keyed by id.

use crate::model::student::Student;
use std::sync::Arc;

/// The single global store of student records.
///
/// Students are created on first enrollment reference and never deleted;
/// classrooms hold `Arc` references into this directory, never copies.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    entries: Vec<Arc<Student>>,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing record for `id`, or inserts a new one.
    ///
    /// # Contract
    /// - First-seen wins: when `id` is already known, the stored record is
    ///   returned unchanged and `name` is ignored.
    pub fn lookup_or_insert(&mut self, id: &str, name: &str) -> Arc<Student> {
        if let Some(existing) = self.get(id) {
            return existing;
        }
        let student = Arc::new(Student::new(id, name));
        self.entries.push(Arc::clone(&student));
        student
    }

    pub fn get(&self, id: &str) -> Option<Arc<Student>> {
        self.entries.iter().find(|s| s.id == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
