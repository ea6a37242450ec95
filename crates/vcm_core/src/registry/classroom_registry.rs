//! Insertion-ordered store of classrooms, keyed by name.

use crate::model::classroom::Classroom;
use std::sync::Arc;

/// The single store of classroom records for one manager instance.
///
/// Not internally synchronized; callers go through the manager facade.
#[derive(Debug, Default)]
pub struct ClassroomRegistry {
    entries: Vec<Arc<Classroom>>,
}

impl ClassroomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a classroom if its name is not already taken.
    ///
    /// Returns `false` and leaves the registry unchanged on a name clash.
    pub fn insert(&mut self, classroom: Arc<Classroom>) -> bool {
        if self.contains(classroom.name()) {
            return false;
        }
        self.entries.push(classroom);
        true
    }

    /// Removes a classroom by name, returning it when present.
    pub fn remove(&mut self, name: &str) -> Option<Arc<Classroom>> {
        let index = self.entries.iter().position(|c| c.name() == name)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<Arc<Classroom>> {
        self.entries.iter().find(|c| c.name() == name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|c| c.name() == name)
    }

    /// Classroom names in first-insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
