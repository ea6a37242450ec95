//! Core domain logic for the virtual classroom manager.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{Assignment, AssignmentInfo, Submission};
pub use model::classroom::Classroom;
pub use model::student::Student;
pub use registry::classroom_registry::ClassroomRegistry;
pub use registry::student_directory::StudentDirectory;
pub use service::manager::{
    ClassroomManager, Enrollment, ManagerError, ManagerResult, ScheduleOutcome, SubmissionReceipt,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
