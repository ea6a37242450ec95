//! Classroom manager facade.
//!
//! # Responsibility
//! - Validate raw command payloads and enforce referential invariants.
//! - Coordinate the classroom registry, student directory and aggregate
//!   mutations behind one synchronized boundary.
//!
//! # Invariants
//! - Exactly one manager per process, constructed explicitly by the entry
//!   point and shared by reference.
//! - A failing operation performs no mutation.
//! - The top-level lock is released before any per-aggregate lock is
//!   taken; no two locks are ever held at once.

use crate::model::assignment::{Assignment, AssignmentInfo, Submission};
use crate::model::classroom::Classroom;
use crate::model::student::Student;
use crate::registry::classroom_registry::ClassroomRegistry;
use crate::registry::student_directory::StudentDirectory;
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Typed failure for every manager operation.
///
/// The command router reports these to the user and keeps the loop alive;
/// anything else is an unexpected internal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// Malformed or missing payload fields, including bad dates.
    InvalidArgument(String),
    /// Duplicate creation where uniqueness is required.
    Conflict(String),
    /// Reference to a nonexistent classroom, student or assignment.
    NotFound(String),
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "{message}"),
            Self::Conflict(message) => write!(f, "{message}"),
            Self::NotFound(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ManagerError {}

/// Outcome of `add_student`, echoing what the router needs to confirm.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub student: Arc<Student>,
    pub classroom: String,
    /// `false` when the student was already on the roster (idempotent hit).
    pub newly_enrolled: bool,
}

/// Outcome of `schedule_assignment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// A new assignment was added to the classroom.
    Scheduled(AssignmentInfo),
    /// The id was already present; the original record was retained and
    /// the new title/date were dropped.
    SkippedExisting(AssignmentInfo),
}

impl ScheduleOutcome {
    /// The assignment record now in effect, whichever branch was taken.
    pub fn info(&self) -> &AssignmentInfo {
        match self {
            Self::Scheduled(info) | Self::SkippedExisting(info) => info,
        }
    }
}

/// Outcome of `submit_assignment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub student_id: String,
    pub assignment_id: String,
    pub assignment_title: String,
}

struct ManagerState {
    registry: ClassroomRegistry,
    directory: StudentDirectory,
}

/// The facade enforcing all registry invariants.
///
/// Multi-field payloads are split on `;` with per-field trimming; commands
/// expecting N fields fail with `InvalidArgument` when fewer are present,
/// and extra fields beyond N are ignored.
pub struct ClassroomManager {
    state: Mutex<ManagerState>,
}

impl ClassroomManager {
    /// Creates an empty manager. The process entry point owns the single
    /// instance and passes it by reference to the command router.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ManagerState {
                registry: ClassroomRegistry::new(),
                directory: StudentDirectory::new(),
            }),
        }
    }

    /// Creates a classroom with the given (trimmed) name.
    ///
    /// # Errors
    /// - `InvalidArgument` when the name is empty.
    /// - `Conflict` when the name is already registered.
    pub fn create_classroom(&self, payload: &str) -> ManagerResult<String> {
        let name = payload.trim();
        if name.is_empty() {
            return Err(ManagerError::InvalidArgument(
                "Classroom name cannot be empty.".to_string(),
            ));
        }

        let mut state = self.locked();
        if !state.registry.insert(Arc::new(Classroom::new(name))) {
            return Err(ManagerError::Conflict(format!(
                "Classroom already exists: {name}"
            )));
        }
        info!("event=classroom_created module=manager status=ok name={name}");
        Ok(name.to_string())
    }

    /// Removes a classroom by name.
    ///
    /// Enrolled students persist in the directory; only the classroom and
    /// its assignment list go away.
    ///
    /// # Errors
    /// - `NotFound` when no classroom has that name.
    pub fn remove_classroom(&self, payload: &str) -> ManagerResult<String> {
        let name = payload.trim();
        let mut state = self.locked();
        if state.registry.remove(name).is_none() {
            return Err(ManagerError::NotFound(format!(
                "Classroom not found: {name}"
            )));
        }
        info!("event=classroom_removed module=manager status=ok name={name}");
        Ok(name.to_string())
    }

    /// Classroom names in first-insertion order. Never fails.
    pub fn list_classrooms(&self) -> Vec<String> {
        self.locked().registry.names()
    }

    /// Enrolls a student into a classroom, creating the student record on
    /// first reference.
    ///
    /// Payload: `<id>;<name>;<classroom>`.
    ///
    /// # Contract
    /// - A known student id reuses the stored record; the payload name is
    ///   not applied.
    /// - Re-enrolling into the same classroom is an idempotent no-op.
    ///
    /// # Errors
    /// - `InvalidArgument` on fewer than 3 fields.
    /// - `NotFound` when the classroom does not exist (no student record
    ///   is created in that case).
    pub fn add_student(&self, payload: &str) -> ManagerResult<Enrollment> {
        let [student_id, student_name, classroom_name] = split_payload::<3>(payload)?;

        let (student, classroom) = {
            let mut state = self.locked();
            let classroom = state.registry.get(&classroom_name).ok_or_else(|| {
                ManagerError::NotFound(format!("Classroom does not exist: {classroom_name}"))
            })?;
            let student = state.directory.lookup_or_insert(&student_id, &student_name);
            (student, classroom)
        };

        let newly_enrolled = classroom.enroll_student(Arc::clone(&student));
        info!(
            "event=student_enrolled module=manager status=ok student={} classroom={} new={}",
            student.id, classroom_name, newly_enrolled
        );
        Ok(Enrollment {
            student,
            classroom: classroom_name,
            newly_enrolled,
        })
    }

    /// Ordered roster of a classroom.
    ///
    /// # Errors
    /// - `NotFound` when the classroom does not exist.
    pub fn list_students(&self, payload: &str) -> ManagerResult<Vec<Arc<Student>>> {
        let classroom = self.get_classroom(payload.trim())?;
        Ok(classroom.students())
    }

    /// Schedules an assignment in a classroom.
    ///
    /// Payload: `<classroom>;<assignment_id>;<title>;<due_date:YYYY-MM-DD>`.
    ///
    /// # Contract
    /// - An already-present assignment id is a silent no-op; the original
    ///   title/date stay in effect and are returned in the outcome.
    ///
    /// # Errors
    /// - `InvalidArgument` on fewer than 4 fields or a malformed date.
    /// - `NotFound` when the classroom does not exist.
    pub fn schedule_assignment(&self, payload: &str) -> ManagerResult<ScheduleOutcome> {
        let [classroom_name, assignment_id, title, due_date] = split_payload::<4>(payload)?;

        let classroom = self.get_classroom(&classroom_name)?;
        let due_date: NaiveDate = due_date.parse().map_err(|_| {
            ManagerError::InvalidArgument("Invalid date format. Use YYYY-MM-DD.".to_string())
        })?;

        let assignment = Assignment::new(&assignment_id, &title, due_date);
        let info = assignment.info();
        if classroom.add_assignment(assignment) {
            info!(
                "event=assignment_scheduled module=manager status=ok classroom={} assignment={}",
                classroom_name, assignment_id
            );
            return Ok(ScheduleOutcome::Scheduled(info));
        }

        let retained = classroom
            .assignment_by_id(&assignment_id)
            .map(|a| a.info())
            .unwrap_or(info);
        info!(
            "event=assignment_schedule_skipped module=manager status=ok classroom={} assignment={}",
            classroom_name, assignment_id
        );
        Ok(ScheduleOutcome::SkippedExisting(retained))
    }

    /// Ordered assignment list of a classroom.
    ///
    /// # Errors
    /// - `NotFound` when the classroom does not exist.
    pub fn list_assignments(&self, payload: &str) -> ManagerResult<Vec<AssignmentInfo>> {
        let classroom = self.get_classroom(payload.trim())?;
        Ok(classroom.assignments().iter().map(|a| a.info()).collect())
    }

    /// Records a submission against an existing assignment.
    ///
    /// Payload: `<student_id>;<classroom>;<assignment_id>;<text>`.
    ///
    /// # Errors
    /// - `InvalidArgument` on fewer than 4 fields.
    /// - `NotFound` when the student, classroom or assignment (in that
    ///   order) does not exist; nothing is recorded.
    pub fn submit_assignment(&self, payload: &str) -> ManagerResult<SubmissionReceipt> {
        let [student_id, classroom_name, assignment_id, text] = split_payload::<4>(payload)?;

        let classroom = {
            let state = self.locked();
            if !state.directory.contains(&student_id) {
                return Err(ManagerError::NotFound(format!(
                    "Student not found: {student_id}"
                )));
            }
            state.registry.get(&classroom_name).ok_or_else(|| {
                ManagerError::NotFound(format!("Classroom not found: {classroom_name}"))
            })?
        };

        let assignment = classroom.assignment_by_id(&assignment_id).ok_or_else(|| {
            ManagerError::NotFound(format!("Assignment not found: {assignment_id}"))
        })?;

        assignment.append_submission(Submission::new(&student_id, &assignment_id, &text));
        info!(
            "event=submission_received module=manager status=ok student={} classroom={} assignment={}",
            student_id, classroom_name, assignment_id
        );
        Ok(SubmissionReceipt {
            student_id,
            assignment_id,
            assignment_title: assignment.title().to_string(),
        })
    }

    /// Ordered submissions recorded for one assignment.
    ///
    /// # Errors
    /// - `NotFound` when the classroom or assignment does not exist.
    pub fn list_submissions(
        &self,
        classroom: &str,
        assignment_id: &str,
    ) -> ManagerResult<Vec<Submission>> {
        let classroom = self.get_classroom(classroom.trim())?;
        let assignment = classroom
            .assignment_by_id(assignment_id.trim())
            .ok_or_else(|| {
                ManagerError::NotFound(format!("Assignment not found: {assignment_id}"))
            })?;
        Ok(assignment.submissions())
    }

    fn get_classroom(&self, name: &str) -> ManagerResult<Arc<Classroom>> {
        self.locked()
            .registry
            .get(name)
            .ok_or_else(|| ManagerError::NotFound(format!("Classroom not found: {name}")))
    }

    // Both stores stay internally consistent across any single call, so a
    // poisoned lock is recovered rather than propagated.
    fn locked(&self) -> MutexGuard<'_, ManagerState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ClassroomManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a multi-field payload on `;`, trimming each field.
///
/// Fewer than `N` fields is an `InvalidArgument`; extra fields beyond `N`
/// are ignored.
fn split_payload<const N: usize>(payload: &str) -> ManagerResult<[String; N]> {
    let mut fields = payload.splitn(N + 1, ';').map(|f| f.trim().to_string());
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for slot in out.iter_mut() {
        *slot = fields.next().ok_or_else(|| {
            ManagerError::InvalidArgument(format!(
                "Insufficient arguments. Expected {N} separated by ';'."
            ))
        })?;
    }
    Ok(out)
}
