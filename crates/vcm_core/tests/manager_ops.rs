use vcm_core::{ClassroomManager, ManagerError, ScheduleOutcome};

#[test]
fn create_classroom_rejects_empty_name() {
    let manager = ClassroomManager::new();
    let err = manager.create_classroom("   ").unwrap_err();
    assert!(matches!(err, ManagerError::InvalidArgument(_)));
    assert!(manager.list_classrooms().is_empty());
}

#[test]
fn duplicate_classroom_is_a_conflict_and_count_is_unchanged() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();

    let err = manager.create_classroom("Math").unwrap_err();
    assert!(matches!(err, ManagerError::Conflict(_)));
    assert_eq!(manager.list_classrooms().len(), 1);
}

#[test]
fn classrooms_list_in_insertion_order() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Physics").unwrap();
    manager.create_classroom("Art").unwrap();
    manager.create_classroom("Math").unwrap();

    assert_eq!(manager.list_classrooms(), vec!["Physics", "Art", "Math"]);
}

#[test]
fn remove_classroom_then_not_found() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();

    assert_eq!(manager.remove_classroom("Math").unwrap(), "Math");
    let err = manager.remove_classroom("Math").unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));
}

#[test]
fn add_student_requires_existing_classroom_and_records_nothing_on_failure() {
    let manager = ClassroomManager::new();

    let err = manager.add_student("S1;Alice;Ghost").unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));

    // The failed call must not have created the student record either.
    manager.create_classroom("Math").unwrap();
    manager
        .schedule_assignment("Math;A1;HW1;2024-01-15")
        .unwrap();
    let err = manager.submit_assignment("S1;Math;A1;text").unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));
    assert!(err.to_string().contains("S1"));
}

#[test]
fn add_student_rejects_short_payload() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();

    let err = manager.add_student("S1;Alice").unwrap_err();
    assert!(matches!(err, ManagerError::InvalidArgument(_)));
}

#[test]
fn enrolling_twice_keeps_one_roster_entry() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();

    let first = manager.add_student("S1;Alice;Math").unwrap();
    assert!(first.newly_enrolled);

    let second = manager.add_student("S1;Alice;Math").unwrap();
    assert!(!second.newly_enrolled);

    assert_eq!(manager.list_students("Math").unwrap().len(), 1);
}

#[test]
fn known_student_id_keeps_first_seen_name() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();
    manager.create_classroom("Art").unwrap();

    manager.add_student("S1;Alice;Math").unwrap();
    let reused = manager.add_student("S1;Impostor;Art").unwrap();

    assert_eq!(reused.student.name, "Alice");
    let roster = manager.list_students("Art").unwrap();
    assert_eq!(roster[0].name, "Alice");
}

#[test]
fn students_list_in_enrollment_order() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();
    manager.add_student("S2;Bob;Math").unwrap();
    manager.add_student("S1;Alice;Math").unwrap();

    let roster = manager.list_students("Math").unwrap();
    assert_eq!(roster[0].id, "S2");
    assert_eq!(roster[1].id, "S1");
}

#[test]
fn removing_a_classroom_keeps_students_in_the_directory() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();
    manager.create_classroom("Art").unwrap();
    manager.add_student("S1;Alice;Math").unwrap();
    manager.remove_classroom("Math").unwrap();

    // S1 still resolves for submissions elsewhere.
    manager.schedule_assignment("Art;A1;Collage;2024-05-01").unwrap();
    manager.submit_assignment("S1;Art;A1;glued").unwrap();
    assert_eq!(manager.list_submissions("Art", "A1").unwrap().len(), 1);
}

#[test]
fn schedule_assignment_validates_classroom_date_and_arity() {
    let manager = ClassroomManager::new();

    let err = manager
        .schedule_assignment("Ghost;A1;HW1;2024-01-15")
        .unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));

    manager.create_classroom("Math").unwrap();
    let err = manager
        .schedule_assignment("Math;A1;HW1;15-01-2024")
        .unwrap_err();
    assert!(matches!(err, ManagerError::InvalidArgument(_)));
    assert!(err.to_string().contains("YYYY-MM-DD"));

    let err = manager.schedule_assignment("Math;A1;HW1").unwrap_err();
    assert!(matches!(err, ManagerError::InvalidArgument(_)));

    // None of the failures left an assignment behind.
    assert!(manager.list_assignments("Math").unwrap().is_empty());
}

#[test]
fn rescheduling_an_existing_id_retains_the_original_record() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();

    let first = manager
        .schedule_assignment("Math;A1;HW1;2024-01-15")
        .unwrap();
    assert!(matches!(first, ScheduleOutcome::Scheduled(_)));

    let second = manager
        .schedule_assignment("Math;A1;Replacement;2030-12-31")
        .unwrap();
    match second {
        ScheduleOutcome::SkippedExisting(info) => {
            assert_eq!(info.title, "HW1");
            assert_eq!(info.due_date.to_string(), "2024-01-15");
        }
        other => panic!("expected idempotent skip, got {other:?}"),
    }

    let assignments = manager.list_assignments("Math").unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].title, "HW1");
}

#[test]
fn assignments_list_in_scheduling_order_and_round_trip_unchanged() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();
    manager
        .schedule_assignment("Math;A2;Essay;2024-03-01")
        .unwrap();
    manager
        .schedule_assignment("Math;A1;HW1;2024-01-15")
        .unwrap();

    let assignments = manager.list_assignments("Math").unwrap();
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].id, "A2");
    assert_eq!(assignments[0].title, "Essay");
    assert_eq!(assignments[0].due_date.to_string(), "2024-03-01");
    assert_eq!(assignments[1].id, "A1");
}

#[test]
fn listing_an_unknown_classroom_names_it_in_the_error() {
    let manager = ClassroomManager::new();
    let err = manager.list_assignments("Physics").unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));
    assert!(err.to_string().contains("Physics"));

    let err = manager.list_students("Physics").unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));
}

#[test]
fn submit_assignment_enforces_referential_integrity_in_order() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();
    manager.add_student("S1;Alice;Math").unwrap();
    manager
        .schedule_assignment("Math;A1;HW1;2024-01-15")
        .unwrap();

    let err = manager.submit_assignment("S9;Math;A1;text").unwrap_err();
    assert!(err.to_string().contains("Student not found"));

    let err = manager.submit_assignment("S1;Ghost;A1;text").unwrap_err();
    assert!(err.to_string().contains("Classroom not found"));

    let err = manager.submit_assignment("S1;Math;A9;text").unwrap_err();
    assert!(err.to_string().contains("Assignment not found"));

    // No failed attempt was recorded.
    assert!(manager.list_submissions("Math", "A1").unwrap().is_empty());
}

#[test]
fn math_happy_path_end_to_end() {
    let manager = ClassroomManager::new();

    manager.create_classroom("Math").unwrap();
    let enrollment = manager.add_student("S1;Alice;Math").unwrap();
    assert!(enrollment.newly_enrolled);

    let outcome = manager
        .schedule_assignment("Math;A1;HW1;2024-01-15")
        .unwrap();
    assert!(matches!(outcome, ScheduleOutcome::Scheduled(_)));

    let receipt = manager.submit_assignment("S1;Math;A1;my answer").unwrap();
    assert_eq!(receipt.student_id, "S1");
    assert_eq!(receipt.assignment_title, "HW1");

    let submissions = manager.list_submissions("Math", "A1").unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].student_id, "S1");
    assert_eq!(submissions[0].assignment_id, "A1");
    assert_eq!(submissions[0].text, "my answer");
}

#[test]
fn duplicate_submissions_by_one_student_are_all_kept() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();
    manager.add_student("S1;Alice;Math").unwrap();
    manager
        .schedule_assignment("Math;A1;HW1;2024-01-15")
        .unwrap();

    manager.submit_assignment("S1;Math;A1;draft").unwrap();
    manager.submit_assignment("S1;Math;A1;final").unwrap();

    let submissions = manager.list_submissions("Math", "A1").unwrap();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0].text, "draft");
    assert_eq!(submissions[1].text, "final");
    assert!(submissions[0].submitted_at <= submissions[1].submitted_at);
}

#[test]
fn payload_fields_are_trimmed_and_extras_ignored() {
    let manager = ClassroomManager::new();
    manager.create_classroom("Math").unwrap();

    manager.add_student(" S1 ; Alice ; Math ; ignored ").unwrap();
    let roster = manager.list_students("Math").unwrap();
    assert_eq!(roster[0].id, "S1");
    assert_eq!(roster[0].name, "Alice");
}
