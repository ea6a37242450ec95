//! Line-oriented console for the virtual classroom manager.
//!
//! # Responsibility
//! - Own the process entry point and the single `ClassroomManager`.
//! - Tokenize input lines into command word + raw payload and forward to
//!   manager operations 1:1.
//! - Report typed manager errors without terminating the loop.

use log::{info, warn};
use std::io::{self, BufRead, Write};
use vcm_core::{ClassroomManager, ManagerError, ScheduleOutcome};

/// Loop control returned by the dispatcher.
enum Flow {
    Continue,
    Exit,
}

fn main() {
    init_logging_best_effort();
    info!("event=app_start module=cli status=ok");

    // One manager per process, owned here and passed down by reference.
    let manager = ClassroomManager::new();
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout);
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            // stdin closed; same shutdown path as `exit`.
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            prompt(&mut stdout);
            continue;
        }

        let (command, payload) = match line.split_once(char::is_whitespace) {
            Some((command, payload)) => (command, payload.trim()),
            None => (line, ""),
        };

        match dispatch(&manager, &command.to_lowercase(), payload) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                warn!("event=command_failed module=cli status=error detail={err}");
                println!("Error: {err}");
            }
        }

        prompt(&mut stdout);
    }

    info!("event=app_exit module=cli status=ok");
}

fn dispatch(manager: &ClassroomManager, command: &str, payload: &str) -> Result<Flow, ManagerError> {
    match command {
        "help" => print_help(),
        "help_commands" => print_commands(),
        "exit" => {
            println!("Bye.");
            return Ok(Flow::Exit);
        }
        "add_classroom" => {
            let name = manager.create_classroom(payload)?;
            println!("Classroom '{name}' created.");
        }
        "remove_classroom" => {
            let name = manager.remove_classroom(payload)?;
            println!("Classroom '{name}' removed.");
        }
        "list_classrooms" => {
            let names = manager.list_classrooms();
            if names.is_empty() {
                println!("No classrooms available.");
            } else {
                println!("Classrooms:");
                for name in names {
                    println!(" - {name}");
                }
            }
        }
        "add_student" => {
            let enrollment = manager.add_student(payload)?;
            println!(
                "Student '{}' ({}) enrolled in '{}'.",
                enrollment.student.name, enrollment.student.id, enrollment.classroom
            );
        }
        "list_students" => {
            let classroom = payload.trim();
            let students = manager.list_students(classroom)?;
            if students.is_empty() {
                println!("No students enrolled in '{classroom}'.");
            } else {
                println!("Students in '{classroom}':");
                for student in students {
                    println!(" - {}: {}", student.id, student.name);
                }
            }
        }
        "schedule_assignment" => match manager.schedule_assignment(payload)? {
            ScheduleOutcome::Scheduled(info) => {
                println!(
                    "Assignment '{}' ({}) scheduled, due {}.",
                    info.title, info.id, info.due_date
                );
            }
            ScheduleOutcome::SkippedExisting(info) => {
                println!(
                    "Assignment '{}' already scheduled; kept '{}' due {}.",
                    info.id, info.title, info.due_date
                );
            }
        },
        "list_assignments" => {
            let classroom = payload.trim();
            let assignments = manager.list_assignments(classroom)?;
            if assignments.is_empty() {
                println!("No assignments for '{classroom}'.");
            } else {
                println!("Assignments for '{classroom}':");
                for info in assignments {
                    println!(" - {}: {} (Due: {})", info.id, info.title, info.due_date);
                }
            }
        }
        "submit_assignment" => {
            let receipt = manager.submit_assignment(payload)?;
            println!(
                "Submission received for assignment '{}' from student {}.",
                receipt.assignment_title, receipt.student_id
            );
        }
        _ => println!("Unknown command. Type 'help' or 'help_commands'."),
    }
    Ok(Flow::Continue)
}

fn prompt(stdout: &mut io::Stdout) {
    print!("vcm> ");
    let _ = stdout.flush();
}

fn print_help() {
    println!(
        "Virtual Classroom Manager {} - Console",
        vcm_core::core_version()
    );
    println!("Type 'help_commands' to see available commands. Type 'exit' to quit.");
}

fn print_commands() {
    println!("Commands:");
    println!("add_classroom <classroom_name>");
    println!("remove_classroom <classroom_name>");
    println!("list_classrooms");
    println!("add_student <student_id>;<student_name>;<classroom_name>");
    println!("list_students <classroom_name>");
    println!("schedule_assignment <classroom_name>;<assignment_id>;<title>;<due_date YYYY-MM-DD>");
    println!("list_assignments <classroom_name>");
    println!("submit_assignment <student_id>;<classroom_name>;<assignment_id>;<submission_text>");
}

fn init_logging_best_effort() {
    let log_dir = match std::env::current_dir() {
        Ok(dir) => dir.join("logs"),
        Err(_) => std::env::temp_dir().join("vcm-logs"),
    };
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("warning: log directory path is not valid UTF-8; file logging disabled");
        return;
    };
    if let Err(err) = vcm_core::init_logging(vcm_core::default_log_level(), log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
}
