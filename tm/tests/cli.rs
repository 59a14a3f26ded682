//! End-to-end tests driving the compiled binary through its prompt loop
//!
//! Each test runs `tm` in a fresh temp directory (so the backing files are
//! auto-created there) and feeds the whole interactive session on stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tm(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tm").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn seeded_admin_logs_in_and_exits() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nadm1n\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("you are logged in successfully"))
        .stdout(predicate::str::contains("Goodbye"));

    // Both backing files were auto-created.
    assert_eq!(
        std::fs::read_to_string(dir.path().join("user.txt")).unwrap(),
        "admin, adm1n"
    );
    assert_eq!(std::fs::read_to_string(dir.path().join("tasks.txt")).unwrap(), "");
}

#[test]
fn wrong_credentials_reprompt_until_correct() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nwrong\nadmin\nadm1n\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect login details, please try again"))
        .stdout(predicate::str::contains("you are logged in successfully"));
}

#[test]
fn statistics_after_seeding_counts_one_user_zero_tasks() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nadm1n\nds\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total number of users: 1"))
        .stdout(predicate::str::contains("Total number of tasks: 0"));
}

#[test]
fn unknown_option_redisplays_menu() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nadm1n\nzz\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."));
}

#[test]
fn register_then_full_user_scenario() {
    let dir = TempDir::new().unwrap();

    // Session 1: admin registers bob.
    tm(&dir)
        .write_stdin("admin\nadm1n\nr\nbob\npw1\npw1\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("registered successfully"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("user.txt")).unwrap(),
        "admin, adm1n\nbob, pw1"
    );

    // Session 2: bob logs in, assigns himself a task, views his tasks.
    // The standard menu must not offer registration or statistics.
    tm(&dir)
        .write_stdin("bob\npw1\na\nbob\nReport\nWrite it\n15 Dec 2030\nvm\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("register a user").not())
        .stdout(predicate::str::contains("display statistics").not())
        .stdout(predicate::str::contains("Task successfully added for bob."))
        .stdout(predicate::str::contains("My tasks for bob:"))
        .stdout(predicate::str::contains("Task:           Report"))
        .stdout(predicate::str::contains("days remaining"))
        .stdout(predicate::str::contains("Completed:      No"));
}

#[test]
fn register_rejects_duplicate_username() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nadm1n\nr\nadmin\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Username already exists"));

    // No second line was written.
    assert_eq!(
        std::fs::read_to_string(dir.path().join("user.txt")).unwrap(),
        "admin, adm1n"
    );
}

#[test]
fn register_rejects_mismatched_passwords() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nadm1n\nr\nbob\npw1\nother\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Passwords do not match"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("user.txt")).unwrap(),
        "admin, adm1n"
    );
}

#[test]
fn add_task_aborts_on_unknown_assignee() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nadm1n\na\nnobody\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User not found."));

    assert_eq!(std::fs::read_to_string(dir.path().join("tasks.txt")).unwrap(), "");
}

#[test]
fn add_task_reprompts_on_invalid_date() {
    let dir = TempDir::new().unwrap();

    tm(&dir)
        .write_stdin("admin\nadm1n\na\nadmin\nReport\nWrite it\nnot a date\n15 Dec 2030\nva\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid date format"))
        .stdout(predicate::str::contains("Task successfully added for admin."))
        .stdout(predicate::str::contains("Assigned to:    admin"));

    let tasks = std::fs::read_to_string(dir.path().join("tasks.txt")).unwrap();
    assert!(tasks.ends_with(", 15 Dec 2030, No"));
}
