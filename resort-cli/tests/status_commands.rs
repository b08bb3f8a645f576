//! Integration tests for `check-out` and `cancel`.
//!
//! The fixtures seen on 2025-01-12: R1 is active, R2 upcoming, R3 completed.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_check_out_active() {
    let env = TestEnv::new();
    env.seed();

    env.command()
        .args(["check-out", "R1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reservation R1 is now Checked-Out"));

    let output = env.stdout(&["list", "--search", "r1"]);
    assert!(output.contains("Checked-Out"));
}

#[test]
fn test_cancel_upcoming() {
    let env = TestEnv::new();
    env.seed();

    env.command()
        .args(["cancel", "R2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reservation R2 is now Cancelled"));
}

#[test]
fn test_manual_status_survives_date_change() {
    let env = TestEnv::new();
    env.seed();
    env.command().args(["cancel", "R2"]).assert().success();

    // After the stay dates the reservation would be Completed, but the
    // cancellation sticks.
    let output = env
        .command_bare()
        .arg("--data-dir")
        .arg(env.path())
        .args(["--today", "2025-06-01", "show", "R2", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "Cancelled");
}

#[test]
fn test_check_out_upcoming_refused() {
    let env = TestEnv::new();
    env.seed();

    env.command()
        .args(["check-out", "R2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot check out an upcoming reservation"));
}

#[test]
fn test_cancel_active_refused() {
    let env = TestEnv::new();
    env.seed();

    env.command()
        .args(["cancel", "R1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("in progress"));

    let output = env.stdout(&["show", "R1", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["status"], "Active");
}

#[test]
fn test_completed_refuses_both() {
    let env = TestEnv::new();
    env.seed();

    env.command().args(["check-out", "R3"]).assert().code(1);
    env.command().args(["cancel", "R3"]).assert().code(1);
}

#[test]
fn test_terminal_status_is_final() {
    let env = TestEnv::new();
    env.seed();
    env.command().args(["check-out", "R1"]).assert().success();

    env.command()
        .args(["check-out", "R1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already checked out"));
    env.command().args(["cancel", "R1"]).assert().code(1);
}

#[test]
fn test_status_change_unknown_id() {
    let env = TestEnv::new();

    env.command().args(["check-out", "R404"]).assert().code(3);
    env.command().args(["cancel", "R404"]).assert().code(3);
}
