//! Integration tests for login, damaged data files and exit codes.
//!
//! Exit codes:
//! - 0: Success (including writes that only produced a warning)
//! - 1: Refused action (illegal status change, failed login)
//! - 2: Usage error reported by the argument parser
//! - 3: Reservation not found
//! - 4: Rejected input
//! - 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

const AUTH_CONFIG: &str = "auth:\n  username: admin\n  password: \"123\"\n";

#[test]
fn test_login_without_gate() {
    let env = TestEnv::new();

    env.command()
        .arg("login")
        .assert()
        .success()
        .stdout(predicate::str::contains("No operator login is configured"));
}

#[test]
fn test_verbose_notes_missing_gate() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no operator login is configured"));

    env.command()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("no operator login").not());
}

#[test]
fn test_login_success_and_failure() {
    let env = TestEnv::new();
    env.write_config(AUTH_CONFIG);

    env.command()
        .args(["--operator", "admin", "--secret", "123", "login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful"));

    env.command()
        .args(["--operator", "admin", "--secret", "1234", "login"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid username or password"));
}

#[test]
fn test_gate_applies_to_every_command() {
    let env = TestEnv::new();
    env.write_config(AUTH_CONFIG);

    env.command().arg("list").assert().code(1);

    env.command()
        .env("RESORT_OPERATOR", "admin")
        .env("RESORT_SECRET", "123")
        .arg("list")
        .assert()
        .success();
}

#[test]
fn test_malformed_config_is_configuration_error() {
    let env = TestEnv::new();
    env.write_config("currency: [unterminated\n");

    env.command().arg("list").assert().code(7);
}

#[test]
fn test_unknown_config_key_is_configuration_error() {
    let env = TestEnv::new();
    env.write_config("colour: blue\n");

    env.command()
        .arg("list")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("colour"));
}

#[test]
fn test_corrupt_snapshot_starts_empty_with_warning() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.path()).unwrap();
    let garbage = vec![0xAB_u8; 8192];
    std::fs::write(env.database_path(), &garbage).unwrap();

    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No reservations found"))
        .stderr(predicate::str::contains("Warning: could not load reservations"));

    // Reading never rewrites the damaged file
    assert_eq!(std::fs::read(env.database_path()).unwrap(), garbage);

    // The next write replaces it with a valid snapshot
    env.create("R1", "Alice", "single", "2025-01-10", "2025-01-12");
    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stderr(predicate::str::contains("Warning").not());
}

#[test]
fn test_quiet_hides_warnings() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.path()).unwrap();
    std::fs::write(env.database_path(), vec![0xAB_u8; 8192]).unwrap();

    env.command()
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning").not());
}

#[test]
fn test_failed_write_keeps_going_with_warning() {
    let env = TestEnv::new();
    // A directory where the snapshot file should be makes every write fail
    std::fs::create_dir_all(env.database_path()).unwrap();

    env.command()
        .args(["create", "--id", "R1", "--name", "Alice", "--contact", "555"])
        .args(["--room", "single", "--check-in", "2025-01-10", "--check-out", "2025-01-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reservation saved. ID: R1"))
        .stderr(predicate::str::contains("kept in memory only"));
}

#[test]
fn test_snapshot_is_a_sqlite_database() {
    let env = TestEnv::new();
    env.create("R1", "Alice", "suite", "2025-01-10", "2025-01-12");

    let conn = rusqlite::Connection::open(env.database_path()).unwrap();
    let (guest, cost): (String, i64) = conn
        .query_row(
            "SELECT guest_name, total_cost FROM reservations WHERE id = 'R1'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(guest, "Alice");
    assert_eq!(cost, 40_000);
}
