//! CLI surface tests that run without a database.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("hauntdb")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("rebuild"));
}

#[test]
fn migrate_without_credentials_fails_with_message() {
    Command::cargo_bin("hauntdb")
        .unwrap()
        .arg("migrate")
        .env_remove("PGDATABASE")
        .env_remove("PGUSER")
        .env_remove("PGPASSWORD")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing DB credentials"));
}

#[test]
fn rebuild_rejects_conflicting_flags() {
    Command::cargo_bin("hauntdb")
        .unwrap()
        .args(["rebuild", "--dataset-only", "--correlation-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
