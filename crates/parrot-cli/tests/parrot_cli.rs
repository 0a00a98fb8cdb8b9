//! Process-level coverage for the `parrot` binary's startup surface.

use assert_cmd::Command;
use predicates::prelude::*;

fn parrot() -> Command {
    let mut command = Command::cargo_bin("parrot").expect("parrot binary");
    command
        .env_remove("PARROT_BIND")
        .env_remove("PARROT_PRINTER")
        .env_remove("PARROT_LAUNCHER")
        .env_remove("PARROT_TIMEOUT_MS")
        .env_remove("PARROT_MAX_INPUT_CHARS");
    command
}

#[test]
fn help_lists_configuration_flags() {
    parrot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--printer"))
        .stdout(predicate::str::contains("--timeout-ms"))
        .stdout(predicate::str::contains("PARROT_TIMEOUT_MS"));
}

#[test]
fn invalid_bind_address_fails_before_serving() {
    parrot()
        .args(["--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --bind 'not-an-address'"));
}

#[test]
fn zero_timeout_is_rejected_from_environment() {
    parrot()
        .env("PARROT_TIMEOUT_MS", "0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("value must be greater than 0"));
}
