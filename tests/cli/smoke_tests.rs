use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{ARTIFACTS, OutputWorkspace};

fn verify_in(ws: &OutputWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_verify_output"));
    cmd.current_dir(ws.root()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_verify_output"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify_output"));
}

#[test]
fn complete_output_exits_zero() {
    let ws = OutputWorkspace::complete();
    let mut assert = verify_in(&ws).assert().success().stderr(predicate::str::is_empty());
    for name in ARTIFACTS {
        assert = assert.stdout(predicate::str::contains(name));
    }
    assert.stdout(predicate::str::contains("✅ Verification passed: all 4 expected files present"));
}

#[test]
fn missing_csv_exits_one_with_debug_listing() {
    let ws = OutputWorkspace::complete();
    ws.remove(ARTIFACTS[2]);

    verify_in(&ws)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ participantes_procesado_*.csv"))
        .stdout(predicate::str::contains("no .csv files in output"))
        .stdout(predicate::str::contains("❌ Verification failed: 1 of 4 expected files missing"))
        .stdout(predicate::str::contains("01events_20240101.json - 2 bytes"));
}

#[test]
fn missing_output_directory_reports_four_misses() {
    let ws = OutputWorkspace::bare();

    verify_in(&ws)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("directory could not be listed"))
        .stdout(predicate::str::contains("❌ Verification failed: 4 of 4 expected files missing"));
}

#[test]
fn empty_output_directory_is_noted() {
    let ws = OutputWorkspace::new();

    verify_in(&ws)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(directory is empty)"))
        .stdout(predicate::str::contains("4 of 4 expected files missing"));
}

#[test]
fn dir_flag_overrides_default_location() {
    let ws = OutputWorkspace::complete();

    Command::new(env!("CARGO_BIN_EXE_verify_output"))
        .arg("--dir")
        .arg(ws.output())
        .env_remove("RUST_LOG")
        .assert()
        .success();
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ws = OutputWorkspace::complete();

    verify_in(&ws)
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("verification finished"))
        .stdout(predicate::str::contains("verification finished").not());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_verify_output"))
        .arg("--bogus")
        .assert()
        .code(2);
}
