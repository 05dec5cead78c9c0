use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("macrolog")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("today"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("macrolog")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set-url"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("macrolog")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_interactive_mode_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("macrolog")
        .env("MACROLOG_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
