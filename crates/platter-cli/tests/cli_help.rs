use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("platter")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("pages"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_help_lists_catalog_overrides() {
    cargo_bin_cmd!("platter")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--page-size"))
        .stdout(predicate::str::contains("--latency-ms"))
        .stdout(predicate::str::contains("--fail-every"));
}

#[test]
fn test_pages_help_shows_flags() {
    cargo_bin_cmd!("platter")
        .args(["pages", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-pages"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("platter")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}
