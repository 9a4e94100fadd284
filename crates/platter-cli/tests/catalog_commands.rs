use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_pages_drains_catalog() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .env_remove("PLATTER_LOG")
        .args(["pages", "--latency-ms", "0", "--size", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "page 1: items 1-100 (100), next cursor 100",
        ))
        .stdout(predicate::str::contains(
            "page 3: items 201-250 (50), next cursor none",
        ))
        .stdout(predicate::str::contains(
            "total: 250 items in 3 pages (catalog exhausted)",
        ));
}

#[test]
fn test_pages_respects_max_pages() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .args(["pages", "--latency-ms", "0", "--max-pages", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 2: items 101-200"))
        .stdout(predicate::str::contains("page 3").not())
        .stdout(predicate::str::contains("total: 200 items in 2 pages (more available)"));
}

#[test]
fn test_pages_json_report() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .args([
            "pages",
            "--json",
            "--latency-ms",
            "0",
            "--size",
            "1500",
            "--page-size",
            "100",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 1500);
    assert_eq!(report["exhausted"], true);
    assert_eq!(report["requests"], 15);
    let pages = report["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 15);
    assert_eq!(pages[14]["first_id"], 1401);
    assert_eq!(pages[14]["last_id"], 1500);
    assert!(pages[14]["next_cursor"].is_null());
}

#[test]
fn test_pages_reports_injected_failure() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .args(["pages", "--latency-ms", "0", "--fail-every", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("page 1: items 1-100"))
        .stderr(predicate::str::contains("fetch page 2"))
        .stderr(predicate::str::contains("simulated upstream failure"));
}

#[test]
fn test_show_prints_item_json() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .args(["show", "42"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let item: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(item["id"], 42);
    assert!(item["name"].as_str().unwrap().ends_with(" 42"));
    assert!(item["ingredients"].is_array());
}

#[test]
fn test_show_unknown_item_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .args(["show", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item 9999 not found"));
}

#[test]
fn test_search_lists_matches() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .args(["search", "thai", "--size", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tThai\n").or(predicate::str::contains("Pad Thai")))
        .stdout(predicate::str::contains("for \"thai\""));
}

#[test]
fn test_search_with_no_hits() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .args(["search", "zzzz-no-such-dish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 matches for \"zzzz-no-such-dish\""));
}

#[test]
fn test_browse_requires_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("platter")
        .env("PLATTER_HOME", dir.path())
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
