// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the hostprops binary.

mod common;

use assert_cmd::Command;
use common::{sample_fixtures, write_actual, write_fixture};
use predicates::prelude::*;
use rstest::rstest;

fn hostprops() -> Command {
    let mut cmd = Command::cargo_bin("hostprops").unwrap();
    cmd.env_remove("HOSTPROPS_BROWSER")
        .env_remove("HOSTPROPS_FIXTURES")
        .env_remove("HOSTPROPS_CAPTURE")
        .env_remove("HOSTPROPS_REPORT_DIR");
    cmd
}

// =============================================================================
// Coverage
// =============================================================================

#[rstest]
#[case("IE", "Internet Explorer: 16 of 18 properties implemented (89%), 1 errored, 2 missing across 5 classes")]
#[case("EDGE", "Edge: 15 of 19 properties implemented (79%), 0 errored, 4 missing across 5 classes")]
#[case("FF-ESR", "Firefox ESR: 15 of 19 properties implemented (79%), 0 errored, 4 missing across 5 classes")]
#[case("FF", "Firefox: 16 of 21 properties implemented (76%), 0 errored, 5 missing across 5 classes")]
#[case("CHROME", "Chrome: 15 of 19 properties implemented (79%), 0 errored, 4 missing across 5 classes")]
fn test_coverage_summary_per_browser(#[case] browser: &str, #[case] expected: &str) {
    hostprops()
        .arg("--fixtures")
        .arg(sample_fixtures())
        .args(["--browser", browser, "coverage"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected));
}

#[test]
fn test_browser_from_environment() {
    hostprops()
        .env("HOSTPROPS_BROWSER", "ff")
        .arg("--fixtures")
        .arg(sample_fixtures())
        .arg("coverage")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Firefox: "));
}

#[test]
fn test_coverage_markdown_lists_classes() {
    hostprops()
        .arg("--fixtures")
        .arg(sample_fixtures())
        .args(["--browser", "IE", "coverage", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Property Coverage: Internet Explorer"))
        .stdout(predicate::str::contains(
            "| `HTMLDivElement` | 33% | `align` | `constructor()` | `constructor`, `noWrap` |",
        ))
        .stdout(predicate::str::contains("| `HTMLUnknownElement` | 100% | `exception` (throws) | - | - |"));
}

#[test]
fn test_verbose_coverage_lists_incomplete_classes() {
    hostprops()
        .arg("--fixtures")
        .arg(sample_fixtures())
        .args(["--browser", "IE", "--verbose", "coverage"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "hostprops: incomplete HTMLDivElement (33%): 1 errored, 2 missing",
        ))
        .stderr(predicate::str::contains("incomplete HTMLUnknownElement").not());
}

#[test]
fn test_coverage_report_dir_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    hostprops()
        .env("HOSTPROPS_REPORT_DIR", dir.path())
        .arg("--fixtures")
        .arg(sample_fixtures())
        .args(["--browser", "EDGE", "coverage"])
        .assert()
        .success();

    let report = std::fs::read_to_string(dir.path().join("properties-EDGE.md")).unwrap();
    assert!(report.contains("- Coverage: 79%"));
}

#[test]
fn test_empty_registry_has_no_percentage() {
    let fixture = write_fixture("cases = []\n");
    hostprops()
        .arg("--fixtures")
        .arg(fixture.path())
        .arg("coverage")
        .assert()
        .success()
        .stdout(predicate::str::contains("(n/a)"));
}

// =============================================================================
// Resolve
// =============================================================================

#[test]
fn test_resolve_prefers_browser_slot() {
    hostprops()
        .arg("--fixtures")
        .arg(sample_fixtures())
        .args(["--browser", "IE", "resolve", "--case", "HTMLUnknownElement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("real [IE] 1 properties\n  exception\n"));
}

#[test]
fn test_capture_with_resolve_warns() {
    let dir = tempfile::tempdir().unwrap();
    hostprops()
        .arg("--fixtures")
        .arg(sample_fixtures())
        .arg("--capture")
        .arg(dir.path().join("rows.jsonl"))
        .args(["resolve", "--case", "HTMLDivElement"])
        .assert()
        .success()
        .stderr(predicate::str::contains("only applies to coverage"));
}

#[test]
fn test_resolve_unknown_case_fails() {
    hostprops()
        .arg("--fixtures")
        .arg(sample_fixtures())
        .args(["resolve", "--case", "HTMLBlinkElement"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case 'HTMLBlinkElement'"));
}

// =============================================================================
// Check
// =============================================================================

#[test]
fn test_check_passes_on_matching_output() {
    let fixture = write_fixture(
        r#"
        [[cases]]
        name = "HTMLBRElement"
        [cases.expected]
        default = "clear,constructor()"
        "#,
    );
    let actual = write_actual(r#"{ "HTMLBRElement": ["constructor()", "clear"] }"#);

    hostprops()
        .arg("--fixtures")
        .arg(fixture.path())
        .arg("check")
        .arg("--actual")
        .arg(actual.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 cases match for CHROME"));
}

#[test]
fn test_check_fails_on_mismatch() {
    let actual = write_actual(r#"{ "HTMLBRElement": ["clear"], "HTMLMarqueeElement": [] }"#);

    hostprops()
        .arg("--fixtures")
        .arg(sample_fixtures())
        .arg("check")
        .arg("--actual")
        .arg(actual.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("mismatch HTMLBRElement"))
        .stdout(predicate::str::contains("missing  HTMLDivElement"))
        .stderr(predicate::str::contains("'HTMLMarqueeElement' is not in the registry"));
}

#[test]
fn test_check_fails_on_fixture_dir_without_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    let actual = write_actual(r#"{ "HTMLBRElement": ["clear"] }"#);

    hostprops()
        .arg("--fixtures")
        .arg(dir.path())
        .arg("check")
        .arg("--actual")
        .arg(actual.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("cases match").not())
        .stderr(predicate::str::contains("No fixture files found"));
}

#[test]
fn test_check_loads_fixture_dir_with_brackets() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("run[1]");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(
        dir.join("br.toml"),
        "[[cases]]\nname = \"HTMLBRElement\"\n[cases.expected]\ndefault = \"clear\"\n",
    )
    .unwrap();
    let actual = write_actual(r#"{ "HTMLBRElement": ["clear"] }"#);

    hostprops()
        .arg("--fixtures")
        .arg(&dir)
        .arg("check")
        .arg("--actual")
        .arg(actual.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 cases match for CHROME"));
}

#[test]
fn test_invalid_fixture_reports_file() {
    let fixture = write_fixture("[[cases]]\nname = \"X\"\n[cases.expected]\nsafari = []\n");
    hostprops()
        .arg("--fixtures")
        .arg(fixture.path())
        .arg("coverage")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("safari"));
}
