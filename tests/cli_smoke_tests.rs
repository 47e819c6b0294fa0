//! Smoke tests for the binary's non-interactive surface.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("lifewheel_cli").expect("binary builds")
}

#[test]
fn version_prints_build_metadata() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lifewheel 0.1.0"));
}

#[test]
fn unknown_commands_fail_with_an_error() {
    cli()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn headless_plan_export_renders_the_persisted_snapshot() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("lifewheel-v1.json"),
        r#"{"prior_scores": {"body": 9}, "prior_keyword": "balance"}"#,
    )
    .expect("seed snapshot");
    let out = dir.path().join("plan.md");

    cli()
        .args(["export", "plan", "--lang", "en"])
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();

    let markdown = std::fs::read_to_string(&out).expect("plan written");
    assert!(markdown.contains("# 🎡 Lifewheel 2026"));
    assert!(markdown.contains("| 💪 Body | 9 |"));
    assert!(markdown.contains("⚖️ Balance"));
}

#[test]
fn headless_calendar_export_contains_four_quarters() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("reviews.ics");

    cli()
        .args(["export", "calendar", "--lang", "en"])
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();

    let ics = std::fs::read_to_string(&out).expect("ics written");
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
    assert!(ics.contains("SUMMARY:Q4 Life Wheel Review"));
}

#[test]
fn export_without_a_kind_reports_usage() {
    cli()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
