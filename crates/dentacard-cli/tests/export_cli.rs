//! CLI integration tests for the headless exporter.

use assert_cmd::Command;
use predicates::prelude::*;

fn dentacard() -> Command {
    Command::cargo_bin("dentacard").unwrap()
}

#[test]
fn page_css_prints_the_exact_page_rule() {
    dentacard()
        .arg("page-css")
        .assert()
        .success()
        .stdout(predicate::str::contains("size: 85.6mm 54.0mm"))
        .stdout(predicate::str::contains("margin: 0"))
        .stdout(predicate::str::contains("print-color-adjust: exact"));
}

#[test]
fn export_writes_a_jpeg_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("card.jpeg");

    dentacard()
        .args([
            "export",
            "--patient",
            "R. Verma",
            "--doctor",
            "Dr. A. Sharma",
            "--upper-right",
            "11, 12",
            "--pixel-ratio",
            "1",
            "--output",
        ])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("324x204 px"));

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn export_loads_a_record_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("card.json");
    let out = dir.path().join("back.jpeg");
    std::fs::write(
        &input,
        r#"{"patient":"R. Verma","workType":"Bridge","upperRight":"11, 12"}"#,
    )
    .unwrap();

    dentacard()
        .args(["export", "--side", "back", "--pixel-ratio", "1", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn export_rejects_an_unknown_side() {
    dentacard()
        .args(["export", "--side", "top"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown card side"));
}
