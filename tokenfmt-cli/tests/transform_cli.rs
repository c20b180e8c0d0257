//! CLI behavior: exit codes, file handling, warnings and the JSON report.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

const EXPORT: &str = r#"
--viewport-min-width: "390";
--viewport-max-width: "1440";
--color-default-50: #fafafa;
--spacing-4: 16px;
--spacing-4-rem: 1rem;
--shadow-ambient: 0 1px 2px rgba(0, 0, 0, 0.08);
"#;

#[test]
fn transforms_input_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("original.css");
    let output = dir.path().join("output.css");
    fs::write(&input, EXPORT).unwrap();

    let mut cmd = cargo_bin_cmd!("tokenfmt");
    cmd.arg(&input).arg(&output);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("wrote 2 variables"));

    let css = fs::read_to_string(&output).unwrap();
    assert!(css.starts_with("@layer globals {"));
    assert!(css.contains("--color-default-50: #fafafa;"));
    assert!(css.contains("--spacing-4: 1rem;"));
}

#[test]
fn warns_about_dropped_variables_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("original.css");
    fs::write(&input, EXPORT).unwrap();

    let mut cmd = cargo_bin_cmd!("tokenfmt");
    cmd.arg(&input).arg(dir.path().join("output.css"));
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("no group for --shadow-ambient"));
}

#[test]
fn missing_input_file_fails_with_a_message() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("tokenfmt");
    cmd.current_dir(dir.path());
    cmd.arg("does-not-exist.css");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read does-not-exist.css"));
}

#[test]
fn missing_viewport_configuration_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("original.css");
    let output = dir.path().join("output.css");
    fs::write(&input, "--color-default-50: #fafafa;\n").unwrap();

    let mut cmd = cargo_bin_cmd!("tokenfmt");
    cmd.arg(&input).arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("viewport-min-width"));

    assert!(!output.exists());
}

#[test]
fn writes_a_json_report_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("original.css");
    let report = dir.path().join("report.json");
    fs::write(&input, EXPORT).unwrap();

    let mut cmd = cargo_bin_cmd!("tokenfmt");
    cmd.arg(&input)
        .arg(dir.path().join("output.css"))
        .arg("--report")
        .arg(&report);
    cmd.assert().success();

    let body: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(body["variables"], 2);
    assert_eq!(body["dropped"][0], "shadow-ambient");
}

#[test]
fn version_flag_prints_the_version() {
    let mut cmd = cargo_bin_cmd!("tokenfmt");
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    let mut short = cargo_bin_cmd!("tokenfmt");
    short.arg("-v");
    short
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag_exits_cleanly() {
    let mut cmd = cargo_bin_cmd!("tokenfmt");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Restructures a design-token CSS export"));
}
