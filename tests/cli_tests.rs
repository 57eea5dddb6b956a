//! Command line contract: summary line, exit status, file handling.

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::{Builder, NamedTempFile};

fn rule_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_rewrites_in_place_and_prints_summary() {
    let file = rule_file("DOMAIN-SUFFIX,example.com\nDOMAIN,ads.example.com\n- '+.unrelated.org'\n");

    Command::cargo_bin("rulelist-normalizer")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("Done, 2 domains written to"));

    let written = fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, "example.com\nunrelated.org\n");
}

#[test]
fn test_adblock_dialect_with_exclusions() {
    let file = rule_file("||ads.example.com^\n||example.com^\n||tracker.example.jp^\n||unrelated.org^\n");

    Command::cargo_bin("rulelist-normalizer")
        .unwrap()
        .args(["--dialect", "plain-adblock", "--exclude", ".jp"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains("Done, 2 domains written to"));

    let written = fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, "example.com\nunrelated.org\n");
}

#[test]
fn test_output_flag_leaves_input_untouched() {
    let input = "DOMAIN,example.com\nDOMAIN,www.example.com\n";
    let file = rule_file(input);
    let output = NamedTempFile::new().unwrap();

    Command::cargo_bin("rulelist-normalizer")
        .unwrap()
        .arg(file.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(contains("Done, 1 domains written to"));

    assert_eq!(fs::read_to_string(file.path()).unwrap(), input);
    assert_eq!(fs::read_to_string(output.path()).unwrap(), "example.com\n");
}

#[test]
fn test_unreadable_file_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    Command::cargo_bin("rulelist-normalizer")
        .unwrap()
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(contains("Error:"));

    assert!(!missing.exists());
}

#[test]
fn test_missing_path_argument_touches_nothing() {
    let input = "DOMAIN,www.example.com\nDOMAIN,example.com\n";
    let file = rule_file(input);

    // The rule file is only referenced through the config, never as PATH
    let config = Builder::new().suffix(".json").tempfile().unwrap();
    fs::write(config.path(), r#"{ "dialect": "clash-basic" }"#).unwrap();

    Command::cargo_bin("rulelist-normalizer")
        .unwrap()
        .arg("--config")
        .arg(config.path())
        .current_dir(file.path().parent().unwrap())
        .assert()
        .failure()
        .code(2);

    assert_eq!(fs::read_to_string(file.path()).unwrap(), input);
}

#[test]
fn test_bad_exclusion_suffix_fails_before_writing() {
    let input = "DOMAIN,example.com\n";
    let file = rule_file(input);

    Command::cargo_bin("rulelist-normalizer")
        .unwrap()
        .args(["--exclude", "*.jp"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(contains("Invalid exclusion suffix"));

    assert_eq!(fs::read_to_string(file.path()).unwrap(), input);
}
