//! Integration tests for asname CLI functionality
//!
//! Everything here runs without network access: private-range ASNs,
//! invalid arguments, and usage errors are all decided before any RDAP
//! query would be made.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_no_arguments_is_usage_error() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Resolve Autonomous System Numbers",
        ))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("ASN"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.arg("--version");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("asname "));
    if cfg!(debug_assertions) {
        assert!(stdout.contains("-UNRELEASED"));
    }
}

#[test]
fn test_private_asn_resolves_offline() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.arg("64512");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AS64512: Private ASN"));
}

#[test]
fn test_private_asn_block_boundaries() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.args(["64512", "65535"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AS64512: Private ASN"))
        .stdout(predicate::str::contains("AS65535: Private ASN"));
}

#[test]
fn test_invalid_argument_is_skipped_not_fatal() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.args(["not-a-number", "64512"]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not-a-number: invalid ASN:"));
    // The bad argument must not abort the rest of the batch
    assert!(stdout.contains("AS64512: Private ASN"));
}

#[test]
fn test_zero_asn_reports_per_asn_error() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AS0: error: invalid ASN: 0"));
}

#[test]
fn test_output_lines_follow_argument_order() {
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.args(["64512", "bogus", "65000"]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "AS64512: Private ASN");
    assert!(lines[1].starts_with("bogus: invalid ASN:"));
    assert_eq!(lines[2], "AS65000: Private ASN");
}

#[test]
fn test_verbose_flag_accepted() {
    // Verbose output only applies to fetched records; for a private ASN
    // there is nothing to dump and the result line is unchanged.
    let mut cmd = Command::cargo_bin("asname").expect("Failed to find asname binary");
    cmd.args(["-v", "64512"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AS64512: Private ASN"));
}
