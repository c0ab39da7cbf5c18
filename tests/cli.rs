//! Tests for the `review-summary` binary.

use std::io::Write;
use std::process::Command;

fn review_summary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_review-summary"))
}

#[test]
fn prints_summary_and_review_count_warning() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Great battery life and fast charging").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Camera struggles in low light").unwrap();

    let output = review_summary().arg(file.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stdout.trim(),
        "Users most frequently praised battery. Common complaints were camera and light."
    );
    assert!(stderr.contains("Warning: Expected at least 50 reviews, but found 2."));
}

#[test]
fn success_message_when_enough_reviews() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for _ in 0..3 {
        writeln!(file, "Excellent screen").unwrap();
    }

    let output = review_summary()
        .args(["--min-reviews", "3"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Successfully loaded 3 reviews."));
}

#[test]
fn json_output_has_ranked_lists() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Great battery life").unwrap();

    let output = review_summary()
        .args(["--format", "json"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pros"][0]["term"], "battery");
    assert_eq!(json["pros"][0]["count"], 1);
    assert_eq!(json["stats"]["positive"], 1);
}

#[test]
fn missing_argument_is_usage_error() {
    let output = review_summary().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_file_fails() {
    let output = review_summary()
        .arg("no/such/reviews.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no/such/reviews.txt"));
}
