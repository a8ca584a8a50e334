//! End-to-end runs of the binary against local fixture files

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn csvprobe() -> Command {
    Command::cargo_bin("csvprobe").unwrap()
}

#[test]
fn clean_export_exits_zero() {
    let file = fixture("Datum,Beschreibung,C,D,Betrag\n01/07/2025,Coffee,x,y,\"4,50\"\n");
    csvprobe()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would process: 1"))
        .stdout(predicate::str::contains("2/2/4: 1 occurrences"));
}

#[test]
fn export_with_empty_row_exits_one() {
    let file = fixture("Datum,Beschreibung,C,D,Betrag\n01/07/2025,Coffee,x,y,\"4,50\"\n,,,,\n");
    csvprobe()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "predicted to drop 1 of 2 data rows",
        ));
}

#[test]
fn json_format_carries_summary_mapping() {
    let file = fixture("Datum,Beschreibung,C,D,Betrag\n01/07/2025,Coffee,x,y,\"4,50\"\n");
    csvprobe()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_rows\": 2"))
        .stdout(predicate::str::contains("\"processing_estimate\": 1"));
}

#[test]
fn converted_output_comparison() {
    let input = fixture("Datum,B,C,D,Betrag\n01/07/2025,a,x,y,\"1,00\"\n02/07/2025,b,x,y,\"2,00\"\n");
    let converted = fixture("Date,Description,Amount\n2025-07-01,a,1.00\n");
    csvprobe()
        .arg(input.path())
        .arg("--converted")
        .arg(converted.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing vs. input: 1"));
}

#[test]
fn missing_input_exits_two() {
    csvprobe()
        .arg("/nonexistent/activity.csv")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to fetch input"));
}
