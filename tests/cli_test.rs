mod common;

use assert_cmd::Command;
use common::Fixture;
use std::fs;

fn qstats() -> Command {
    let mut cmd = Command::cargo_bin("qstats").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_reads_fixed_files_in_working_directory() {
    let fixture = Fixture::scenario();

    let output = qstats()
        .current_dir(fixture.path())
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("DATASET STATISTICS"));
    assert!(stdout.contains("QUESTIONS BY DELETED STATUS"));
    assert!(stdout.contains("Statistics exported to dataset_statistics.csv"));
    assert!(fixture.read_output().contains("Deleted: True,1,Deleted Status"));
}

#[test]
fn test_plain_report_with_explicit_paths() {
    let fixture = Fixture::scenario();
    let paths = fixture.paths();
    let output_path = fixture.path().join("custom.csv");

    let output = qstats()
        .args(["report", "--plain", "--answers"])
        .arg(&paths.answers)
        .arg("--questions")
        .arg(&paths.questions)
        .arg("--output")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[STATS] BASIC COUNTS"));
    assert!(!stdout.contains('\u{1b}'));
    assert!(fs::read_to_string(output_path)
        .unwrap()
        .starts_with("Metric,Value,Category\n"));
}

#[test]
fn test_config_file_supplies_paths() {
    let fixture = Fixture::scenario();
    fs::write(
        fixture.path().join(".qstats.toml"),
        "[output]\npath = \"from_config.csv\"\n",
    )
    .unwrap();

    qstats()
        .current_dir(fixture.path())
        .arg("report")
        .arg("--plain")
        .assert()
        .success();

    assert!(fixture.path().join("from_config.csv").exists());
    assert!(!fixture.output_path().exists());
}

#[test]
fn test_summary_prints_json() {
    let fixture = Fixture::scenario();

    let output = qstats()
        .current_dir(fixture.path())
        .arg("summary")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["totalQuestions"], 2);
    assert_eq!(json["deletedQuestions"], 1);
    assert_eq!(json["totalAnswers"], 3);
    assert!(!fixture.output_path().exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = qstats().current_dir(dir.path()).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("AnswerOptions_04_11.csv"), "{stderr}");
    assert!(!dir.path().join("dataset_statistics.csv").exists());
}
