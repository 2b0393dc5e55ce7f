#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const INTAKE: [(&str, &str); 5] = [
    ("S0Q1", "Asha"),
    ("S0Q2", "18-24"),
    ("S0Q3", "employee"),
    ("S0Q4", "single"),
    ("S0Q5", "0"),
];

const SCALE_IDS: [&str; 22] = [
    "S1Q1", "S1Q2", "S1Q3", "S1Q4", "S1Q5", "S1Q6", "S2Q1", "S2Q2", "S2Q3", "S2Q4", "S2Q5",
    "S2Q6", "S3Q1", "S3Q2", "S3Q3", "S3Q6", "S4Q1", "S4Q2", "S4Q3", "S4Q4", "S4Q5", "S4Q6",
];

const STRENGTH_IDS: [&str; 11] = [
    "S5Q1", "S5Q2", "S5Q3", "S5Q4", "S5Q5", "S5Q6", "S6Q1", "S6Q2", "S6Q3", "S6Q4", "S6Q5",
];

/// Every question answered "Neutral" or with its first option.
fn neutral_answers() -> Vec<(&'static str, String)> {
    let mut answers: Vec<(&'static str, String)> = INTAKE
        .iter()
        .map(|(id, value)| (*id, value.to_string()))
        .collect();
    for id in SCALE_IDS.iter().chain(STRENGTH_IDS.iter()) {
        answers.push((id, "3".to_string()));
    }
    answers.push(("S3Q4", "<5h".to_string()));
    answers.push(("S3Q5", "almost-never".to_string()));
    answers.push(("S7Q1", "not-ready".to_string()));
    answers.push(("S7Q2", "overwhelm".to_string()));
    answers.push(("S7Q3", "<1000".to_string()));
    answers
}

fn to_json(answers: &[(&str, String)]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = answers
        .iter()
        .map(|(id, value)| (id.to_string(), serde_json::Value::from(value.as_str())))
        .collect();
    serde_json::Value::Object(map).to_string()
}

fn write_answers(dir: &Path, name: &str, answers: &[(&str, String)]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, to_json(answers)).expect("answers should write");
    path
}

fn quiz_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("energy-quiz").expect("binary should compile");
    cmd.current_dir(dir).env_remove("RUST_LOG").env("HOME", dir);
    cmd
}

#[test]
fn score_prints_markdown_report_for_complete_answers() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_answers(dir.path(), "answers.json", &neutral_answers());

    quiz_in(dir.path())
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Hi Asha!"))
        .stdout(predicate::str::contains("Energy Alignment Score: 36"))
        .stdout(predicate::str::contains("The Resting Phase"))
        .stdout(predicate::str::contains("## Key Insights"));
}

#[test]
fn score_json_report_carries_codes_and_fingerprint() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_answers(dir.path(), "answers.json", &neutral_answers());

    let output = quiz_in(dir.path())
        .arg("score")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .expect("score should run");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report json should parse");
    assert_eq!(value["result"]["eas"], 36);
    assert_eq!(value["result"]["dimensions"]["RS"], 13);
    assert_eq!(value["result"]["indices"]["OGI"], 50);
    assert_eq!(value["answered"], 43);
}

#[test]
fn identical_answers_share_a_fingerprint() {
    let dir = TempDir::new().expect("temp dir should be created");
    let first = write_answers(dir.path(), "first.json", &neutral_answers());
    let mut reordered = neutral_answers();
    reordered.reverse();
    let second = write_answers(dir.path(), "second.json", &reordered);

    let fingerprint = |path: &Path| {
        let output = quiz_in(dir.path())
            .arg("score")
            .arg(path)
            .args(["--format", "json"])
            .output()
            .expect("score should run");
        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("report json should parse");
        value["fingerprint"].as_str().map(str::to_string)
    };
    assert!(fingerprint(&first).is_some());
    assert_eq!(fingerprint(&first), fingerprint(&second));
}

#[test]
fn radiant_profile_scores_in_top_band() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut lines = vec!["S0Q1 = \"Mira\"".to_string()];
    for id in SCALE_IDS {
        let value = if matches!(id, "S3Q1" | "S3Q6" | "S4Q5") { 5 } else { 1 };
        lines.push(format!("{id} = {value}"));
    }
    for id in STRENGTH_IDS {
        let value = if id == "S6Q4" { 1 } else { 5 };
        lines.push(format!("{id} = {value}"));
    }
    lines.push("S3Q4 = \"8h+\"".to_string());
    lines.push("S3Q5 = \"5+-days\"".to_string());
    lines.push("S7Q1 = \"100-ready\"".to_string());
    lines.push("S7Q3 = \"5000+\"".to_string());
    let path = dir.path().join("answers.toml");
    fs::write(&path, lines.join("\n")).expect("answers should write");

    // Intake and the challenge question are left out, so issues are reported.
    quiz_in(dir.path())
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Hi Mira!"))
        .stdout(predicate::str::contains("Energy Alignment Score: 100"))
        .stdout(predicate::str::contains("The Radiant Phase"))
        .stdout(predicate::str::contains("S7Q2: unanswered"));
}

#[test]
fn score_refuses_answers_missing_a_whole_dimension() {
    let dir = TempDir::new().expect("temp dir should be created");
    let answers: Vec<_> = neutral_answers()
        .into_iter()
        .filter(|(id, _)| !id.starts_with("S5"))
        .collect();
    let path = write_answers(dir.path(), "answers.json", &answers);

    quiz_in(dir.path())
        .arg("score")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("score not computable"))
        .stderr(predicate::str::contains("SP"));
}

#[test]
fn score_missing_file_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    quiz_in(dir.path())
        .args(["score", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("answers file not found"));
}

#[test]
fn score_rejects_unsupported_extension() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("answers.yaml"), "S1Q1: 3").expect("answers should write");

    quiz_in(dir.path())
        .args(["score", "answers.yaml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported answers format"));
}

#[test]
fn unknown_option_scores_with_warning_exit() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut answers = neutral_answers();
    for (id, value) in answers.iter_mut() {
        if *id == "S3Q4" {
            *value = "10h".to_string();
        }
    }
    let path = write_answers(dir.path(), "answers.json", &answers);

    quiz_in(dir.path())
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("## Answer Issues"))
        .stdout(predicate::str::contains("S3Q4: '10h' is not a listed option"));
}

#[test]
fn strict_config_refuses_answers_with_issues() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut answers = neutral_answers();
    answers.push(("S9Q9", "3".to_string()));
    let path = write_answers(dir.path(), "answers.json", &answers);
    fs::write(dir.path().join("energy-quiz.toml"), "[scoring]\nstrict = true\n")
        .expect("config should write");

    quiz_in(dir.path())
        .arg("score")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("S9Q9: not a quiz question"))
        .stderr(predicate::str::contains("strict scoring refused"));
}

#[test]
fn local_config_sets_report_format_and_fallback_name() {
    let dir = TempDir::new().expect("temp dir should be created");
    let answers: Vec<_> = neutral_answers()
        .into_iter()
        .filter(|(id, _)| *id != "S0Q1")
        .collect();
    let path = write_answers(dir.path(), "answers.json", &answers);
    fs::write(
        dir.path().join("energy-quiz.toml"),
        "[report]\nformat = \"json\"\nrespondent_fallback = \"Friend\"\n",
    )
    .expect("config should write");

    quiz_in(dir.path())
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"respondent\": \"Friend\""));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().expect("temp dir should be created");

    quiz_in(dir.path())
        .args(["--config", "missing.toml", "catalog"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_key_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("energy-quiz.toml"), "[scoring]\nlenient = true\n")
        .expect("config should write");

    quiz_in(dir.path())
        .arg("catalog")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn validate_reports_clean_answers() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_answers(dir.path(), "answers.json", &neutral_answers());

    quiz_in(dir.path())
        .arg("validate")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("validate: 43 answers, no issues"));
}

#[test]
fn validate_flags_blocking_gaps() {
    let dir = TempDir::new().expect("temp dir should be created");
    let answers: Vec<_> = neutral_answers()
        .into_iter()
        .filter(|(id, _)| !id.starts_with("S2"))
        .collect();
    let path = write_answers(dir.path(), "answers.json", &answers);

    quiz_in(dir.path())
        .arg("validate")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[WARN] S2Q1: unanswered"))
        .stdout(predicate::str::contains("[BLOCKING] score not computable"));
}

#[test]
fn take_scores_answers_typed_on_stdin() {
    let dir = TempDir::new().expect("temp dir should be created");
    // Typed in catalog order: intake, scales, then the categorical items.
    let mut input = vec!["Asha".to_string()];
    input.extend(std::iter::repeat("1".to_string()).take(4));
    input.extend(std::iter::repeat("3".to_string()).take(12));
    input.extend(["3", "3", "3", "1", "1", "3"].map(String::from));
    input.extend(std::iter::repeat("3".to_string()).take(17));
    input.extend(std::iter::repeat("1".to_string()).take(3));
    assert_eq!(input.len(), neutral_answers().len());

    quiz_in(dir.path())
        .arg("take")
        .write_stdin(input.join("\n") + "\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Section 8 of 8"))
        .stdout(predicate::str::contains("Energy Alignment Score: 36"));
}

#[test]
fn take_fails_when_input_ends_early() {
    let dir = TempDir::new().expect("temp dir should be created");

    quiz_in(dir.path())
        .arg("take")
        .write_stdin("Asha\n1\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn batch_scores_each_file_and_flags_failures() {
    let dir = TempDir::new().expect("temp dir should be created");
    let responses = dir.path().join("responses");
    fs::create_dir_all(&responses).expect("responses dir should create");
    write_answers(&responses, "a.json", &neutral_answers());
    fs::write(responses.join("b.toml"), "S1Q1 = 3\n").expect("answers should write");

    quiz_in(dir.path())
        .args(["batch", "responses"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("a.json\t36\tThe Resting Phase\tAsha"))
        .stdout(predicate::str::contains("b.toml\terror: score not computable"));
}

#[test]
fn batch_missing_directory_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    quiz_in(dir.path())
        .args(["batch", "nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
