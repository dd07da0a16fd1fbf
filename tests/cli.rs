use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workcadence(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("workcadence").unwrap();
    cmd.current_dir(dir.path()).env_remove("WORKCADENCE_CONFIG");
    cmd
}

#[test]
fn test_due_initial_first_cycle() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["due", "--anchor", "2024-01-01", "--cycle", "1"])
        .assert()
        .success()
        .stdout("2024-01-15\n");
}

#[test]
fn test_due_initial_second_cycle() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["due", "--anchor", "2024-01-01", "--cycle", "2"])
        .assert()
        .success()
        .stdout("2024-01-22\n");
}

#[test]
fn test_due_renewal() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["due", "--anchor", "2024-01-01", "--cycle", "2", "--mode", "renewal"])
        .assert()
        .success()
        .stdout("2024-01-11\n");
}

#[test]
fn test_due_normalizes_cycle() {
    let dir = TempDir::new().unwrap();
    for raw in ["-5", "0.5", "0"] {
        workcadence(&dir)
            .args(["due", "--anchor", "2024-01-01", "--mode", "renewal", "--cycle", raw])
            .assert()
            .success()
            .stdout("2024-01-02\n");
    }
}

#[test]
fn test_due_from_task_name() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["due", "--anchor", "2024-01-01", "--name", "Medium - 2"])
        .assert()
        .success()
        .stdout("2024-01-22\n");
}

#[test]
fn test_due_keeps_time_of_day() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["due", "--anchor", "2024-01-05T14:30", "--mode", "renewal"])
        .assert()
        .success()
        .stdout("2024-01-08 14:30\n");
}

#[test]
fn test_due_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["due", "--anchor", "01/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_series_text() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["series", "--anchor", "2024-01-01", "-n", "3", "--label", "Medium"])
        .assert()
        .success()
        .stdout(
            "1\t2024-01-15\tMon\tMedium - 1\n\
             2\t2024-01-22\tMon\tMedium - 2\n\
             3\t2024-01-29\tMon\tMedium - 3\n",
        );
}

#[test]
fn test_series_until_contract_end() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args([
            "series", "--anchor", "2024-01-01", "--until", "2024-01-12", "--mode", "renewal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-11"))
        .stdout(predicate::str::contains("Task - 2"))
        .stdout(predicate::str::contains("Task - 3").not());
}

#[test]
fn test_series_end_before_anchor_fails() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["series", "--anchor", "2024-01-10", "--until", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("before anchor"));
}

#[test]
fn test_series_json() {
    let dir = TempDir::new().unwrap();
    let output = workcadence(&dir)
        .args(["series", "--anchor", "2024-01-01", "-n", "2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "initial");
    assert_eq!(report["slots"][1]["cycle"], 2);
    assert_eq!(report["slots"][1]["due"], "2024-01-22T00:00:00");
}

#[test]
fn test_series_writes_reports() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args([
            "series", "--anchor", "2024-01-01", "-n", "2", "--label", "Blog Post", "--write",
            "--report-dir", "out",
        ])
        .assert()
        .success();

    let md = fs::read_to_string(dir.path().join("out/blog-post.series.md")).unwrap();
    assert!(md.contains("Blog Post - 2"));
    assert!(dir.path().join("out/blog-post.series.json").exists());
}

#[test]
fn test_config_file_overrides_rules() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("workcadence.yaml"),
        "default_mode: renewal\ndate_format: \"%d.%m.%Y\"\nrules:\n  renewal_first_offset: 5\n",
    )
    .unwrap();

    workcadence(&dir)
        .args(["due", "--anchor", "2024-01-01"])
        .assert()
        .success()
        .stdout("08.01.2024\n");
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.yaml"), "rules:\n  initial_step: 0\n").unwrap();

    workcadence(&dir)
        .args(["--config", "bad.yaml", "due", "--anchor", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("initial_step"));
}

#[test]
fn test_cycle_command() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["cycle", "Medium - 3", "Medium", "Medium -3", "Medium - abc"])
        .assert()
        .success()
        .stdout("3\tMedium - 3\n1\tMedium\n3\tMedium -3\n1\tMedium - abc\n");
}

#[test]
fn test_schema_lists_rules() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("renewal_interval"))
        .stdout(predicate::str::contains("default_mode"));
}

#[test]
fn test_due_huge_cycle_saturates() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["due", "--anchor", "2024-01-01", "--mode", "renewal", "--cycle", "20000000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_series_exact_fit_has_no_cap_note() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args([
            "series", "--anchor", "2024-01-01", "-n", "3", "--until", "2024-01-29", "--format",
            "markdown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task - 3"))
        .stdout(predicate::str::contains("cycle cap").not());
}

#[test]
fn test_series_zero_count_fails() {
    let dir = TempDir::new().unwrap();
    workcadence(&dir)
        .args(["series", "--anchor", "2024-01-01", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
