use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Abstraction for managing the attest test environment.
struct AttestTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl AttestTestEnv {
    /// Sets up a project directory with the classification fixture dataset
    /// and a check file pointing at it.
    fn new(check_yaml: &str) -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();

        std::fs::write(
            root.join("predictions.csv"),
            "label,prediction\n0,0\n1,2\n2,1\n0,0\n1,0\n2,1\n",
        )?;
        std::fs::write(root.join("checks.yaml"), check_yaml)?;

        Ok(Self { _tmp: tmp, root })
    }

    fn attest(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("attest"));
        cmd.current_dir(&self.root);
        cmd
    }
}

#[test]
fn test_check_passes_on_fixture_dataset() -> Result<()> {
    let env = AttestTestEnv::new(
        r#"
dataset: predictions.csv
expectations:
  - column_A: label
    column_B: prediction
    threshold: 0.3
"#,
    )?;

    env.attest()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS"))
        .stdout(predicate::str::contains("observed metric outcome: true"));
    Ok(())
}

#[test]
fn test_check_surfaces_failed_metric_outcome() -> Result<()> {
    // or_equal selects exact comparison; the macro recall of the fixture is
    // 1/3, so 0.9 never matches. The rule still reports success (its result
    // combination is a stub), and the observed outcome makes that visible.
    let env = AttestTestEnv::new(
        r#"
dataset: predictions.csv
expectations:
  - column_A: label
    column_B: prediction
    threshold: 0.9
    or_equal: true
"#,
    )?;

    env.attest()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("observed metric outcome: false"));
    Ok(())
}

#[test]
fn test_check_rejects_invalid_threshold() -> Result<()> {
    let env = AttestTestEnv::new(
        r#"
dataset: predictions.csv
expectations:
  - column_A: label
    column_B: prediction
    threshold: 7.5
"#,
    )?;

    env.attest()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expectation configuration"));
    Ok(())
}

#[test]
fn test_check_fails_on_missing_check_file() -> Result<()> {
    let env = AttestTestEnv::new("dataset: predictions.csv\nexpectations: []\n")?;

    env.attest()
        .arg("check")
        .arg("--check-file")
        .arg("absent.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yaml"));
    Ok(())
}

#[test]
fn test_check_fails_on_unknown_column() -> Result<()> {
    let env = AttestTestEnv::new(
        r#"
dataset: predictions.csv
expectations:
  - column_A: label
    column_B: nonexistent
    threshold: 0.3
"#,
    )?;

    env.attest()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent"));
    Ok(())
}

#[test]
fn test_diagnostics_report_shape() -> Result<()> {
    let env = AttestTestEnv::new("dataset: predictions.csv\nexpectations: []\n")?;

    let output = env.attest().arg("diagnostics").output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["expectation"], "expect_recall_greater_or_equal_than");
    assert_eq!(
        report["map_metric"],
        "column_values.recall_greater_or_equal_than"
    );

    // Two declared cases; the negative one fails because the rule reports
    // success unconditionally while the fixture declares false.
    let cases = report["cases"].as_array().expect("cases array");
    assert_eq!(cases.len(), 2);
    assert_eq!(report["passed"], 1);
    assert_eq!(report["failed"], 1);
    assert_eq!(report["success"], false);
    Ok(())
}

#[test]
fn test_inspect_prints_schema_and_rows() -> Result<()> {
    let env = AttestTestEnv::new("dataset: predictions.csv\nexpectations: []\n")?;

    env.attest()
        .arg("inspect")
        .arg("predictions.csv")
        .arg("--limit")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("label"))
        .stdout(predicate::str::contains("prediction"))
        .stdout(predicate::str::contains("6 rows"));
    Ok(())
}
