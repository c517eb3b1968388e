use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const SOURCE_CSV: &str = "\u{feff}Acct Number,Portfolio,Rule ID,Rule Category,Serverity ,DQS status,\
Date of Info,Aging,Process Date,Remediation Status,Action taken By,Action Notes,Action Date,\
Assigned to,Remediation Category
300001,Credit Cards,119x,CCcardRule,Medium,New,2025/5/31,120,2025/10/15,Incomplete,Rob,Need more,2025/10/15,Rob,LOB engagement
300002,Credit Cards,119y,CCcardRule,High,New,2025/6/30,10,2025/9/1,Resolved,None,None,None,None,None
300003,TDAF,220a,AutoRule,Low,Open,2025/6/30,95,2025/9/1,Unsolved,Ann,,,Rob,Technology
300004,Consumers,330b,LoanRule,Low,Open,2025/7/31,5,bad,Nonexceptions,None,None,None,None,None
,Consumers,330b,LoanRule,Low,Open,2025/7/31,5,2025/9/1,Incomplete,None,None,None,None,None
300006,Consumers,330c,LoanRule,Low,Open,2025/7/31,abc,2025/9/1,Incomplete,None,None,None,None,None
";

/// A scratch directory with a source CSV and its own database file.
struct FcraTestEnv {
    tmp: TempDir,
}

impl FcraTestEnv {
    fn new() -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        std::fs::write(tmp.path().join("FCRA data.csv"), SOURCE_CSV)?;
        Ok(Self { tmp })
    }

    fn root(&self) -> PathBuf {
        self.tmp.path().to_path_buf()
    }

    fn fcra(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fcra"));
        cmd.current_dir(self.root());
        for key in [
            "FCRA_DATABASE_PATH",
            "FCRA_CSV_PATH",
            "FCRA_BIND",
            "FCRA_EXPORT_DIR",
        ] {
            cmd.env_remove(key);
        }
        cmd.env("RUST_LOG", "warn");
        cmd
    }

    fn imported() -> Result<Self> {
        let env = Self::new()?;
        env.fcra().arg("import").assert().success();
        Ok(env)
    }

    fn json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let output = self.fcra().args(args).output()?;
        assert!(output.status.success(), "{:?} failed", args);
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

#[test]
fn test_import_reports_skipped_and_rejected_rows() -> Result<()> {
    let env = FcraTestEnv::new()?;

    env.fcra()
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 4 records"))
        .stdout(predicate::str::contains("1 without account number"))
        .stderr(predicate::str::contains("line 7"));

    assert!(env.root().join("fcra_data.duckdb").exists());
    Ok(())
}

#[test]
fn test_summary_json_totals() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    let stats = env.json(&["summary", "--json"])?;

    assert_eq!(stats["instances"]["total"], 4);
    assert_eq!(stats["instances"]["Credit Cards"], 2);
    assert_eq!(stats["instances"]["Consumer"], 1);
    assert_eq!(stats["exceptions"]["total"], 3);
    assert_eq!(stats["lob_incomplete_by_portfolio"]["Credit Cards"], 1);
    Ok(())
}

#[test]
fn test_summary_table_lists_every_portfolio() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    env.fcra()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall"))
        .stdout(predicate::str::contains("Credit Cards"))
        .stdout(predicate::str::contains("Consumer"))
        .stdout(predicate::str::contains("ninety_days_incomplete"));
    Ok(())
}

#[test]
fn test_as_of_and_open_tasks() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    env.fcra()
        .arg("as-of")
        .assert()
        .success()
        .stdout("2025-10-15\n");
    env.fcra()
        .args(["open-tasks", "Rob"])
        .assert()
        .success()
        .stdout("2\n");
    Ok(())
}

#[test]
fn test_trend_json() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    let trend = env.json(&["trend", "--metric", "exceptions", "--json"])?;

    assert_eq!(
        trend["labels"],
        serde_json::json!(["2025-05", "2025-06", "2025-07"])
    );
    assert_eq!(trend["series"]["Credit Cards"], serde_json::json!([1, 1, 0]));
    assert_eq!(trend["series"]["TDAF"], serde_json::json!([0, 1, 0]));
    Ok(())
}

#[test]
fn test_unknown_metric_fails_with_help() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    env.fcra()
        .args(["trend", "--metric", "velocity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown trend metric 'velocity'"))
        .stderr(predicate::str::contains("instances, exceptions, remediation, lob"));
    Ok(())
}

#[test]
fn test_update_action_notes_stamps_date() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    let records = env.json(&["records", "TDAF", "--json"])?;
    let id = records[0]["id"].as_i64().unwrap_or_default();

    env.fcra()
        .args(["update", &id.to_string(), "action_notes", "Escalated"])
        .assert()
        .success();

    let records = env.json(&["records", "TDAF", "--json"])?;
    assert_eq!(records[0]["action_notes"], "Escalated");
    let stamp = records[0]["action_date"].as_str().unwrap_or_default();
    assert_eq!(stamp.len(), 10);
    assert_eq!(&stamp[4..5], "/");
    Ok(())
}

#[test]
fn test_update_rejects_unknown_field() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    env.fcra()
        .args(["update", "1", "id", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Field 'id' cannot be updated"));
    Ok(())
}

#[test]
fn test_records_filters_and_consumer_label() -> Result<()> {
    let env = FcraTestEnv::imported()?;

    let incomplete = env.json(&["records", "Credit Cards", "--status", "Incomplete", "--json"])?;
    assert_eq!(incomplete.as_array().map(Vec::len), Some(1));

    let consumer = env.json(&["records", "Consumer", "--json"])?;
    assert_eq!(consumer[0]["portfolio"], "Consumers");

    let filters = env.json(&["filters", "Credit Cards", "--json"])?;
    assert_eq!(
        filters["remediation_statuses"],
        serde_json::json!(["Incomplete", "Resolved"])
    );
    assert_eq!(
        filters["remediation_categories"],
        serde_json::json!(["LOB engagement"])
    );
    Ok(())
}

#[test]
fn test_export_writes_workbook() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    let out = env.root().join("exports");

    env.fcra()
        .args(["export", "Consumer", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Consumer_export.xlsx"));

    let bytes = std::fs::read(out.join("Consumer_export.xlsx"))?;
    assert_eq!(&bytes[..2], b"PK");

    env.fcra()
        .args(["export", "Mortgages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export target"));
    Ok(())
}

#[test]
fn test_config_file_and_db_path_flag() -> Result<()> {
    let env = FcraTestEnv::new()?;
    std::fs::write(
        env.root().join("fcra.yaml"),
        "database_path: from_config.duckdb\n",
    )?;

    env.fcra().arg("import").assert().success();
    assert!(env.root().join("from_config.duckdb").exists());

    env.fcra()
        .args(["--db-path", "from_flag.duckdb", "summary"])
        .assert()
        .success();
    assert!(env.root().join("from_flag.duckdb").exists());
    Ok(())
}

#[test]
fn test_seed_extends_imported_data() -> Result<()> {
    let env = FcraTestEnv::imported()?;
    env.fcra()
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 5 demo records"));

    let stats = env.json(&["summary", "--json"])?;
    assert_eq!(stats["instances"]["total"], 9);

    env.fcra()
        .arg("as-of")
        .assert()
        .success()
        .stdout("2025-10-18\n");
    Ok(())
}
