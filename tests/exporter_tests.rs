// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::config::AppConfig;
use finboard::fixtures::sample_transactions;
use finboard::session::Session;
use finboard::{cli, commands::exporter};
use serde_json::json;
use tempfile::tempdir;

fn setup() -> Session {
    let today = NaiveDate::from_ymd_opt(2023, 8, 16).unwrap();
    Session::new(AppConfig::default(), sample_transactions(), today).unwrap()
}

fn run_export(session: &Session, extra: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["finboard", "export", "transactions"];
    argv.extend_from_slice(extra);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(session, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_streams_pretty_json() {
    let session = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &session,
        &["--format", "json", "--out", &out_str, "--search", "rent"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": "t2",
                "title": "Rent Payment",
                "amount": "1800",
                "date": "2023-08-02",
                "type": "expense",
                "category": "Housing",
                "account": "Checking Account",
                "currency": "USD"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_newest_first() {
    let session = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &session,
        &["--format", "CSV", "--out", &out_str, "--type", "income"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "id,date,title,type,category,account,amount,currency"
    );
    assert_eq!(
        lines[1],
        "t12,2023-08-16,Bonus Payment,income,Income,Checking Account,1500,USD"
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn exported_json_loads_back_as_data() {
    let session = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("all.json");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&session, &["--format", "json", "--out", &out_str]).unwrap();

    let loaded = finboard::session::load_transactions(&out_path).unwrap();
    assert_eq!(loaded.len(), 15);
    assert_eq!(loaded[0].id, "t12");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let session = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&session, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}
