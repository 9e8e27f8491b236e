// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Direction, Transaction};
use crate::session::Session;
use crate::utils::criteria_from_matches;
use anyhow::{Context, Result};

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(session, sub),
        _ => Ok(()),
    }
}

fn export_transactions(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        anyhow::bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let criteria = criteria_from_matches(sub)?;
    let rows = session
        .ledger
        .query(&session.pipeline(), &criteria, session.today);

    match fmt.as_str() {
        "csv" => write_csv(out, &rows)?,
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
    }
    tracing::info!(count = rows.len(), %fmt, "exported transactions");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}

fn write_csv(out: &str, rows: &[Transaction]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(out).with_context(|| format!("Failed to create {}", out))?;
    wtr.write_record([
        "id", "date", "title", "type", "category", "account", "amount", "currency",
    ])?;
    for t in rows {
        let direction = match t.direction {
            Direction::Income => "income",
            Direction::Expense => "expense",
        };
        let date = t.date.to_string();
        let amount = t.amount.to_string();
        wtr.write_record([
            t.id.as_str(),
            date.as_str(),
            t.title.as_str(),
            direction,
            t.category.as_str(),
            t.account.as_str(),
            amount.as_str(),
            t.currency_code.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
