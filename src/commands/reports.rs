// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::aggregate;
use crate::models::AggregateTotals;
use crate::session::Session;
use crate::utils::{criteria_from_matches, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(session, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub reference: String,
    pub count: usize,
    #[serde(flatten)]
    pub totals: AggregateTotals,
}

pub fn summarize(session: &Session, sub: &clap::ArgMatches) -> Result<Summary> {
    let criteria = criteria_from_matches(sub)?;
    let filtered = session
        .ledger
        .query(&session.pipeline(), &criteria, session.today);
    Ok(Summary {
        reference: session.reference().to_string(),
        count: filtered.len(),
        totals: aggregate(&filtered, &session.fx),
    })
}

fn summary(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let s = summarize(session, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let fmt = |d| session.currencies.format(d, &s.reference);
        let data = vec![
            vec!["Transactions".to_string(), s.count.to_string()],
            vec!["Total Income".to_string(), fmt(s.totals.total_income)],
            vec!["Total Expenses".to_string(), fmt(s.totals.total_expense)],
            vec![
                "Balance".to_string(),
                session
                    .currencies
                    .format_balance(s.totals.balance, &s.reference),
            ],
        ];
        println!(
            "{}",
            pretty_table(&["", &format!("Amount ({})", s.reference)], data)
        );
    }
    Ok(())
}
