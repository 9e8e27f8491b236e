// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::format_percentage;
use crate::portfolio::{AssetSort, cost_basis, portfolio_value, rank};
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("holdings", sub)) => holdings(session, sub)?,
        Some(("allocation", sub)) => allocation(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn sort_key(sub: &clap::ArgMatches) -> Result<AssetSort> {
    match sub.get_one::<String>("sort") {
        Some(raw) => raw.parse(),
        None => Ok(AssetSort::default()),
    }
}

fn holdings(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let ranked = rank(&session.holdings, sort_key(sub)?, &session.fx);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ranked)? {
        return Ok(());
    }
    let usd = |d| session.currencies.format(d, "USD");
    let rows = ranked
        .iter()
        .map(|h| {
            vec![
                h.ticker.clone(),
                h.name.clone(),
                format!("{}%", h.allocation),
                h.shares.to_string(),
                usd(h.avg_price),
                usd(h.current_price),
                usd(h.value),
                format_percentage(h.return_pct),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Ticker", "Name", "Alloc", "Shares", "Avg Price", "Price", "Value", "Return"],
            rows,
        )
    );
    let value = portfolio_value(&session.holdings);
    let cost = cost_basis(&session.holdings);
    println!(
        "Total {} (cost {}, {})",
        usd(value),
        usd(cost),
        session.currencies.format_balance(value - cost, "USD")
    );
    Ok(())
}

fn allocation(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let ranked = rank(&session.allocation, sort_key(sub)?, &session.fx);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ranked)? {
        return Ok(());
    }
    let rows = ranked
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                format!("{}%", a.allocation),
                session.currencies.format(a.value, &a.currency_code),
                format_percentage(a.change_pct),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Asset", "Alloc", "Value", "Change"], rows)
    );
    Ok(())
}
