// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::aggregate;
use crate::models::{Direction, NewTransaction, Transaction};
use crate::session::Session;
use crate::utils::{
    criteria_from_matches, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use anyhow::Result;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("categories", _)) => {
            let data = session.ledger.categories().into_iter().map(|c| vec![c]).collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("accounts", _)) => {
            let data = session.ledger.accounts().into_iter().map(|a| vec![a]).collect();
            println!("{}", pretty_table(&["Account"], data));
        }
        _ => {}
    }
    Ok(())
}

pub fn new_transaction_from(session: &Session, sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let title = sub.get_one::<String>("title").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(raw) => parse_date(raw)?,
        None => session.today,
    };
    let direction = match sub.get_one::<String>("direction").map(String::as_str) {
        Some("income") => Direction::Income,
        _ => Direction::Expense,
    };
    Ok(NewTransaction {
        title: title.to_string(),
        amount,
        date,
        direction,
        category: sub.get_one::<String>("category").unwrap().trim().to_string(),
        account: sub.get_one::<String>("account").unwrap().trim().to_string(),
        currency_code: sub
            .get_one::<String>("currency")
            .unwrap()
            .trim()
            .to_uppercase(),
    })
}

fn add(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let new = new_transaction_from(session, sub)?;
    let added = session.ledger.add(new, &session.currencies)?.clone();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &added)? {
        println!(
            "Recorded {} {} on {} ({} / {})",
            added.title,
            session
                .currencies
                .format_signed(added.amount, &added.currency_code, added.direction),
            added.date,
            added.category,
            added.account
        );
        let totals = aggregate(session.ledger.transactions(), &session.fx);
        println!(
            "Balance now {} across {} transactions",
            session.currencies.format_balance(totals.balance, session.reference()),
            session.ledger.len()
        );
    }
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(session, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.format("%b %-d, %Y").to_string(),
                    t.title.clone(),
                    t.category.clone(),
                    t.account.clone(),
                    session
                        .currencies
                        .format_signed(t.amount, &t.currency_code, t.direction),
                    t.currency_code.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Title", "Category", "Account", "Amount", "CCY"],
                rows,
            )
        );
    }
    Ok(())
}

/// Filtered, newest-first transactions for a `tx list` invocation.
pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let criteria = criteria_from_matches(sub)?;
    let mut rows = session
        .ledger
        .query(&session.pipeline(), &criteria, session.today);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}
