// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::utils::{parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("rates", _)) => list_rates(session),
        Some(("convert", sub)) => convert_amount(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn list_rates(session: &Session) {
    let reference = session.reference();
    let data = session
        .fx
        .rates()
        .iter()
        .map(|(code, rate)| vec![code.clone(), reference.to_string(), rate.normalize().to_string()])
        .collect();
    println!("{}", pretty_table(&["Code", "Reference", "Rate"], data));
}

fn convert_amount(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let from = sub.get_one::<String>("from").unwrap().trim().to_uppercase();
    let to = sub
        .get_one::<String>("to")
        .map(|s| s.trim().to_uppercase())
        .unwrap_or_else(|| session.reference().to_string());
    let res = session.fx.convert(amount, &from, &to);
    println!(
        "{} -> {} (estimate)",
        session.currencies.format(amount, &from),
        session.currencies.format(res, &to)
    );
    Ok(())
}
