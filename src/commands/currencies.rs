// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CurrencyKind;
use crate::session::Session;
use crate::utils::{parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let selected: Vec<_> = match sub.get_one::<String>("kind").map(String::as_str) {
                Some("fiat") => session.currencies.by_kind(CurrencyKind::Fiat).collect(),
                Some("crypto") => session.currencies.by_kind(CurrencyKind::Crypto).collect(),
                _ => session.currencies.iter().collect(),
            };
            let data = selected
                .into_iter()
                .map(|c| {
                    vec![
                        c.code.clone(),
                        c.name.clone(),
                        c.symbol.clone(),
                        format!("{:?}", c.kind).to_lowercase(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Code", "Name", "Symbol", "Kind"], data)
            );
        }
        Some(("format", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let code = sub.get_one::<String>("code").unwrap().trim().to_uppercase();
            println!("{}", session.currencies.format(amount, &code));
        }
        _ => {}
    }
    Ok(())
}
