// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DateRange, DirectionFilter, FilterCriteria, KindFilter};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

fn non_empty(sub: &clap::ArgMatches, id: &str) -> Option<String> {
    sub.get_one::<String>(id)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Build filter criteria from the options added by `cli::filter_args`.
pub fn criteria_from_matches(sub: &clap::ArgMatches) -> Result<FilterCriteria> {
    let direction = match sub.get_one::<String>("type").map(String::as_str) {
        None | Some("all") => DirectionFilter::All,
        Some("income") => DirectionFilter::Income,
        Some("expense") => DirectionFilter::Expense,
        Some(other) => anyhow::bail!("Invalid type '{}'", other),
    };
    let currency_kind = match sub.get_one::<String>("kind").map(String::as_str) {
        None | Some("all") => KindFilter::All,
        Some("fiat") => KindFilter::Fiat,
        Some("crypto") => KindFilter::Crypto,
        Some(other) => anyhow::bail!("Invalid kind '{}'", other),
    };
    let date_range = match sub.get_one::<String>("range").map(String::as_str) {
        None | Some("all") => DateRange::All,
        Some("this-week") => DateRange::ThisWeek,
        Some("this-month") => DateRange::ThisMonth,
        Some(other) => anyhow::bail!("Invalid range '{}'", other),
    };
    Ok(FilterCriteria {
        search_text: sub
            .get_one::<String>("search")
            .cloned()
            .unwrap_or_default(),
        direction,
        category: non_empty(sub, "category"),
        account: non_empty(sub, "account"),
        currency_code: non_empty(sub, "currency").map(|c| c.to_uppercase()),
        currency_kind,
        date_range,
    })
}
