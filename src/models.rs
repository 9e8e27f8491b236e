// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    Fiat,
    Crypto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub kind: CurrencyKind,
}

impl Currency {
    pub fn new(code: &str, name: &str, symbol: &str, kind: CurrencyKind) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal, // always > 0, in the transaction's own currency
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub direction: Direction,
    pub category: String,
    pub account: String,
    #[serde(rename = "currency", default = "default_currency")]
    pub currency_code: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Input of the add-transaction flow. Everything but the id, unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub direction: Direction,
    pub category: String,
    pub account: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl DirectionFilter {
    pub fn matches(self, direction: Direction) -> bool {
        match self {
            DirectionFilter::All => true,
            DirectionFilter::Income => direction == Direction::Income,
            DirectionFilter::Expense => direction == Direction::Expense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Fiat,
    Crypto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    ThisWeek,
    ThisMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub direction: DirectionFilter,
    pub category: Option<String>,
    pub account: Option<String>,
    pub currency_code: Option<String>,
    pub currency_kind: KindFilter,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AggregateTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub allocation: Decimal,
    pub shares: Decimal,
    pub avg_price: Decimal,
    pub current_price: Decimal,
    pub value: Decimal,
    pub return_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationAsset {
    pub id: String,
    pub name: String,
    pub allocation: Decimal,
    pub value: Decimal, // in currency_code
    pub change_value: Decimal,
    pub change_pct: Decimal,
    pub currency_code: String,
}
