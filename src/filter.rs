// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Transaction filter pipeline.
//!
//! A transaction is kept when every criterion holds; unset criteria always
//! hold. The output is ordered newest first and the sort is stable, so
//! same-day entries keep their input order.

use crate::currency::CurrencyTable;
use crate::models::{CurrencyKind, DateRange, FilterCriteria, KindFilter, Transaction};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// First day of the week containing `today`.
pub fn start_of_week(today: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let from_start = (7 + today.weekday().num_days_from_sunday()
        - week_start.weekday().num_days_from_sunday())
        % 7;
    today - Duration::days(i64::from(from_start))
}

pub fn start_of_month(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
}

/// Inclusive lower bound implied by a date range, `None` for `All`.
pub fn range_start(range: DateRange, today: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
    match range {
        DateRange::All => None,
        DateRange::ThisWeek => Some(start_of_week(today, week_start)),
        DateRange::ThisMonth => Some(start_of_month(today)),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TransactionFilter<'a> {
    currencies: &'a CurrencyTable,
    week_start: WeekStart,
}

impl<'a> TransactionFilter<'a> {
    pub fn new(currencies: &'a CurrencyTable, week_start: WeekStart) -> Self {
        Self {
            currencies,
            week_start,
        }
    }

    pub fn apply(
        &self,
        transactions: &[Transaction],
        criteria: &FilterCriteria,
        reference_now: NaiveDate,
    ) -> Vec<Transaction> {
        let needle = criteria.search_text.to_lowercase();
        let since = range_start(criteria.date_range, reference_now, self.week_start);
        let mut out: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t, criteria, &needle, since))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        tracing::debug!(
            total = transactions.len(),
            kept = out.len(),
            ?since,
            "filtered transactions"
        );
        out
    }

    fn matches(
        &self,
        t: &Transaction,
        criteria: &FilterCriteria,
        needle: &str,
        since: Option<NaiveDate>,
    ) -> bool {
        matches_search(t, needle)
            && criteria.direction.matches(t.direction)
            && criteria.category.as_ref().is_none_or(|c| *c == t.category)
            && criteria.account.as_ref().is_none_or(|a| *a == t.account)
            && criteria
                .currency_code
                .as_ref()
                .is_none_or(|c| *c == t.currency_code)
            && self.matches_kind(t, criteria.currency_kind)
            && since.is_none_or(|d| t.date >= d)
    }

    fn matches_kind(&self, t: &Transaction, kind: KindFilter) -> bool {
        let wanted = match kind {
            KindFilter::All => return true,
            KindFilter::Fiat => CurrencyKind::Fiat,
            KindFilter::Crypto => CurrencyKind::Crypto,
        };
        self.currencies
            .lookup(&t.currency_code)
            .is_some_and(|c| c.kind == wanted)
    }
}

// `needle` is already lowercased.
fn matches_search(t: &Transaction, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&t.title, &t.category, &t.account, &t.currency_code]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
