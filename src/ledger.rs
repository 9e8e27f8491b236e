// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::CurrencyTable;
use crate::filter::TransactionFilter;
use crate::models::{FilterCriteria, NewTransaction, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Please provide a title for the transaction")]
    EmptyTitle,
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),
    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),
}

/// Session-owned transaction list. Records are appended, never edited.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn replace(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    /// Validate and append one record.
    pub fn add(
        &mut self,
        new: NewTransaction,
        currencies: &CurrencyTable,
    ) -> Result<&Transaction, LedgerError> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(LedgerError::EmptyTitle);
        }
        if new.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(new.amount));
        }
        if !currencies.contains(&new.currency_code) {
            return Err(LedgerError::UnknownCurrency(new.currency_code));
        }
        let tx = Transaction {
            id: self.next_id(),
            title: title.to_string(),
            amount: new.amount,
            date: new.date,
            direction: new.direction,
            category: new.category,
            account: new.account,
            currency_code: new.currency_code,
        };
        tracing::info!(id = %tx.id, title = %tx.title, "transaction added");
        self.transactions.push(tx);
        // just pushed
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn categories(&self) -> Vec<String> {
        distinct(self.transactions.iter().map(|t| t.category.as_str()))
    }

    pub fn accounts(&self) -> Vec<String> {
        distinct(self.transactions.iter().map(|t| t.account.as_str()))
    }

    pub fn query(
        &self,
        pipeline: &TransactionFilter<'_>,
        criteria: &FilterCriteria,
        reference_now: NaiveDate,
    ) -> Vec<Transaction> {
        pipeline.apply(&self.transactions, criteria, reference_now)
    }

    fn next_id(&self) -> String {
        let used: HashSet<&str> = self.transactions.iter().map(|t| t.id.as_str()).collect();
        let mut n = self.transactions.len() + 1;
        loop {
            let id = format!("t{}", n);
            if !used.contains(id.as_str()) {
                return id;
            }
            n += 1;
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in values {
        if !out.iter().any(|e| e == v) {
            out.push(v.to_string());
        }
    }
    out
}
