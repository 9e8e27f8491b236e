// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, AppConfig};
use crate::currency::CurrencyTable;
use crate::filter::TransactionFilter;
use crate::fixtures;
use crate::fx::ConversionEstimator;
use crate::ledger::Ledger;
use crate::models::{AllocationAsset, Holding, Transaction};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Everything one dashboard session works over. Lives for a single process.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: AppConfig,
    pub currencies: CurrencyTable,
    pub fx: ConversionEstimator,
    pub ledger: Ledger,
    pub holdings: Vec<Holding>,
    pub allocation: Vec<AllocationAsset>,
    pub today: NaiveDate,
}

impl Session {
    pub fn new(config: AppConfig, transactions: Vec<Transaction>, today: NaiveDate) -> Result<Self> {
        let currencies = config.currency_table();
        config.validate(&currencies)?;
        let fx = config.estimator();
        Ok(Self {
            config,
            currencies,
            fx,
            ledger: Ledger::new(transactions),
            holdings: fixtures::sample_holdings(),
            allocation: fixtures::sample_allocation(),
            today,
        })
    }

    /// Config from `config_path` (or the platform default), transactions from
    /// `data_path` or the bundled sample set.
    pub fn open(config_path: Option<&Path>, data_path: Option<&Path>, today: NaiveDate) -> Result<Self> {
        let config = config::load(config_path)?;
        let transactions = match data_path {
            Some(p) => load_transactions(p)?,
            None => fixtures::sample_transactions(),
        };
        tracing::info!(
            transactions = transactions.len(),
            reference = %config.reference_currency,
            %today,
            "session opened"
        );
        Self::new(config, transactions, today)
    }

    pub fn pipeline(&self) -> TransactionFilter<'_> {
        TransactionFilter::new(&self.currencies, self.config.week_start)
    }

    pub fn reference(&self) -> &str {
        self.fx.reference()
    }
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let txs: Vec<Transaction> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse transactions in {}", path.display()))?;
    let mut seen = HashSet::new();
    for t in &txs {
        if !seen.insert(t.id.as_str()) {
            anyhow::bail!("Duplicate transaction id '{}' in {}", t.id, path.display());
        }
        if t.title.trim().is_empty() {
            anyhow::bail!("Transaction '{}' in {} has an empty title", t.id, path.display());
        }
        if t.amount <= rust_decimal::Decimal::ZERO {
            anyhow::bail!(
                "Transaction '{}' in {} has non-positive amount {}",
                t.id,
                path.display(),
                t.amount
            );
        }
    }
    Ok(txs)
}
