// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx::ConversionEstimator;
use crate::models::{AllocationAsset, Holding};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetSort {
    #[default]
    Allocation,
    Value,
    /// Return for holdings, period change for allocation assets.
    Performance,
}

impl FromStr for AssetSort {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allocation" => Ok(AssetSort::Allocation),
            "value" => Ok(AssetSort::Value),
            "return" | "change" | "performance" => Ok(AssetSort::Performance),
            other => Err(anyhow::anyhow!(
                "Invalid sort '{}', expected allocation|value|return",
                other
            )),
        }
    }
}

pub trait Ranked {
    fn metric(&self, by: AssetSort, fx: &ConversionEstimator) -> Decimal;
}

impl Ranked for Holding {
    fn metric(&self, by: AssetSort, _fx: &ConversionEstimator) -> Decimal {
        match by {
            AssetSort::Allocation => self.allocation,
            AssetSort::Value => self.value,
            AssetSort::Performance => self.return_pct,
        }
    }
}

impl Ranked for AllocationAsset {
    fn metric(&self, by: AssetSort, fx: &ConversionEstimator) -> Decimal {
        match by {
            AssetSort::Allocation => self.allocation,
            AssetSort::Value => fx.to_reference(self.value, &self.currency_code),
            AssetSort::Performance => self.change_pct,
        }
    }
}

/// Highest first; ties keep input order.
pub fn rank<T: Ranked + Clone>(items: &[T], by: AssetSort, fx: &ConversionEstimator) -> Vec<T> {
    let mut out = items.to_vec();
    out.sort_by(|a, b| b.metric(by, fx).cmp(&a.metric(by, fx)));
    out
}

pub fn portfolio_value(holdings: &[Holding]) -> Decimal {
    holdings.iter().map(|h| h.value).sum()
}

pub fn cost_basis(holdings: &[Holding]) -> Decimal {
    holdings.iter().map(|h| h.shares * h.avg_price).sum()
}
