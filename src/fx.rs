// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Static reference-currency estimator. Rates are "1 unit of code = rate reference units".
/// Codes without a rate are treated as already reference-denominated.
#[derive(Debug, Clone)]
pub struct ConversionEstimator {
    reference: String,
    rates: BTreeMap<String, Decimal>,
}

impl ConversionEstimator {
    pub fn new(reference: &str, rates: BTreeMap<String, Decimal>) -> Self {
        Self {
            reference: reference.to_string(),
            rates,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn rates(&self) -> &BTreeMap<String, Decimal> {
        &self.rates
    }

    pub fn rate(&self, code: &str) -> Decimal {
        self.rates.get(code).copied().unwrap_or(Decimal::ONE)
    }

    /// Saturates at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
    pub fn to_reference(&self, amount: Decimal, code: &str) -> Decimal {
        amount.saturating_mul(self.rate(code))
    }

    /// Convert between two arbitrary codes through the reference hub.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        if from == to {
            return amount;
        }
        let hub = self.to_reference(amount, from);
        let r = self.rate(to);
        if r.is_zero() {
            return hub;
        }
        hub.checked_div(r).unwrap_or(if hub.is_sign_negative() == r.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
    }

    /// Re-express every rate in units of `reference`. A reference without a
    /// usable rate leaves the table untouched.
    pub fn rebased(mut self, reference: &str) -> Self {
        let r = self.rate(reference);
        if !r.is_zero() && r != Decimal::ONE {
            for rate in self.rates.values_mut() {
                *rate /= r;
            }
        }
        self.reference = reference.to_string();
        self
    }

    /// Overlay extra rates on top of the current table.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, Decimal>) -> Self {
        for (code, rate) in overrides {
            self.rates.insert(code.to_uppercase(), *rate);
        }
        self
    }
}

impl Default for ConversionEstimator {
    fn default() -> Self {
        let rates = [
            ("USD", Decimal::ONE),
            ("EUR", Decimal::new(108, 2)),
            ("GBP", Decimal::new(127, 2)),
            ("JPY", Decimal::new(67, 4)),
            ("BTC", Decimal::from(65000)),
            ("ETH", Decimal::from(3500)),
            ("SOL", Decimal::from(150)),
            ("USDT", Decimal::ONE),
        ]
        .into_iter()
        .map(|(c, r)| (c.to_string(), r))
        .collect();
        Self::new("USD", rates)
    }
}
