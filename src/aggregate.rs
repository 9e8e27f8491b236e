// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx::ConversionEstimator;
use crate::models::{AggregateTotals, Direction, Transaction};
use rust_decimal::Decimal;

/// Income, expense and balance of `transactions`, all in the estimator's reference currency.
/// Sums saturate at the `Decimal` bounds.
pub fn aggregate(transactions: &[Transaction], fx: &ConversionEstimator) -> AggregateTotals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in transactions {
        let amt = fx.to_reference(t.amount, &t.currency_code);
        match t.direction {
            Direction::Income => income = income.saturating_add(amt),
            Direction::Expense => expense = expense.saturating_add(amt),
        }
    }
    AggregateTotals {
        total_income: income,
        total_expense: expense,
        balance: income.saturating_sub(expense),
    }
}
