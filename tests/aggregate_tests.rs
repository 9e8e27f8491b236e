// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::aggregate::aggregate;
use finboard::fixtures::sample_transactions;
use finboard::fx::ConversionEstimator;
use finboard::models::{AggregateTotals, Direction, Transaction};
use rust_decimal::Decimal;

fn tx(amount: Decimal, direction: Direction, ccy: &str) -> Transaction {
    Transaction {
        id: format!("{}-{}", ccy, amount),
        title: "x".into(),
        amount,
        date: NaiveDate::from_ymd_opt(2023, 8, 15).unwrap(),
        direction,
        category: "c".into(),
        account: "a".into(),
        currency_code: ccy.into(),
    }
}

#[test]
fn empty_is_all_zero() {
    let fx = ConversionEstimator::default();
    assert_eq!(aggregate(&[], &fx), AggregateTotals::default());
    let t = aggregate(&[], &fx);
    assert!(t.total_income.is_zero() && t.total_expense.is_zero() && t.balance.is_zero());
}

#[test]
fn income_minus_expense_scenario() {
    let fx = ConversionEstimator::default();
    let txs = vec![
        tx(Decimal::from(5000), Direction::Income, "USD"),
        tx(Decimal::from(1800), Direction::Expense, "USD"),
    ];
    let t = aggregate(&txs, &fx);
    assert_eq!(t.total_income, Decimal::from(5000));
    assert_eq!(t.total_expense, Decimal::from(1800));
    assert_eq!(t.balance, Decimal::from(3200));
}

#[test]
fn mixed_currencies_convert_to_reference() {
    let fx = ConversionEstimator::default();
    let txs = vec![
        tx(Decimal::ONE, Direction::Income, "BTC"),
        tx(Decimal::from(100), Direction::Expense, "EUR"),
        tx(Decimal::from(7), Direction::Expense, "XYZ"),
    ];
    let t = aggregate(&txs, &fx);
    assert_eq!(t.total_income, Decimal::from(65000));
    assert_eq!(t.total_expense, Decimal::from(115));
    assert_eq!(t.balance, Decimal::from(64885));
}

#[test]
fn sample_set_totals() {
    let fx = ConversionEstimator::default();
    let txs = sample_transactions();
    let t = aggregate(&txs, &fx);
    assert_eq!(t.total_income, Decimal::from(7570));
    assert_eq!(t.total_expense, Decimal::from(4080));
    assert_eq!(t.balance, t.total_income - t.total_expense);
    assert_eq!(format!("{:.2}", t.balance), "3490.00");
}

#[test]
fn oversized_amounts_saturate_instead_of_panicking() {
    let fx = ConversionEstimator::default();
    let huge = Decimal::from_scientific("1e25").unwrap();
    let txs = vec![
        tx(huge, Direction::Income, "BTC"),
        tx(huge, Direction::Income, "ETH"),
        tx(Decimal::from(100), Direction::Expense, "USD"),
    ];
    let t = aggregate(&txs, &fx);
    assert_eq!(t.total_income, Decimal::MAX);
    assert_eq!(t.total_expense, Decimal::from(100));
    assert_eq!(t.balance, Decimal::MAX - Decimal::from(100));

    let spent = aggregate(&[tx(huge, Direction::Expense, "BTC")], &fx);
    assert_eq!(spent.balance, -Decimal::MAX);
}
