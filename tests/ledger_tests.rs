// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::currency::CurrencyTable;
use finboard::filter::{TransactionFilter, WeekStart};
use finboard::fixtures::sample_transactions;
use finboard::ledger::{Ledger, LedgerError};
use finboard::models::{Direction, FilterCriteria, NewTransaction};
use rust_decimal::Decimal;

fn draft() -> NewTransaction {
    NewTransaction {
        title: "  Coffee Beans ".into(),
        amount: Decimal::new(1850, 2),
        date: NaiveDate::from_ymd_opt(2023, 8, 17).unwrap(),
        direction: Direction::Expense,
        category: "Food".into(),
        account: "Credit Card".into(),
        currency_code: "USD".into(),
    }
}

#[test]
fn add_assigns_next_id_and_trims_title() {
    let table = CurrencyTable::default();
    let mut ledger = Ledger::new(sample_transactions());
    let added = ledger.add(draft(), &table).unwrap().clone();
    assert_eq!(added.id, "t16");
    assert_eq!(added.title, "Coffee Beans");
    assert_eq!(ledger.len(), 16);

    let pipeline = TransactionFilter::new(&table, WeekStart::Sunday);
    let newest = ledger.query(
        &pipeline,
        &FilterCriteria::default(),
        NaiveDate::from_ymd_opt(2023, 8, 31).unwrap(),
    );
    assert_eq!(newest[0].id, "t16");
}

#[test]
fn add_skips_ids_already_taken() {
    let table = CurrencyTable::default();
    let mut ledger = Ledger::default();
    let mut first = draft();
    first.title = "first".into();
    ledger.add(first, &table).unwrap();
    let mut taken = ledger.transactions().to_vec();
    taken[0].id = "t2".into();
    ledger.replace(taken);
    let second = ledger.add(draft(), &table).unwrap();
    assert_eq!(second.id, "t3");
}

#[test]
fn add_rejects_invalid_input() {
    let table = CurrencyTable::default();
    let mut ledger = Ledger::default();

    let mut blank = draft();
    blank.title = "   ".into();
    assert_eq!(ledger.add(blank, &table).unwrap_err(), LedgerError::EmptyTitle);

    let mut zero = draft();
    zero.amount = Decimal::ZERO;
    assert_eq!(
        ledger.add(zero, &table).unwrap_err(),
        LedgerError::NonPositiveAmount(Decimal::ZERO)
    );

    let mut negative = draft();
    negative.amount = Decimal::from(-5);
    assert!(matches!(
        ledger.add(negative, &table),
        Err(LedgerError::NonPositiveAmount(_))
    ));

    let mut unknown = draft();
    unknown.currency_code = "XYZ".into();
    assert_eq!(
        ledger.add(unknown, &table).unwrap_err(),
        LedgerError::UnknownCurrency("XYZ".into())
    );

    assert!(ledger.is_empty());
}

#[test]
fn distinct_categories_and_accounts_in_first_seen_order() {
    let ledger = Ledger::new(sample_transactions());
    assert_eq!(
        ledger.categories(),
        vec![
            "Income",
            "Housing",
            "Investment",
            "Food",
            "Utilities",
            "Transportation",
            "Education",
            "Health",
            "Entertainment",
        ]
    );
    assert_eq!(
        ledger.accounts(),
        vec!["Checking Account", "Investment Account", "Credit Card"]
    );
}

#[test]
fn replace_swaps_the_whole_list() {
    let mut ledger = Ledger::new(sample_transactions());
    ledger.replace(Vec::new());
    assert!(ledger.is_empty());
    assert!(ledger.categories().is_empty());
}
