// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Sample data the dashboard ships with.

use crate::models::{AllocationAsset, Direction, Holding, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn tx(
    id: &str,
    title: &str,
    amount: i64,
    (y, m, d): (i32, u32, u32),
    direction: Direction,
    category: &str,
    account: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        amount: Decimal::from(amount),
        date: date(y, m, d),
        direction,
        category: category.to_string(),
        account: account.to_string(),
        currency_code: "USD".to_string(),
    }
}

pub fn sample_transactions() -> Vec<Transaction> {
    use Direction::{Expense, Income};
    vec![
        tx("t1", "Salary Deposit", 5000, (2023, 8, 15), Income, "Income", "Checking Account"),
        tx("t2", "Rent Payment", 1800, (2023, 8, 2), Expense, "Housing", "Checking Account"),
        tx("t3", "Stock Dividend", 320, (2023, 8, 10), Income, "Investment", "Investment Account"),
        tx("t4", "Grocery Shopping", 210, (2023, 8, 8), Expense, "Food", "Credit Card"),
        tx("t5", "Freelance Work", 750, (2023, 8, 5), Income, "Income", "Checking Account"),
        tx("t6", "Restaurant Dinner", 120, (2023, 8, 12), Expense, "Food", "Credit Card"),
        tx("t7", "Utilities Bill", 180, (2023, 8, 14), Expense, "Utilities", "Checking Account"),
        tx("t8", "Stock Purchase", 1000, (2023, 8, 6), Expense, "Investment", "Investment Account"),
        tx("t9", "Gasoline", 60, (2023, 8, 9), Expense, "Transportation", "Credit Card"),
        tx("t10", "Online Course", 200, (2023, 8, 7), Expense, "Education", "Credit Card"),
        tx("t11", "Health Insurance", 350, (2023, 8, 1), Expense, "Health", "Checking Account"),
        tx("t12", "Bonus Payment", 1500, (2023, 8, 16), Income, "Income", "Checking Account"),
        tx("t13", "Internet Bill", 80, (2023, 8, 3), Expense, "Utilities", "Credit Card"),
        tx("t14", "Gym Membership", 50, (2023, 8, 5), Expense, "Health", "Credit Card"),
        tx("t15", "Movie Tickets", 30, (2023, 8, 13), Expense, "Entertainment", "Credit Card"),
    ]
}

fn holding(
    id: &str,
    name: &str,
    ticker: &str,
    allocation: i64,
    shares: i64,
    avg_price: i64,
    current_price: Decimal,
    return_pct: Decimal,
) -> Holding {
    let shares = Decimal::from(shares);
    Holding {
        id: id.to_string(),
        name: name.to_string(),
        ticker: ticker.to_string(),
        allocation: Decimal::from(allocation),
        shares,
        avg_price: Decimal::from(avg_price),
        current_price,
        value: shares * current_price,
        return_pct,
    }
}

pub fn sample_holdings() -> Vec<Holding> {
    vec![
        holding("1", "Apple Inc.", "AAPL", 15, 25, 150, Decimal::new(18250, 2), Decimal::new(2167, 2)),
        holding("2", "Microsoft", "MSFT", 12, 18, 220, Decimal::new(29020, 2), Decimal::new(3191, 2)),
        holding("3", "Amazon", "AMZN", 10, 12, 140, Decimal::new(13820, 2), Decimal::new(-129, 2)),
        holding("4", "Vanguard S&P 500 ETF", "VOO", 20, 35, 380, Decimal::new(41520, 2), Decimal::new(926, 2)),
        holding("5", "iShares Core U.S. Agg Bond", "AGG", 15, 75, 110, Decimal::new(10260, 2), Decimal::new(-673, 2)),
        holding("6", "Tesla Inc.", "TSLA", 8, 15, 220, Decimal::new(24640, 2), Decimal::new(1200, 2)),
        holding("7", "SPDR Gold Shares", "GLD", 5, 20, 170, Decimal::new(18230, 2), Decimal::new(724, 2)),
    ]
}

fn asset(
    id: &str,
    name: &str,
    allocation: i64,
    value: Decimal,
    change_value: i64,
    change_pct: Decimal,
    currency_code: &str,
) -> AllocationAsset {
    AllocationAsset {
        id: id.to_string(),
        name: name.to_string(),
        allocation: Decimal::from(allocation),
        value,
        change_value: Decimal::from(change_value),
        change_pct,
        currency_code: currency_code.to_string(),
    }
}

pub fn sample_allocation() -> Vec<AllocationAsset> {
    vec![
        asset("1", "S&P 500 ETF", 25, Decimal::from(25000), 1250, Decimal::new(52, 1), "USD"),
        asset("2", "Government Bonds", 20, Decimal::from(20000), 400, Decimal::new(20, 1), "USD"),
        asset("3", "Real Estate Fund", 15, Decimal::from(15000), -750, Decimal::new(-48, 1), "USD"),
        asset("4", "High-Yield Savings", 10, Decimal::from(10000), 330, Decimal::new(34, 1), "USD"),
        // crypto positions are held in their own units
        asset("5", "Bitcoin", 8, Decimal::new(12307692, 8), 1200, Decimal::new(176, 1), "BTC"),
        asset("6", "Ethereum", 2, Decimal::new(57142857, 8), 240, Decimal::new(136, 1), "ETH"),
        asset("7", "Apple Inc.", 12, Decimal::from(12000), 840, Decimal::new(75, 1), "USD"),
        asset("8", "Microsoft Corp.", 8, Decimal::from(8000), 560, Decimal::new(75, 1), "USD"),
    ]
}
