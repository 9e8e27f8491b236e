// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Currency registry and display formatting.
//!
//! Formatting never fails: a code missing from the registry renders as the
//! bare number, fiat renders with exactly two fractional digits and crypto
//! keeps between two and eight.

use crate::models::{Currency, CurrencyKind, Direction};
use rust_decimal::{Decimal, RoundingStrategy};

const FIAT_DP: u32 = 2;
const CRYPTO_MIN_DP: u32 = 2;
const CRYPTO_MAX_DP: u32 = 8;

#[derive(Debug, Clone)]
pub struct CurrencyTable {
    currencies: Vec<Currency>,
}

impl CurrencyTable {
    /// Build a registry from an explicit list. Later duplicates of a code are ignored.
    pub fn new(currencies: Vec<Currency>) -> Self {
        let mut out: Vec<Currency> = Vec::with_capacity(currencies.len());
        for c in currencies {
            if out.iter().any(|e| e.code == c.code) {
                tracing::warn!(code = %c.code, "duplicate currency ignored");
            } else {
                out.push(c);
            }
        }
        Self { currencies: out }
    }

    pub fn lookup(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter()
    }

    pub fn by_kind(&self, kind: CurrencyKind) -> impl Iterator<Item = &Currency> {
        self.currencies.iter().filter(move |c| c.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Render `amount` in `code`.
    pub fn format(&self, amount: Decimal, code: &str) -> String {
        let Some(currency) = self.lookup(code) else {
            return amount.normalize().to_string();
        };
        let min_dp = match currency.kind {
            CurrencyKind::Fiat => FIAT_DP,
            CurrencyKind::Crypto => CRYPTO_MIN_DP,
        };
        let rounded = amount
            .round_dp_with_strategy(max_dp(currency.kind), RoundingStrategy::MidpointAwayFromZero);
        let number = render_number(rounded.abs(), min_dp);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let sep = match currency.kind {
            CurrencyKind::Fiat if ends_alphabetic(&currency.symbol) => " ",
            _ => "",
        };
        format!("{}{}{}{}", sign, currency.symbol, sep, number)
    }

    /// List-row rendering: `+` for income, `-` for expense, then the magnitude.
    pub fn format_signed(&self, amount: Decimal, code: &str, direction: Direction) -> String {
        let sign = match direction {
            Direction::Income => "+",
            Direction::Expense => "-",
        };
        format!("{}{}", sign, self.format(amount.abs(), code))
    }

    /// Balance rendering: sign follows the displayed (rounded) value, zero counts as positive.
    pub fn format_balance(&self, amount: Decimal, code: &str) -> String {
        let shown = match self.lookup(code) {
            Some(c) => {
                amount.round_dp_with_strategy(max_dp(c.kind), RoundingStrategy::MidpointAwayFromZero)
            }
            None => amount,
        };
        let sign = if shown.is_sign_negative() && !shown.is_zero() {
            "-"
        } else {
            "+"
        };
        format!("{}{}", sign, self.format(amount.abs(), code))
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        use CurrencyKind::{Crypto, Fiat};
        Self::new(vec![
            Currency::new("USD", "US Dollar", "$", Fiat),
            Currency::new("EUR", "Euro", "€", Fiat),
            Currency::new("GBP", "British Pound", "£", Fiat),
            Currency::new("JPY", "Japanese Yen", "¥", Fiat),
            Currency::new("CHF", "Swiss Franc", "Fr", Fiat),
            Currency::new("CAD", "Canadian Dollar", "C$", Fiat),
            Currency::new("AUD", "Australian Dollar", "A$", Fiat),
            Currency::new("CNY", "Chinese Yuan", "¥", Fiat),
            Currency::new("BTC", "Bitcoin", "₿", Crypto),
            Currency::new("ETH", "Ethereum", "Ξ", Crypto),
            Currency::new("USDT", "Tether", "₮", Crypto),
            Currency::new("BNB", "Binance Coin", "BNB", Crypto),
            Currency::new("SOL", "Solana", "SOL", Crypto),
            Currency::new("ADA", "Cardano", "ADA", Crypto),
            Currency::new("XRP", "XRP", "XRP", Crypto),
            Currency::new("DOGE", "Dogecoin", "Ð", Crypto),
        ])
    }
}

/// `+5.20%`, `-4.80%`, `0.00%`.
pub fn format_percentage(pct: Decimal) -> String {
    let rounded = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded > Decimal::ZERO { "+" } else { "" };
    format!("{}{:.2}%", sign, rounded)
}

fn max_dp(kind: CurrencyKind) -> u32 {
    match kind {
        CurrencyKind::Fiat => FIAT_DP,
        CurrencyKind::Crypto => CRYPTO_MAX_DP,
    }
}

fn ends_alphabetic(symbol: &str) -> bool {
    symbol.chars().last().is_some_and(|c| c.is_alphabetic())
}

// Non-negative value already rounded to its maximum scale.
fn render_number(value: Decimal, min_dp: u32) -> String {
    let raw = value.to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, f),
        None => (raw.as_str(), ""),
    };
    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_dp as usize {
        frac.push('0');
    }
    let grouped = group_thousands(int_part);
    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn fiat_uses_grouping_and_two_digits() {
        let t = CurrencyTable::default();
        assert_eq!(t.format(Decimal::from(1800), "USD"), "$1,800.00");
        assert_eq!(t.format(d("1234567.891"), "EUR"), "€1,234,567.89");
        assert_eq!(t.format(d("0.005"), "GBP"), "£0.01");
        assert_eq!(t.format(d("-12.5"), "USD"), "-$12.50");
        assert_eq!(t.format(d("12"), "CHF"), "Fr 12.00");
        assert_eq!(t.format(d("999.999"), "CAD"), "C$1,000.00");
    }

    #[test]
    fn crypto_keeps_two_to_eight_digits() {
        let t = CurrencyTable::default();
        assert_eq!(t.format(d("0.025"), "BTC"), "₿0.025");
        assert_eq!(t.format(d("1.5"), "ETH"), "Ξ1.50");
        assert_eq!(t.format(d("12345.123456789"), "BTC"), "₿12,345.12345679");
        assert_eq!(t.format(d("2"), "SOL"), "SOL2.00");
        assert_eq!(t.format(d("0.00000001"), "BTC"), "₿0.00000001");
    }

    #[test]
    fn crypto_numeric_portion_round_trips() {
        let t = CurrencyTable::default();
        let s = t.format(d("0.025"), "BTC");
        let numeric = s.trim_start_matches('₿').replace(',', "");
        assert_eq!(d(&numeric), d("0.025"));
    }

    #[test]
    fn unknown_code_is_bare_number() {
        let t = CurrencyTable::default();
        assert_eq!(t.format(Decimal::from(100), "XYZ"), "100");
        assert_eq!(t.format(d("1234.50"), "ZZZ"), "1234.5");
    }

    #[test]
    fn signed_and_balance_variants() {
        let t = CurrencyTable::default();
        assert_eq!(
            t.format_signed(Decimal::from(5000), "USD", Direction::Income),
            "+$5,000.00"
        );
        assert_eq!(
            t.format_signed(Decimal::from(1800), "USD", Direction::Expense),
            "-$1,800.00"
        );
        assert_eq!(t.format_balance(Decimal::from(-200), "USD"), "-$200.00");
        assert_eq!(t.format_balance(Decimal::ZERO, "USD"), "+$0.00");
    }

    #[test]
    fn balance_rounding_to_zero_counts_as_positive() {
        let t = CurrencyTable::default();
        assert_eq!(t.format_balance(d("-0.001"), "USD"), "+$0.00");
        assert_eq!(t.format(d("-0.001"), "USD"), "$0.00");
        assert_eq!(t.format_balance(d("-0.000000004"), "BTC"), "+₿0.00");
        assert_eq!(t.format_balance(d("-0.005"), "USD"), "-$0.01");
    }

    #[test]
    fn percentage_has_explicit_plus() {
        assert_eq!(format_percentage(d("5.2")), "+5.20%");
        assert_eq!(format_percentage(d("-4.8")), "-4.80%");
        assert_eq!(format_percentage(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn duplicate_codes_keep_first() {
        let t = CurrencyTable::new(vec![
            Currency::new("USD", "US Dollar", "$", CurrencyKind::Fiat),
            Currency::new("USD", "Other", "US$", CurrencyKind::Fiat),
        ]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.lookup("USD").unwrap().symbol, "$");
    }
}
