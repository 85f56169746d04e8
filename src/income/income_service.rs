//! Dividend aggregation.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::income::{Dividend, DividendSummary, SymbolIncome};
use crate::transactions::normalize_symbol;

/// Total dividend income received for one symbol.
pub fn total_for_symbol(dividends: &[Dividend], symbol: &str) -> Decimal {
    let symbol = normalize_symbol(symbol);
    dividends
        .iter()
        .filter(|dividend| dividend.symbol == symbol)
        .map(|dividend| dividend.amount)
        .sum()
}

/// Dividend totals keyed by symbol, for feeding valuation.
pub fn income_by_symbol(dividends: &[Dividend]) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for dividend in dividends {
        *totals.entry(dividend.symbol.clone()).or_insert(Decimal::ZERO) += dividend.amount;
    }
    totals
}

/// Aggregates dividends into a portfolio income summary. The per-symbol
/// breakdown is sorted by amount descending, symbol ascending on ties.
pub fn summarize_income(dividends: &[Dividend]) -> DividendSummary {
    let mut by_symbol: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
    let mut total_amount = Decimal::ZERO;

    for dividend in dividends {
        let entry = by_symbol
            .entry(dividend.symbol.clone())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += dividend.amount;
        entry.1 += 1;
        total_amount += dividend.amount;
    }

    let mut breakdown: Vec<SymbolIncome> = by_symbol
        .into_iter()
        .map(|(symbol, (amount, entry_count))| SymbolIncome {
            symbol,
            amount,
            entry_count,
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    DividendSummary {
        total_amount,
        entry_count: dividends.len(),
        by_symbol: breakdown,
    }
}
