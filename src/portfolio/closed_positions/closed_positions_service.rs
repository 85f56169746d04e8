//! Detection and aggregation of fully-closed positions.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::constants::{DECIMAL_PRECISION, SHARE_EPSILON};
use crate::portfolio::closed_positions::ClosedPositionSummary;
use crate::portfolio::holdings::Position;
use crate::transactions::Transaction;

#[derive(Default)]
struct SymbolTotals {
    bought_quantity: Decimal,
    sold_quantity: Decimal,
    bought_amount: Decimal,
    sold_amount: Decimal,
}

/// Scans the full transaction log, groups by symbol, and reports every
/// symbol that has been fully closed out: something was sold, and either
/// the current holding is zero or the lifetime bought and sold quantities
/// net out within [`SHARE_EPSILON`].
///
/// The aggregates are lifetime totals - a ticker traded, closed, and
/// traded again contributes every episode to one summary. A symbol
/// re-opened and currently holding shares is excluded (still open).
///
/// Sorted by realized P&L descending; equal P&L falls back to symbol
/// order so the report is deterministic.
pub fn aggregate_closed_positions(
    transactions: &[Transaction],
    positions_by_symbol: &HashMap<String, Position>,
) -> Vec<ClosedPositionSummary> {
    let epsilon = Decimal::from_str(SHARE_EPSILON).unwrap_or_else(|_| Decimal::new(1, 4));

    let mut by_symbol: BTreeMap<String, SymbolTotals> = BTreeMap::new();
    for txn in transactions {
        let totals = by_symbol.entry(txn.symbol.clone()).or_default();
        if txn.is_buy() {
            totals.bought_quantity += txn.quantity;
            totals.bought_amount += txn.amount();
        } else {
            totals.sold_quantity += txn.quantity;
            totals.sold_amount += txn.amount();
        }
    }

    let mut summaries: Vec<ClosedPositionSummary> = by_symbol
        .into_iter()
        .filter_map(|(symbol, totals)| {
            if totals.sold_quantity.is_zero() {
                return None;
            }

            let current_shares = positions_by_symbol
                .get(&symbol)
                .map(|position| position.quantity)
                .unwrap_or(totals.bought_quantity - totals.sold_quantity);
            let net_quantity = (totals.bought_quantity - totals.sold_quantity).abs();
            if !current_shares.is_zero() && net_quantity >= epsilon {
                return None;
            }

            let avg_buy_price = if totals.bought_quantity > Decimal::ZERO {
                totals.bought_amount / totals.bought_quantity
            } else {
                Decimal::ZERO
            };
            let avg_sell_price = totals.sold_amount / totals.sold_quantity;
            let realized_pnl = totals.sold_amount - totals.bought_amount;
            let pnl_percent = if totals.bought_amount > Decimal::ZERO {
                (realized_pnl / totals.bought_amount * Decimal::ONE_HUNDRED)
                    .round_dp(DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            };

            let category = positions_by_symbol
                .get(&symbol)
                .and_then(|position| position.category.clone());

            Some(ClosedPositionSummary {
                symbol,
                category,
                total_shares_bought: totals.bought_quantity,
                total_shares_sold: totals.sold_quantity,
                avg_buy_price,
                avg_sell_price,
                total_bought_amount: totals.bought_amount,
                total_sold_amount: totals.sold_amount,
                realized_pnl,
                pnl_percent,
            })
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.realized_pnl
            .cmp(&a.realized_pnl)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    summaries
}
