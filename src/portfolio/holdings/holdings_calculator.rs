//! Cost-basis replay over a symbol's transaction log.

use log::warn;
use rust_decimal::Decimal;

use crate::transactions::{sort_by_trade_date, Transaction, TransactionType};

/// Aggregates produced by replaying one symbol's transaction log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostBasis {
    /// Shares currently held.
    pub quantity: Decimal,
    /// Weighted-average cost per held share; zero when nothing is held.
    pub average_cost: Decimal,
    /// Total amount paid for the held shares.
    pub total_cost_basis: Decimal,
    /// Cumulative gain from sells, each against the average cost at the
    /// time of that sale.
    pub realized_gain: Decimal,
    pub total_buy_quantity: Decimal,
    pub total_sell_quantity: Decimal,
    pub total_buy_amount: Decimal,
    pub total_sell_amount: Decimal,
}

/// Replays a transaction log in trade-date order (moving weighted average,
/// not lot tracking) and returns the running share count, average cost,
/// and realized gain.
///
/// A buy adds `quantity * price` to the basis. A sell removes shares at
/// the current average, so the average cost of the remaining shares never
/// moves on a sale. The result is a pure function of the log: adding or
/// removing any transaction requires a full replay, because a sell folds
/// the then-current average into the basis in a way that is not
/// reversible.
///
/// A sell that exceeds the held quantity is clamped to what is available.
/// Order entry rejects such sells before they are recorded; the clamp here
/// keeps a log that bypassed that check from ever producing negative
/// inventory.
pub fn calculate_cost_basis(transactions: &[Transaction]) -> CostBasis {
    let mut sorted = transactions.to_vec();
    sort_by_trade_date(&mut sorted);

    let mut result = CostBasis::default();
    let mut total_shares = Decimal::ZERO;
    let mut total_cost_basis = Decimal::ZERO;

    for txn in &sorted {
        match txn.transaction_type {
            TransactionType::Buy => {
                total_cost_basis += txn.quantity * txn.unit_price;
                total_shares += txn.quantity;
                result.total_buy_quantity += txn.quantity;
                result.total_buy_amount += txn.amount();
            }
            TransactionType::Sell => {
                result.total_sell_quantity += txn.quantity;
                result.total_sell_amount += txn.amount();

                if total_shares <= Decimal::ZERO {
                    warn!(
                        "Sell of {} {} with no shares held; skipped during replay",
                        txn.quantity, txn.symbol
                    );
                    continue;
                }

                let current_avg = total_cost_basis / total_shares;
                let sold = txn.quantity.min(total_shares);
                if sold < txn.quantity {
                    warn!(
                        "Sell of {} {} exceeds held {}; clamped during replay",
                        txn.quantity, txn.symbol, total_shares
                    );
                }
                total_cost_basis -= sold * current_avg;
                total_shares -= sold;
                result.realized_gain += sold * (txn.unit_price - current_avg);
            }
        }
    }

    result.quantity = total_shares;
    if total_shares > Decimal::ZERO {
        result.total_cost_basis = total_cost_basis;
        result.average_cost = total_cost_basis / total_shares;
    }
    result
}
