//! Holding domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::calculate_cost_basis;
use crate::transactions::Transaction;

/// A tracked holding for one symbol, derived entirely from its transaction
/// log. `average_cost * quantity` always equals the replayed cost basis;
/// no aggregate here is ever set independently of the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub quantity: Decimal,
    /// Moving weighted-average cost per share. Unchanged by sells.
    pub average_cost: Decimal,
    /// Total amount paid for the shares currently held.
    pub total_cost_basis: Decimal,
    /// Gain locked in by sells, against the average cost at each sale.
    pub realized_gain: Decimal,
    /// Lifetime capital deployed (sum of all buy amounts).
    pub total_buy_amount: Decimal,
    /// Lifetime sale proceeds (sum of all sell amounts).
    pub total_sell_amount: Decimal,
    pub category: Option<String>,
    /// Trade date of the earliest recorded transaction.
    pub inception_date: Option<DateTime<Utc>>,
    pub transactions: Vec<Transaction>,
}

impl Position {
    /// Builds a position by replaying a symbol's transaction log.
    pub fn from_transactions(
        symbol: &str,
        transactions: Vec<Transaction>,
        category: Option<String>,
    ) -> Self {
        let cost_basis = calculate_cost_basis(&transactions);
        let inception_date = transactions.iter().map(|txn| txn.transaction_date).min();
        Position {
            symbol: symbol.to_string(),
            quantity: cost_basis.quantity,
            average_cost: cost_basis.average_cost,
            total_cost_basis: cost_basis.total_cost_basis,
            realized_gain: cost_basis.realized_gain,
            total_buy_amount: cost_basis.total_buy_amount,
            total_sell_amount: cost_basis.total_sell_amount,
            category,
            inception_date,
            transactions,
        }
    }

    /// A position is closed once every held share has been sold. The
    /// record is kept for historical reporting rather than deleted.
    pub fn is_closed(&self) -> bool {
        self.quantity.is_zero() && !self.transactions.is_empty()
    }
}
