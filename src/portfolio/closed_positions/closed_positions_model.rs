//! Closed-position reporting records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifetime trading summary for a symbol whose buys and sells net out.
/// Recomputed on demand from the transaction log; never stored or edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedPositionSummary {
    pub symbol: String,
    pub category: Option<String>,
    pub total_shares_bought: Decimal,
    pub total_shares_sold: Decimal,
    pub avg_buy_price: Decimal,
    pub avg_sell_price: Decimal,
    pub total_bought_amount: Decimal,
    pub total_sold_amount: Decimal,
    /// Sale proceeds minus capital deployed, over the symbol's lifetime.
    pub realized_pnl: Decimal,
    pub pnl_percent: Decimal,
}
