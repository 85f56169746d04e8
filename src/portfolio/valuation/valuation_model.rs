//! Valuation output records. Plain data, suitable for serialization to
//! any persistence layer or rendering by any UI.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full gain-loss breakdown for one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub symbol: String,
    pub category: Option<String>,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    /// Cost of the shares currently held.
    pub cost_basis: Decimal,
    /// Latest market price; absent when no fresh quote exists.
    pub market_price: Option<Decimal>,
    /// Value of the held shares. Falls back to cost when no fresh quote
    /// exists, in which case `market_price` is `None`.
    pub market_value: Decimal,
    pub unrealized_gain: Decimal,
    /// Unrealized gain over the current holding cost, as a percentage.
    pub unrealized_gain_percent: Decimal,
    /// Change versus the reference prior close; absent without one.
    pub day_change: Option<Decimal>,
    pub day_change_percent: Option<Decimal>,
    /// Gain locked in by sells.
    pub realized_gain: Decimal,
    /// Dividends received for the symbol.
    pub dividend_income: Decimal,
    /// Unrealized + realized + dividends.
    pub total_gain: Decimal,
    /// Total gain over lifetime capital deployed, as a percentage. The
    /// denominator is every buy ever made, not just the current basis, so
    /// the figure stays meaningful after partial sells.
    pub total_gain_percent: Decimal,
    /// Lifetime capital deployed (sum of all buy amounts).
    pub total_invested: Decimal,
}

/// Portfolio-wide aggregation across holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Holdings that still hold shares.
    pub holdings_count: usize,
    pub total_cost_basis: Decimal,
    pub market_value: Decimal,
    pub unrealized_gain: Decimal,
    pub unrealized_gain_percent: Decimal,
    pub realized_gain: Decimal,
    pub dividend_income: Decimal,
    pub total_gain: Decimal,
    pub total_gain_percent: Decimal,
    pub total_invested: Decimal,
    /// Day change summed over holdings that have a reference close;
    /// absent when none has one.
    pub day_change: Option<Decimal>,
    pub day_change_percent: Option<Decimal>,
    /// How many holdings carried a reference close into the day figures.
    pub day_change_coverage: usize,
    pub as_of: DateTime<Utc>,
}
