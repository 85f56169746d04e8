//! Cash-flow and return records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dated cash movement. Outflows (purchases) are negative, inflows
/// (sale proceeds, terminal value) positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

/// Annualized money-weighted return of the portfolio's cash-flow series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    /// Annualized rate as a fraction (0.10 = 10%); absent when the series
    /// admits no rate.
    pub annualized_return: Option<Decimal>,
    /// Same rate as a percentage, for display.
    pub annualized_return_percent: Option<Decimal>,
    pub flow_count: usize,
    pub as_of: DateTime<Utc>,
}
