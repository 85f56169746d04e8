//! Allocation models for portfolio breakdown by category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market-value weight of one category bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBucket {
    pub category: String,
    /// Combined market value of the bucket's holdings
    pub market_value: Decimal,
    /// Percentage of total portfolio value (0-100)
    pub weight_percent: Decimal,
    pub holdings_count: usize,
}
