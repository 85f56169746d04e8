//! Groups open holdings into category buckets weighted by market value.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::constants::DECIMAL_PRECISION;
use crate::portfolio::allocation::AllocationBucket;
use crate::portfolio::valuation::HoldingValuation;

/// Bucket for holdings without an assigned category.
pub const UNCATEGORIZED: &str = "other";

/// Groups open holdings by category and weights each bucket by its share
/// of total portfolio value. Holdings with no shares are skipped; a
/// holding without a category lands in [`UNCATEGORIZED`]. Sorted by value
/// descending, category ascending on ties.
pub fn allocate_by_category(valuations: &[HoldingValuation]) -> Vec<AllocationBucket> {
    let mut buckets: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
    let mut total_value = Decimal::ZERO;

    for valuation in valuations {
        if valuation.quantity <= Decimal::ZERO {
            continue;
        }
        let category = valuation
            .category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        let entry = buckets.entry(category).or_insert((Decimal::ZERO, 0));
        entry.0 += valuation.market_value;
        entry.1 += 1;
        total_value += valuation.market_value;
    }

    let mut allocations: Vec<AllocationBucket> = buckets
        .into_iter()
        .map(|(category, (market_value, holdings_count))| {
            let weight_percent = if total_value > Decimal::ZERO {
                (market_value / total_value * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION)
            } else {
                Decimal::ZERO
            };
            AllocationBucket {
                category,
                market_value,
                weight_percent,
                holdings_count,
            }
        })
        .collect();

    allocations.sort_by(|a, b| {
        b.market_value
            .cmp(&a.market_value)
            .then_with(|| a.category.cmp(&b.category))
    });
    allocations
}
