// Test cases for category allocation.
#[cfg(test)]
mod tests {
    use crate::portfolio::allocation::{allocate_by_category, UNCATEGORIZED};
    use crate::portfolio::valuation::HoldingValuation;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, category: Option<&str>, quantity: Decimal, value: Decimal) -> HoldingValuation {
        HoldingValuation {
            symbol: symbol.to_string(),
            category: category.map(str::to_string),
            quantity,
            average_cost: Decimal::ZERO,
            cost_basis: Decimal::ZERO,
            market_price: None,
            market_value: value,
            unrealized_gain: Decimal::ZERO,
            unrealized_gain_percent: Decimal::ZERO,
            day_change: None,
            day_change_percent: None,
            realized_gain: Decimal::ZERO,
            dividend_income: Decimal::ZERO,
            total_gain: Decimal::ZERO,
            total_gain_percent: Decimal::ZERO,
            total_invested: Decimal::ZERO,
        }
    }

    #[test]
    fn buckets_are_weighted_by_market_value() {
        let valuations = vec![
            holding("SYS", Some("technology"), dec!(10), dec!(3000)),
            holding("TRG", Some("technology"), dec!(20), dec!(1000)),
            holding("OGDC", Some("energy"), dec!(50), dec!(1000)),
        ];

        let buckets = allocate_by_category(&valuations);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].category, "technology");
        assert_eq!(buckets[0].market_value, dec!(4000));
        assert_eq!(buckets[0].weight_percent, dec!(80));
        assert_eq!(buckets[0].holdings_count, 2);
        assert_eq!(buckets[1].category, "energy");
        assert_eq!(buckets[1].weight_percent, dec!(20));
    }

    #[test]
    fn holdings_without_a_category_land_in_the_default_bucket() {
        let valuations = vec![
            holding("HBL", Some("banking"), dec!(10), dec!(500)),
            holding("UNITY", None, dec!(10), dec!(500)),
        ];

        let buckets = allocate_by_category(&valuations);
        assert!(buckets.iter().any(|bucket| bucket.category == UNCATEGORIZED));
    }

    #[test]
    fn closed_holdings_are_skipped() {
        let valuations = vec![
            holding("HBL", Some("banking"), dec!(10), dec!(500)),
            holding("MARI", Some("energy"), Decimal::ZERO, Decimal::ZERO),
        ];

        let buckets = allocate_by_category(&valuations);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].category, "banking");
    }

    #[test]
    fn equal_values_fall_back_to_category_order() {
        let valuations = vec![
            holding("A", Some("cement"), dec!(1), dec!(100)),
            holding("B", Some("autos"), dec!(1), dec!(100)),
        ];

        let buckets = allocate_by_category(&valuations);
        assert_eq!(buckets[0].category, "autos");
        assert_eq!(buckets[1].category, "cement");
    }

    #[test]
    fn empty_portfolio_allocates_nothing() {
        assert!(allocate_by_category(&[]).is_empty());
    }
}
