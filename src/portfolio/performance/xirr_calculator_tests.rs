// Test cases for the annualized-rate root-finder.
#[cfg(test)]
mod tests {
    use crate::constants::XIRR_DEFAULT_GUESS;
    use crate::portfolio::performance::{xirr, xnpv, year_fraction, CashFlow};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use num_traits::ToPrimitive;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn flow(amount: Decimal, at: DateTime<Utc>) -> CashFlow {
        CashFlow { amount, date: at }
    }

    // 365.25 days, so the year fraction is exactly 1.0.
    fn one_year_after(start: DateTime<Utc>) -> DateTime<Utc> {
        start + Duration::days(365) + Duration::hours(6)
    }

    #[test]
    fn year_fraction_uses_the_fixed_day_count() {
        let start = date(2023, 1, 1);
        assert_eq!(year_fraction(start, start), 0.0);
        assert!((year_fraction(start, one_year_after(start)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ten_percent_over_one_year() {
        let start = date(2023, 1, 1);
        let flows = vec![
            flow(dec!(-1000), start),
            flow(dec!(1100), one_year_after(start)),
        ];

        let rate = xirr(&flows, XIRR_DEFAULT_GUESS).unwrap();
        assert!((rate - dec!(0.10)).abs() < dec!(0.0001));
    }

    #[test]
    fn losing_ten_percent_over_one_year() {
        let start = date(2023, 1, 1);
        let flows = vec![
            flow(dec!(-1000), start),
            flow(dec!(900), one_year_after(start)),
        ];

        let rate = xirr(&flows, XIRR_DEFAULT_GUESS).unwrap();
        assert!((rate - dec!(-0.10)).abs() < dec!(0.001));
    }

    #[test]
    fn staggered_purchases_land_between_the_bounds() {
        let flows = vec![
            flow(dec!(-1000), date(2023, 1, 1)),
            flow(dec!(-500), date(2023, 6, 1)),
            flow(dec!(1700), date(2024, 1, 1)),
        ];

        let rate = xirr(&flows, XIRR_DEFAULT_GUESS).unwrap();
        assert!(rate > dec!(0.10) && rate < dec!(0.20));
    }

    #[test]
    fn found_rate_zeroes_the_net_present_value() {
        let flows = vec![
            flow(dec!(-1000), date(2023, 1, 1)),
            flow(dec!(-500), date(2023, 6, 1)),
            flow(dec!(1700), date(2024, 1, 1)),
        ];

        let rate = xirr(&flows, XIRR_DEFAULT_GUESS).unwrap();
        let residual = xnpv(rate.to_f64().unwrap(), &flows);
        assert!(residual.abs() < 1.0, "residual NPV was {}", residual);
    }

    #[test]
    fn all_outflows_has_no_rate() {
        let flows = vec![
            flow(dec!(-1000), date(2023, 1, 1)),
            flow(dec!(-500), date(2024, 1, 1)),
        ];
        assert_eq!(xirr(&flows, XIRR_DEFAULT_GUESS), None);
    }

    #[test]
    fn all_inflows_has_no_rate() {
        let flows = vec![
            flow(dec!(1000), date(2023, 1, 1)),
            flow(dec!(500), date(2024, 1, 1)),
        ];
        assert_eq!(xirr(&flows, XIRR_DEFAULT_GUESS), None);
    }

    #[test]
    fn fewer_than_two_flows_has_no_rate() {
        assert_eq!(xirr(&[], XIRR_DEFAULT_GUESS), None);
        assert_eq!(
            xirr(&[flow(dec!(-1000), date(2023, 1, 1))], XIRR_DEFAULT_GUESS),
            None
        );
    }

    #[test]
    fn flow_order_does_not_matter() {
        let start = date(2023, 1, 1);
        let sorted = vec![
            flow(dec!(-1000), start),
            flow(dec!(1100), one_year_after(start)),
        ];
        let reversed: Vec<CashFlow> = sorted.iter().rev().cloned().collect();

        assert_eq!(
            xirr(&sorted, XIRR_DEFAULT_GUESS),
            xirr(&reversed, XIRR_DEFAULT_GUESS)
        );
    }

    #[test]
    fn an_extreme_guess_still_converges() {
        let start = date(2023, 1, 1);
        let flows = vec![
            flow(dec!(-1000), start),
            flow(dec!(1100), one_year_after(start)),
        ];

        let rate = xirr(&flows, 9.5).unwrap();
        assert!((rate - dec!(0.10)).abs() < dec!(0.001));
    }
}
