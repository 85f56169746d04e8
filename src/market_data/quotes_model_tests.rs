// Test cases for the quote snapshot.
#[cfg(test)]
mod tests {
    use crate::market_data::{Quote, QuoteSnapshot};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn quote(symbol: &str, price: Decimal, age_minutes: i64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            price,
            prev_close: None,
            day_low: None,
            day_high: None,
            high_52w: None,
            as_of: now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn fresh_quotes_are_returned() {
        let mut snapshot = QuoteSnapshot::new();
        snapshot.insert(quote("OGDC", dec!(95.5), 5));

        let found = snapshot.get("OGDC", now()).unwrap();
        assert_eq!(found.price, dec!(95.5));
    }

    #[test]
    fn entries_past_the_ttl_read_as_absent() {
        let mut snapshot = QuoteSnapshot::new();
        snapshot.insert(quote("OGDC", dec!(95.5), 16));

        assert!(snapshot.get("OGDC", now()).is_none());
        // The entry itself is still stored; only the read is gated.
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn lookups_normalize_the_symbol() {
        let mut snapshot = QuoteSnapshot::new();
        snapshot.insert(quote("ogdc", dec!(95.5), 1));

        assert!(snapshot.get(" OGDC ", now()).is_some());
    }

    #[test]
    fn a_custom_ttl_is_honored() {
        let mut snapshot = QuoteSnapshot::with_ttl(60);
        snapshot.insert(quote("PPL", dec!(80), 2));

        assert!(snapshot.get("PPL", now()).is_none());
        snapshot.insert(quote("PPL", dec!(80), 0));
        assert!(snapshot.get("PPL", now()).is_some());
    }
}
