//! Quote records and the time-bounded snapshot they are served from.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::QUOTE_TTL_SECONDS;
use crate::transactions::normalize_symbol;

/// Latest observed market data for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub price: Decimal,
    /// Close of the previous session, when the source provides it. Daily
    /// change figures are unavailable without it.
    pub prev_close: Option<Decimal>,
    pub day_low: Option<Decimal>,
    pub day_high: Option<Decimal>,
    pub high_52w: Option<Decimal>,
    /// When the quote was observed.
    pub as_of: DateTime<Utc>,
}

/// A point-in-time view of quotes, bounded by a time-to-live.
///
/// Valuation reads from this snapshot only; entries past their TTL read as
/// absent, so a stale price is never mistaken for a live one. Lookups take
/// "now" explicitly - the snapshot itself carries no clock and is never
/// mutated by a read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    quotes: HashMap<String, Quote>,
    ttl_seconds: i64,
}

impl Default for QuoteSnapshot {
    fn default() -> Self {
        QuoteSnapshot {
            quotes: HashMap::new(),
            ttl_seconds: QUOTE_TTL_SECONDS,
        }
    }
}

impl QuoteSnapshot {
    pub fn new() -> Self {
        QuoteSnapshot::default()
    }

    pub fn with_ttl(ttl_seconds: i64) -> Self {
        QuoteSnapshot {
            quotes: HashMap::new(),
            ttl_seconds,
        }
    }

    pub fn insert(&mut self, quote: Quote) {
        self.quotes.insert(normalize_symbol(&quote.symbol), quote);
    }

    /// The quote for `symbol`, unless it is absent or older than the TTL.
    pub fn get(&self, symbol: &str, now: DateTime<Utc>) -> Option<&Quote> {
        self.quotes
            .get(&normalize_symbol(symbol))
            .filter(|quote| now - quote.as_of <= Duration::seconds(self.ttl_seconds))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
