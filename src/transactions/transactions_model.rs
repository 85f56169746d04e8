//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::transactions::transactions_constants::*;
use crate::transactions::TransactionError;

/// The two sides of an equity trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            s if s == TRANSACTION_TYPE_BUY => Ok(TransactionType::Buy),
            s if s == TRANSACTION_TYPE_SELL => Ok(TransactionType::Sell),
            _ => Err(TransactionError::UnknownType(s.to_string())),
        }
    }
}

/// A recorded trade for one symbol. Immutable once recorded; removing one
/// from the ledger triggers a full replay of the remaining log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub symbol: String,
    pub transaction_type: TransactionType,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Gross amount of the trade (quantity x unit price).
    pub fn amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    pub fn is_buy(&self) -> bool {
        self.transaction_type == TransactionType::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.transaction_type == TransactionType::Sell
    }
}

/// Input payload for recording a trade. Validated before it becomes a
/// [`Transaction`]; malformed input never enters the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub symbol: String,
    pub transaction_type: TransactionType,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Trade date; defaults to the recording time when absent.
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
}

impl NewTransaction {
    pub fn validate(&self) -> std::result::Result<(), TransactionError> {
        if self.symbol.trim().is_empty() {
            return Err(TransactionError::MissingSymbol);
        }
        if self.quantity <= Decimal::ZERO {
            return Err(TransactionError::InvalidQuantity(self.quantity));
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(TransactionError::InvalidUnitPrice(self.unit_price));
        }
        Ok(())
    }

    /// Consumes the payload and produces a recorded transaction with a
    /// fresh id and a normalized symbol.
    pub fn into_transaction(self) -> std::result::Result<Transaction, TransactionError> {
        self.validate()?;
        let now = Utc::now();
        Ok(Transaction {
            id: Uuid::new_v4().to_string(),
            symbol: normalize_symbol(&self.symbol),
            transaction_type: self.transaction_type,
            quantity: self.quantity,
            unit_price: self.unit_price,
            transaction_date: self.transaction_date.unwrap_or(now),
            created_at: now,
        })
    }
}

/// Uppercases and trims a ticker symbol.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Sorts transactions by trade date ascending. The sort is stable, so
/// transactions sharing a date keep their insertion order.
pub fn sort_by_trade_date(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|txn| txn.transaction_date);
}
