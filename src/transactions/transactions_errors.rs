//! Errors raised by transaction validation and order entry.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// A sell was requested for more shares than the symbol currently holds.
    /// Raised at order entry, before the transaction reaches the log.
    #[error("Cannot sell {requested} shares of {symbol}: only {available} held")]
    InsufficientShares {
        symbol: String,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(Decimal),

    #[error("Unit price must be positive, got {0}")]
    InvalidUnitPrice(Decimal),

    #[error("Symbol must not be empty")]
    MissingSymbol,

    #[error("Transaction not found: {0}")]
    NotFound(String),

    #[error("Unknown transaction type: {0}")]
    UnknownType(String),
}
