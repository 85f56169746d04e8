//! Transactions module - domain models, errors, and the order-entry ledger.

mod transactions_constants;
mod transactions_errors;
mod transactions_model;
mod transactions_service;



pub use transactions_constants::*;
pub use transactions_errors::TransactionError;
pub use transactions_model::{
    normalize_symbol, sort_by_trade_date, NewTransaction, Transaction, TransactionType,
};
pub use transactions_service::TransactionLedger;
