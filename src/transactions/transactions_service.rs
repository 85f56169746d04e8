//! Order-entry ledger: validates and stores transactions, derives
//! positions by replaying the log.

use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::portfolio::holdings::Position;
use crate::transactions::{
    normalize_symbol, NewTransaction, Transaction, TransactionError, TransactionType,
};

/// In-memory transaction log with order-entry validation.
///
/// The ledger is the boundary where an over-sell is rejected: a SELL for
/// more shares than the symbol currently holds never reaches the log.
/// Positions are derived by a full replay of the remaining log on every
/// read - a sell folds the then-current average cost into the basis, so
/// there is no incremental shortcut after a deletion.
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
    categories: HashMap<String, String>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        TransactionLedger::default()
    }

    /// Validates and appends a transaction, returning the recorded form.
    pub fn record(
        &mut self,
        new_transaction: NewTransaction,
    ) -> std::result::Result<Transaction, TransactionError> {
        new_transaction.validate()?;

        if new_transaction.transaction_type == TransactionType::Sell {
            let symbol = normalize_symbol(&new_transaction.symbol);
            let available = self
                .position(&symbol)
                .map(|position| position.quantity)
                .unwrap_or(Decimal::ZERO);
            if new_transaction.quantity > available {
                return Err(TransactionError::InsufficientShares {
                    symbol,
                    requested: new_transaction.quantity,
                    available,
                });
            }
        }

        let transaction = new_transaction.into_transaction()?;
        debug!(
            "Recorded {} {} x {} @ {}",
            transaction.transaction_type.as_str(),
            transaction.symbol,
            transaction.quantity,
            transaction.unit_price
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes a transaction by id. Positions read afterwards replay the
    /// remaining log from scratch.
    pub fn delete(&mut self, id: &str) -> std::result::Result<Transaction, TransactionError> {
        match self.transactions.iter().position(|txn| txn.id == id) {
            Some(index) => {
                let removed = self.transactions.remove(index);
                debug!("Deleted transaction {} for {}", removed.id, removed.symbol);
                Ok(removed)
            }
            None => Err(TransactionError::NotFound(id.to_string())),
        }
    }

    /// The full log, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All transactions recorded for a symbol, in insertion order.
    pub fn transactions_for(&self, symbol: &str) -> Vec<Transaction> {
        let symbol = normalize_symbol(symbol);
        self.transactions
            .iter()
            .filter(|txn| txn.symbol == symbol)
            .cloned()
            .collect()
    }

    /// Every symbol that has at least one recorded transaction, sorted.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self
            .transactions
            .iter()
            .map(|txn| txn.symbol.clone())
            .collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    /// Assigns a category to a symbol's holding.
    pub fn set_category(&mut self, symbol: &str, category: &str) {
        self.categories
            .insert(normalize_symbol(symbol), category.to_string());
    }

    pub fn category_of(&self, symbol: &str) -> Option<&str> {
        self.categories
            .get(&normalize_symbol(symbol))
            .map(String::as_str)
    }

    /// The position for a symbol, replayed from its transaction log.
    /// A fully-sold symbol still returns a position (with zero shares);
    /// its history stays available for closed-position reporting.
    pub fn position(&self, symbol: &str) -> Option<Position> {
        let symbol = normalize_symbol(symbol);
        let transactions = self.transactions_for(&symbol);
        if transactions.is_empty() {
            return None;
        }
        let category = self.category_of(&symbol).map(str::to_string);
        Some(Position::from_transactions(&symbol, transactions, category))
    }

    /// Positions for every symbol in the ledger, closed ones included.
    pub fn positions(&self) -> Vec<Position> {
        self.symbols()
            .iter()
            .filter_map(|symbol| self.position(symbol))
            .collect()
    }

    /// Positions that still hold shares.
    pub fn open_positions(&self) -> Vec<Position> {
        self.positions()
            .into_iter()
            .filter(|position| position.quantity > Decimal::ZERO)
            .collect()
    }

    /// Positions for every symbol, keyed by symbol.
    pub fn positions_by_symbol(&self) -> HashMap<String, Position> {
        self.positions()
            .into_iter()
            .map(|position| (position.symbol.clone(), position))
            .collect()
    }
}
