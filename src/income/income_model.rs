//! Dividend income domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ValidationError};
use crate::transactions::normalize_symbol;

/// A cash dividend received for a symbol. Realized income associated to
/// the symbol only - never part of its cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    pub id: String,
    pub symbol: String,
    pub amount: Decimal,
    pub payment_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input payload for recording a dividend, validated at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDividend {
    pub symbol: String,
    pub amount: Decimal,
    /// Payment date; defaults to the recording time when absent.
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewDividend {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Dividend amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        Ok(())
    }

    pub fn into_dividend(self) -> Result<Dividend> {
        self.validate()?;
        let now = Utc::now();
        Ok(Dividend {
            id: Uuid::new_v4().to_string(),
            symbol: normalize_symbol(&self.symbol),
            amount: self.amount,
            payment_date: self.payment_date.unwrap_or(now),
            notes: self.notes,
            created_at: now,
        })
    }
}

/// Dividend income received for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolIncome {
    pub symbol: String,
    pub amount: Decimal,
    pub entry_count: usize,
}

/// Dividend income across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendSummary {
    pub total_amount: Decimal,
    pub entry_count: usize,
    /// Per-symbol breakdown, largest income first.
    pub by_symbol: Vec<SymbolIncome>,
}
