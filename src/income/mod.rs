//! Income module - dividend records and aggregation.

mod income_model;
mod income_service;


pub use income_model::{Dividend, DividendSummary, NewDividend, SymbolIncome};
pub use income_service::{income_by_symbol, summarize_income, total_for_symbol};
