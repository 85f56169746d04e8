//! Market data module - quote records and the read-only snapshot handed
//! to valuation.

mod quotes_model;

#[cfg(test)]
mod quotes_model_tests;

pub use quotes_model::{Quote, QuoteSnapshot};
