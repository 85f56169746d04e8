//! Valuation module - gain-loss breakdowns for holdings and the portfolio.

mod valuation_model;
mod valuation_service;


pub use valuation_model::{HoldingValuation, PortfolioSummary};
pub use valuation_service::ValuationService;
