//! Performance module - cash-flow assembly and the annualized-return
//! solver.

mod performance_model;
mod performance_service;
mod xirr_calculator;


#[cfg(test)]
mod xirr_calculator_tests;

pub use performance_model::{CashFlow, PerformanceSummary};
pub use performance_service::{
    portfolio_cash_flows, portfolio_cash_flows_with_sales, portfolio_performance,
};
pub use xirr_calculator::{xirr, xnpv, year_fraction};
