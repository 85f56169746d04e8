//! Portfolio-level cash-flow assembly and the money-weighted return.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::constants::{DECIMAL_PRECISION, XIRR_DEFAULT_GUESS};
use crate::portfolio::performance::{xirr, CashFlow, PerformanceSummary};
use crate::transactions::Transaction;

/// Builds the portfolio flow series: one outflow per buy across all
/// symbols, plus a single terminal inflow of the current market value of
/// everything still held, dated `as_of`.
///
/// This is a point-in-time formulation: it prices the portfolio as if all
/// holdings were liquidated at `as_of`, and historical sale proceeds are
/// NOT threaded back in as intermediate inflows. Use
/// [`portfolio_cash_flows_with_sales`] when sale timing should shape the
/// rate.
pub fn portfolio_cash_flows(
    transactions: &[Transaction],
    current_market_value: Decimal,
    as_of: DateTime<Utc>,
) -> Vec<CashFlow> {
    let mut flows: Vec<CashFlow> = transactions
        .iter()
        .filter(|txn| txn.is_buy())
        .map(|txn| CashFlow {
            amount: -txn.amount(),
            date: txn.transaction_date,
        })
        .collect();

    flows.push(CashFlow {
        amount: current_market_value,
        date: as_of,
    });
    flows
}

/// Sale-accurate variant: every sell becomes its own dated inflow, and the
/// terminal flow must price only the shares still held at `as_of`.
pub fn portfolio_cash_flows_with_sales(
    transactions: &[Transaction],
    current_market_value: Decimal,
    as_of: DateTime<Utc>,
) -> Vec<CashFlow> {
    let mut flows: Vec<CashFlow> = transactions
        .iter()
        .map(|txn| CashFlow {
            amount: if txn.is_buy() {
                -txn.amount()
            } else {
                txn.amount()
            },
            date: txn.transaction_date,
        })
        .collect();

    flows.push(CashFlow {
        amount: current_market_value,
        date: as_of,
    });
    flows
}

/// Computes the portfolio's annualized money-weighted return from its
/// buy history and current market value.
pub fn portfolio_performance(
    transactions: &[Transaction],
    current_market_value: Decimal,
    as_of: DateTime<Utc>,
) -> PerformanceSummary {
    let flows = portfolio_cash_flows(transactions, current_market_value, as_of);
    let rate = xirr(&flows, XIRR_DEFAULT_GUESS);

    PerformanceSummary {
        annualized_return: rate,
        annualized_return_percent: rate
            .map(|rate| (rate * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION)),
        flow_count: flows.len(),
        as_of,
    }
}
