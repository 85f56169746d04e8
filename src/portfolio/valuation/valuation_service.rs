//! Values holdings against a quote snapshot.

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::constants::DECIMAL_PRECISION;
use crate::market_data::QuoteSnapshot;
use crate::portfolio::holdings::Position;
use crate::portfolio::valuation::{HoldingValuation, PortfolioSummary};

/// Values holdings against a read-only quote snapshot.
///
/// The snapshot is injected once at construction and only ever read;
/// callers that refresh prices build a new snapshot and a new service.
pub struct ValuationService {
    quotes: QuoteSnapshot,
}

impl ValuationService {
    pub fn new(quotes: QuoteSnapshot) -> Self {
        ValuationService { quotes }
    }

    /// Produces the gain-loss breakdown for one holding.
    ///
    /// Without a fresh quote the holding is valued at its average cost
    /// (unrealized gain zero) and `market_price` stays `None`. Day-change
    /// figures are reported only when the quote carries a reference prior
    /// close; they are never zero-filled.
    pub fn valuate(
        &self,
        position: &Position,
        dividend_income: Decimal,
        now: DateTime<Utc>,
    ) -> HoldingValuation {
        let quote = self.quotes.get(&position.symbol, now);
        let market_price = quote.map(|quote| quote.price);
        let effective_price = market_price.unwrap_or(position.average_cost);

        let holding_cost = position.quantity * position.average_cost;
        let market_value = position.quantity * effective_price;
        let unrealized_gain = position.quantity * (effective_price - position.average_cost);
        let unrealized_gain_percent = percent_of(unrealized_gain, holding_cost);

        let prev_close = quote.and_then(|quote| quote.prev_close);
        let day_change = prev_close.map(|close| (effective_price - close) * position.quantity);
        let day_change_percent = prev_close.and_then(|close| {
            if close > Decimal::ZERO {
                Some(percent_of(effective_price - close, close))
            } else {
                None
            }
        });

        let total_gain = unrealized_gain + position.realized_gain + dividend_income;
        let total_gain_percent = percent_of(total_gain, position.total_buy_amount);

        HoldingValuation {
            symbol: position.symbol.clone(),
            category: position.category.clone(),
            quantity: position.quantity,
            average_cost: position.average_cost,
            cost_basis: position.total_cost_basis,
            market_price,
            market_value,
            unrealized_gain,
            unrealized_gain_percent,
            day_change,
            day_change_percent,
            realized_gain: position.realized_gain,
            dividend_income,
            total_gain,
            total_gain_percent,
            total_invested: position.total_buy_amount,
        }
    }

    /// Valuations for a set of positions, dividends looked up by symbol.
    pub fn valuate_all(
        &self,
        positions: &[Position],
        dividends_by_symbol: &HashMap<String, Decimal>,
        now: DateTime<Utc>,
    ) -> Vec<HoldingValuation> {
        positions
            .iter()
            .map(|position| {
                let dividend_income = dividends_by_symbol
                    .get(&position.symbol)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                self.valuate(position, dividend_income, now)
            })
            .collect()
    }

    /// Aggregates positions into a portfolio summary. Closed positions
    /// contribute their realized gain and dividends; only open ones carry
    /// market value.
    ///
    /// The day figures cover exactly the holdings that have a reference
    /// prior close (`day_change_coverage` says how many); when none has
    /// one the figures are absent rather than zero.
    pub fn summarize(
        &self,
        positions: &[Position],
        dividends_by_symbol: &HashMap<String, Decimal>,
        now: DateTime<Utc>,
    ) -> PortfolioSummary {
        debug!("Summarizing portfolio of {} positions", positions.len());
        let valuations = self.valuate_all(positions, dividends_by_symbol, now);

        let mut summary = PortfolioSummary {
            holdings_count: 0,
            total_cost_basis: Decimal::ZERO,
            market_value: Decimal::ZERO,
            unrealized_gain: Decimal::ZERO,
            unrealized_gain_percent: Decimal::ZERO,
            realized_gain: Decimal::ZERO,
            dividend_income: Decimal::ZERO,
            total_gain: Decimal::ZERO,
            total_gain_percent: Decimal::ZERO,
            total_invested: Decimal::ZERO,
            day_change: None,
            day_change_percent: None,
            day_change_coverage: 0,
            as_of: now,
        };

        // Day percent is day P&L over the prior-close value of the covered
        // holdings, so it needs its own denominator.
        let mut day_amount = Decimal::ZERO;
        let mut day_base = Decimal::ZERO;

        for (position, valuation) in positions.iter().zip(&valuations) {
            if position.quantity > Decimal::ZERO {
                summary.holdings_count += 1;
            }
            summary.total_cost_basis += valuation.cost_basis;
            summary.market_value += valuation.market_value;
            summary.unrealized_gain += valuation.unrealized_gain;
            summary.realized_gain += valuation.realized_gain;
            summary.dividend_income += valuation.dividend_income;
            summary.total_gain += valuation.total_gain;
            summary.total_invested += valuation.total_invested;

            if let Some(change) = valuation.day_change {
                let prev_close = self
                    .quotes
                    .get(&position.symbol, now)
                    .and_then(|quote| quote.prev_close)
                    .unwrap_or(Decimal::ZERO);
                day_amount += change;
                day_base += prev_close * position.quantity;
                summary.day_change_coverage += 1;
            }
        }

        summary.unrealized_gain_percent =
            percent_of(summary.unrealized_gain, summary.total_cost_basis);
        summary.total_gain_percent = percent_of(summary.total_gain, summary.total_invested);

        if summary.day_change_coverage > 0 {
            summary.day_change = Some(day_amount);
            summary.day_change_percent = Some(percent_of(day_amount, day_base));
        }

        summary
    }
}

fn percent_of(value: Decimal, base: Decimal) -> Decimal {
    if base > Decimal::ZERO {
        (value / base * Decimal::ONE_HUNDRED).round_dp(DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}
