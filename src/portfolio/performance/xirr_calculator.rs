//! Root-finder for the annualized rate of a dated cash-flow series.
//!
//! Ledger amounts arrive as `Decimal`, but the solver iterates in `f64`:
//! discounting raises `(1 + rate)` to fractional year exponents, which is
//! floating-point territory. The found rate is converted back at the
//! boundary.

use chrono::{DateTime, Utc};
use log::debug;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::constants::{
    DAYS_PER_YEAR, XIRR_DERIVATIVE_FLOOR, XIRR_MAX_ITERATIONS, XIRR_RATE_MAX, XIRR_RATE_MIN,
    XIRR_TOLERANCE,
};
use crate::portfolio::performance::CashFlow;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fraction of a year between two instants, Actual/365.25. The convention
/// is fixed so the same series always reproduces the same rate.
pub fn year_fraction(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let days = (end - start).num_seconds() as f64 / SECONDS_PER_DAY;
    days / DAYS_PER_YEAR
}

/// Net present value of a series at the given rate, discounted from the
/// earliest flow's date.
pub fn xnpv(rate: f64, flows: &[CashFlow]) -> f64 {
    let Some(base_date) = flows.iter().map(|flow| flow.date).min() else {
        return 0.0;
    };
    flows
        .iter()
        .map(|flow| {
            let years = year_fraction(base_date, flow.date);
            flow.amount.to_f64().unwrap_or(0.0) / (1.0 + rate).powf(years)
        })
        .sum()
}

/// Finds the rate at which the series' net present value is zero.
///
/// Newton-Raphson from `guess`, clamped each step to the valid rate
/// domain; when the derivative flattens out or the iterations exhaust,
/// falls back to bisection over the same domain. Returns `None` when the
/// series has fewer than two flows, is single-signed (no meaningful rate
/// exists), or no root can be bracketed - never a fabricated rate.
pub fn xirr(flows: &[CashFlow], guess: f64) -> Option<Decimal> {
    if flows.len() < 2 {
        return None;
    }
    let has_negative = flows.iter().any(|flow| flow.amount < Decimal::ZERO);
    let has_positive = flows.iter().any(|flow| flow.amount > Decimal::ZERO);
    if !has_negative || !has_positive {
        debug!("Cash-flow series is single-signed; no rate exists");
        return None;
    }

    let mut sorted: Vec<&CashFlow> = flows.iter().collect();
    sorted.sort_by_key(|flow| flow.date);
    let base_date = sorted[0].date;
    let prepared: Vec<(f64, f64)> = sorted
        .iter()
        .map(|flow| {
            (
                flow.amount.to_f64().unwrap_or(0.0),
                year_fraction(base_date, flow.date),
            )
        })
        .collect();

    newton_raphson(&prepared, guess)
        .or_else(|| bisection(&prepared))
        .and_then(Decimal::from_f64)
}

fn npv(rate: f64, flows: &[(f64, f64)]) -> f64 {
    flows
        .iter()
        .map(|(amount, years)| amount / (1.0 + rate).powf(*years))
        .sum()
}

fn npv_derivative(rate: f64, flows: &[(f64, f64)]) -> f64 {
    flows
        .iter()
        .map(|(amount, years)| -years * amount / (1.0 + rate).powf(years + 1.0))
        .sum()
}

fn newton_raphson(flows: &[(f64, f64)], guess: f64) -> Option<f64> {
    let mut rate = guess;
    for _ in 0..XIRR_MAX_ITERATIONS {
        let derivative = npv_derivative(rate, flows);
        if derivative.abs() < XIRR_DERIVATIVE_FLOOR {
            debug!("NPV derivative flat at rate {}; handing over to bisection", rate);
            return None;
        }

        let next = rate - npv(rate, flows) / derivative;
        if (next - rate).abs() < XIRR_TOLERANCE {
            if (XIRR_RATE_MIN..=XIRR_RATE_MAX).contains(&next) {
                return Some(next);
            }
            // Converged outside the valid domain.
            return None;
        }
        rate = next.clamp(XIRR_RATE_MIN, XIRR_RATE_MAX);
    }
    None
}

fn bisection(flows: &[(f64, f64)]) -> Option<f64> {
    let mut low = XIRR_RATE_MIN;
    let mut high = XIRR_RATE_MAX;
    let mut npv_low = npv(low, flows);
    let npv_high = npv(high, flows);

    if npv_low * npv_high > 0.0 {
        debug!("No NPV sign change in [{}, {}]; no rate", low, high);
        return None;
    }

    for _ in 0..XIRR_MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv(mid, flows);

        if npv_mid.abs() < XIRR_TOLERANCE || (high - low) < XIRR_TOLERANCE {
            return Some(mid);
        }

        if npv_low * npv_mid < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }
    None
}
