//! Holdings module - position model and the cost-basis replay.

mod holdings_calculator;
mod holdings_model;


pub use holdings_calculator::{calculate_cost_basis, CostBasis};
pub use holdings_model::Position;
