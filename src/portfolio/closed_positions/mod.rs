//! Closed-positions module - lifetime summaries of fully-sold symbols.

mod closed_positions_model;
mod closed_positions_service;


pub use closed_positions_model::ClosedPositionSummary;
pub use closed_positions_service::aggregate_closed_positions;
