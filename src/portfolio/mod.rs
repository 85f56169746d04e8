pub mod allocation;
pub mod closed_positions;
pub mod holdings;
pub mod performance;
pub mod valuation;

pub use allocation::*;
pub use closed_positions::*;
pub use holdings::*;
pub use performance::*;
pub use valuation::*;
