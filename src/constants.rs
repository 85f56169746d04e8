/// Decimal precision for derived percentage figures
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Share-quantity tolerance when checking whether a symbol's lifetime buys
/// and sells net out to zero
pub const SHARE_EPSILON: &str = "0.0001";

/// Quote entries older than this are treated as absent
pub const QUOTE_TTL_SECONDS: i64 = 15 * 60;

/// Day-count convention for year fractions (Actual/365.25)
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Starting rate for the annualized-return solver
pub const XIRR_DEFAULT_GUESS: f64 = 0.1;

/// Iteration cap shared by the Newton-Raphson and bisection stages
pub const XIRR_MAX_ITERATIONS: u32 = 100;

/// Convergence tolerance on the rate step and on the bracketed NPV
pub const XIRR_TOLERANCE: f64 = 1e-4;

/// Below this derivative magnitude Newton-Raphson hands over to bisection
pub const XIRR_DERIVATIVE_FLOOR: f64 = 1e-10;

/// Rate clamp bounds; a rate at or below -1 makes the discount base
/// non-positive
pub const XIRR_RATE_MIN: f64 = -0.99;
pub const XIRR_RATE_MAX: f64 = 10.0;
