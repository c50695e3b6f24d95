//! Annual compounding primitives shared by the projection engines
//!
//! Rates are expressed in whole percentage points, matching the sandbox
//! controls (7 means 7% per year).

/// Advance a balance by one year of growth at `annual_rate_pct`
pub fn compound(balance: f64, annual_rate_pct: f64) -> f64 {
    balance * (1.0 + annual_rate_pct / 100.0)
}

/// Advance a balance by one year of growth with a sustained erosion drag
/// subtracted from the rate
pub fn compound_with_drag(balance: f64, annual_rate_pct: f64, drag_pct: f64) -> f64 {
    balance * (1.0 + (annual_rate_pct - drag_pct) / 100.0)
}
