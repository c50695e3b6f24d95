//! Policy shock projector
//!
//! Projects a capital balance along two paths: a base case compounding at
//! the annual yield, and a shocked case where a sustained erosion drag
//! applies from the shock onset year onward. The delta between the two
//! paths shows how a persistent macro shift compounds against terminal
//! capital.

use serde::{Deserialize, Serialize};

use super::growth;
use super::series::ProjectionSeries;
use crate::error::EngineError;

/// Inputs for a policy shock projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockScenario {
    /// Starting capital in whole currency units
    pub initial_capital: f64,

    /// Number of years to project
    pub horizon_years: u32,

    /// Annual yield in percentage points
    pub annual_yield_pct: f64,

    /// Sustained erosion shock in percentage points
    pub shock_pct: f64,

    /// Year the shock starts applying. May exceed the horizon, in which
    /// case the shock never applies.
    pub shock_onset_year: u32,
}

impl ShockScenario {
    /// Precondition checks for callers that want hard failures instead of
    /// degenerate projections. The projector itself accepts any input.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.initial_capital <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "initial capital must be positive, got {}",
                self.initial_capital
            )));
        }
        if self.horizon_years == 0 {
            return Err(EngineError::InvalidInput(
                "projection horizon must be at least 1 year".to_string(),
            ));
        }
        if self.shock_pct < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "shock must be non-negative, got {}",
                self.shock_pct
            )));
        }
        Ok(())
    }
}

/// Paired base and shocked capital paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockProjection {
    pub base: ProjectionSeries,
    pub shocked: ProjectionSeries,
}

impl ShockProjection {
    /// Relative impact of the shock on terminal capital, in percent.
    /// Negative when the shock erodes capital relative to the base case.
    pub fn terminal_impact_pct(&self) -> f64 {
        match (self.base.last_value(), self.shocked.last_value()) {
            (Some(base), Some(shocked)) if base != 0.0 => (shocked - base) / base * 100.0,
            _ => 0.0,
        }
    }
}

/// Project base and shocked capital paths over the scenario horizon.
///
/// Both series start at the initial capital and contain one point per year
/// from period 0 through the horizon inclusive. A horizon of 0 yields a
/// single-point series equal to the initial capital.
pub fn project(scenario: &ShockScenario) -> ShockProjection {
    let periods = scenario.horizon_years as usize + 1;
    let mut base = ProjectionSeries::with_capacity(periods);
    let mut shocked = ProjectionSeries::with_capacity(periods);

    let mut base_capital = scenario.initial_capital;
    let mut shocked_capital = scenario.initial_capital;

    for year in 0..=scenario.horizon_years {
        base.push(year, base_capital);
        shocked.push(year, shocked_capital);

        let drag = if year >= scenario.shock_onset_year {
            scenario.shock_pct
        } else {
            0.0
        };
        base_capital = growth::compound(base_capital, scenario.annual_yield_pct);
        shocked_capital =
            growth::compound_with_drag(shocked_capital, scenario.annual_yield_pct, drag);
    }

    ShockProjection { base, shocked }
}
