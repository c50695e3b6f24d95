//! Member retirement profile inputs

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Inputs for a retirement outcome simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementProfile {
    /// Member's current age in whole years
    pub current_age: u32,

    /// Planned retirement age; accumulation runs through this age inclusive
    pub retire_age: u32,

    /// Balance held today
    pub current_balance: f64,

    /// Contribution added at the end of each accumulation year
    pub annual_contribution: f64,

    /// Accumulation-phase return in percentage points
    pub annual_return_pct: f64,

    /// Income drawn at the start of each decumulation year
    pub desired_annual_income: f64,
}

impl RetirementProfile {
    /// Precondition checks for callers that want hard failures instead of
    /// degenerate timelines. The simulator itself accepts any input;
    /// negative contributions or returns simply accelerate depletion.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.current_age >= self.retire_age {
            return Err(EngineError::InvalidInput(format!(
                "current age {} must be below retirement age {}",
                self.current_age, self.retire_age
            )));
        }
        if self.current_balance < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "starting balance must be non-negative, got {}",
                self.current_balance
            )));
        }
        if self.desired_annual_income < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "desired income must be non-negative, got {}",
                self.desired_annual_income
            )));
        }
        Ok(())
    }
}
