//! Outcome timeline produced by the retirement simulator

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase a timeline point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Working years: contributions flow in, full return applies
    Accumulation,
    /// Retirement years: income flows out, reduced return applies
    Decumulation,
}

/// Balance at the member's age within one phase of the timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub age: u32,

    /// Balance rounded to the nearest whole unit of currency, floored at 0
    pub balance: f64,

    pub phase: Phase,
}

/// Headline classification of a simulated outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityRating {
    /// Funded years meet the stability threshold
    HorizonStable,
    /// Capital depletes before the threshold is reached
    ActionRequired,
}

impl fmt::Display for SecurityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityRating::HorizonStable => write!(f, "Horizon Stable"),
            SecurityRating::ActionRequired => write!(f, "Action Required"),
        }
    }
}

/// Complete result of a retirement outcome simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeTimeline {
    /// Per-year balances in age order, accumulation first
    pub points: Vec<TimelinePoint>,

    /// Number of decumulation years the balance stayed positive before
    /// depletion, capped at the simulator's projection window
    pub funded_years: u32,

    /// Classification of `funded_years` against the stability threshold
    pub rating: SecurityRating,
}

impl OutcomeTimeline {
    /// Points belonging to one phase, in age order
    pub fn phase_points(&self, phase: Phase) -> impl Iterator<Item = &TimelinePoint> {
        self.points.iter().filter(move |p| p.phase == phase)
    }

    /// Balance at the start of the retirement year, if simulated
    pub fn balance_at_retirement(&self) -> Option<f64> {
        self.phase_points(Phase::Accumulation)
            .last()
            .map(|p| p.balance)
    }
}
