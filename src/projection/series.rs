//! Projection output structures
//!
//! Series values are rounded to the nearest whole unit of currency when a
//! point is emitted; the engines keep their running balances unrounded so
//! rounding error never compounds.

use serde::{Deserialize, Serialize};

/// A single projected value at an annual period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Periods elapsed since the start of the projection (period 0 = today)
    pub period: u32,

    /// Projected value, rounded to the nearest whole unit of currency
    pub value: f64,
}

/// Ordered sequence of projection points, one per period
///
/// Insertion order is period order; a projection over `horizon` years holds
/// `horizon + 1` points, period 0 inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    /// Create an empty series sized for a known number of periods
    pub fn with_capacity(periods: usize) -> Self {
        Self {
            points: Vec::with_capacity(periods),
        }
    }

    /// Append a point, rounding the value for display
    pub fn push(&mut self, period: u32, value: f64) {
        self.points.push(ProjectionPoint {
            period,
            value: value.round(),
        });
    }

    /// All points in period order
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value at the final period, if any points exist
    pub fn last_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }

    /// Value at a specific period
    pub fn value_at(&self, period: u32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.period == period)
            .map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rounds_for_display() {
        let mut series = ProjectionSeries::with_capacity(2);
        series.push(0, 1000.4);
        series.push(1, 1050.5);

        assert_eq!(series.value_at(0), Some(1000.0));
        assert_eq!(series.value_at(1), Some(1051.0));
        assert_eq!(series.last_value(), Some(1051.0));
    }

    #[test]
    fn empty_series_has_no_values() {
        let series = ProjectionSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.last_value(), None);
        assert_eq!(series.value_at(0), None);
    }
}
