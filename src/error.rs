//! Error types shared by the sandbox engines
//!
//! The taxonomy is deliberately small: the engines operate on
//! caller-validated input and surface every failure immediately.

use crate::narrative::MetricStatus;
use thiserror::Error;

/// Errors raised by the sandbox engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A precondition on engine input was violated.
    ///
    /// Only produced by the explicit `validate()` entry points; the engines
    /// themselves accept any numeric input and let degenerate projections
    /// (negative balances, zero horizons) run to completion.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A branch id did not match any child at the level being resolved.
    #[error("no branch with id {branch_id} at depth {depth}")]
    BranchNotFound { branch_id: u32, depth: usize },

    /// A metric carried no narrative for the requested status.
    ///
    /// Unreachable for definitions built through `MetricDefinition::new`
    /// with non-empty templates; kept as a defensive check.
    #[error("metric '{metric_id}' has no narrative for {status} status")]
    MissingTemplate {
        metric_id: String,
        status: MetricStatus,
    },
}
