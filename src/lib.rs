//! Strategy Lab - deterministic projection and narrative engines
//!
//! This library provides the four calculation engines behind the
//! interactive strategy sandboxes:
//! - Policy shock projection (base vs shocked capital paths)
//! - Retirement outcome simulation (accumulation and decumulation phases)
//! - Weighted decision tree evaluation with path-based lookup
//! - Status-to-narrative mapping for board reporting
//!
//! Every engine is a pure, synchronous function of its inputs: no I/O, no
//! shared state, no randomness. Callers re-run an engine on every parameter
//! change and render the result; nothing persists between calls.

pub mod decision;
pub mod error;
pub mod narrative;
pub mod presets;
pub mod projection;
pub mod retirement;

// Re-export commonly used types
pub use decision::{DecisionBranch, DecisionNode, RiskLevel};
pub use error::EngineError;
pub use narrative::{MetricDefinition, MetricStatus, NarrativeTemplate};
pub use projection::{ProjectionPoint, ProjectionSeries, ShockProjection, ShockScenario};
pub use retirement::{OutcomeSimulator, OutcomeTimeline, RetirementProfile, SimulatorConfig};
