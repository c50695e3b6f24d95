//! Capital projection engines and their shared primitives

pub mod growth;
mod series;
mod shock;

pub use series::{ProjectionPoint, ProjectionSeries};
pub use shock::{project, ShockProjection, ShockScenario};
