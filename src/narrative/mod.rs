//! Status-to-narrative mapping for board reporting

mod mapper;
mod metric;

pub use mapper::narrate;
pub use metric::{MetricDefinition, MetricStatus, NarrativeTemplate};
