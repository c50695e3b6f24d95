//! Retirement outcome simulation over accumulation and decumulation phases

mod profile;
mod simulator;
mod timeline;

pub use profile::RetirementProfile;
pub use simulator::{simulate, OutcomeSimulator, SimulatorConfig};
pub use timeline::{OutcomeTimeline, Phase, SecurityRating, TimelinePoint};
