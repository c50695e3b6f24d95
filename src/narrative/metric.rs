//! Metric definitions and traffic-light status grading

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Traffic-light grading of a technical metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Green,
    Amber,
    Red,
}

impl MetricStatus {
    /// Every status, in reporting order
    pub const ALL: [MetricStatus; 3] = [MetricStatus::Green, MetricStatus::Amber, MetricStatus::Red];
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricStatus::Green => write!(f, "green"),
            MetricStatus::Amber => write!(f, "amber"),
            MetricStatus::Red => write!(f, "red"),
        }
    }
}

impl FromStr for MetricStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "green" => Ok(MetricStatus::Green),
            "amber" => Ok(MetricStatus::Amber),
            "red" => Ok(MetricStatus::Red),
            other => Err(format!("unknown status '{other}' (expected green, amber or red)")),
        }
    }
}

/// Narrative text for each status of a metric
///
/// One field per status keeps the mapping exhaustive at compile time: a
/// new status variant cannot be added without `for_status` failing to
/// build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeTemplate {
    pub green: String,
    pub amber: String,
    pub red: String,
}

impl NarrativeTemplate {
    /// Narrative text for one status
    pub fn for_status(&self, status: MetricStatus) -> &str {
        match status {
            MetricStatus::Green => &self.green,
            MetricStatus::Amber => &self.amber,
            MetricStatus::Red => &self.red,
        }
    }
}

/// A board-reportable metric with its narrative templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Stable identifier used by the UI and CLI to select the metric
    pub id: String,

    pub name: String,

    /// One-line description of what the metric measures
    pub description: String,

    pub template: NarrativeTemplate,
}

impl MetricDefinition {
    /// Build a definition with one narrative per status
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        green: impl Into<String>,
        amber: impl Into<String>,
        red: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            template: NarrativeTemplate {
                green: green.into(),
                amber: amber.into(),
                red: red.into(),
            },
        }
    }
}
