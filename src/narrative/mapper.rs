//! Status-to-narrative mapping
//!
//! Pure table lookup from a metric's graded status to its board narrative.
//! Identical inputs always produce identical text, so generated board
//! packs are reproducible.

use super::metric::{MetricDefinition, MetricStatus};
use crate::error::EngineError;

/// Return the board narrative for a metric at the given status.
///
/// Reports `MissingTemplate` when the stored narrative is empty, the only
/// way a status can lack coverage under the exhaustive template struct.
pub fn narrate(metric: &MetricDefinition, status: MetricStatus) -> Result<&str, EngineError> {
    let text = metric.template.for_status(status);
    if text.is_empty() {
        return Err(EngineError::MissingTemplate {
            metric_id: metric.id.clone(),
            status,
        });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrate_returns_exact_template_text() {
        let metric = MetricDefinition::new("m", "Metric", "desc", "A", "B", "C");

        assert_eq!(narrate(&metric, MetricStatus::Green), Ok("A"));
        assert_eq!(narrate(&metric, MetricStatus::Amber), Ok("B"));
        assert_eq!(narrate(&metric, MetricStatus::Red), Ok("C"));
    }

    #[test]
    fn narrate_is_referentially_transparent() {
        let metric = MetricDefinition::new("m", "Metric", "desc", "A", "B", "C");
        for status in MetricStatus::ALL {
            assert_eq!(narrate(&metric, status), narrate(&metric, status));
        }
    }

    #[test]
    fn empty_template_reports_missing() {
        let metric = MetricDefinition::new("m", "Metric", "desc", "A", "", "C");

        let err = narrate(&metric, MetricStatus::Amber).unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingTemplate {
                metric_id: "m".to_string(),
                status: MetricStatus::Amber,
            }
        );
    }
}
