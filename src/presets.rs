//! Built-in sandbox content
//!
//! The metric catalogue, decision tree, and default parameters the
//! interactive sandboxes ship with. Embedded as constructors so the CLI
//! and tests run against the same content the site presents.

use crate::decision::{DecisionBranch, DecisionNode, RiskLevel};
use crate::narrative::MetricDefinition;
use crate::projection::ShockScenario;
use crate::retirement::RetirementProfile;

/// The published board-reporting metrics with their full narratives
pub fn board_metrics() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new(
            "liquidity",
            "Liquidity Coverage",
            "Availability of cash for 30-day obligations.",
            "Liquidity remains robust, exceeding the internal corridor of 120%. I am confident \
             that current buffers are sufficient to weather unforeseen redemption volatility \
             without asset liquidation.",
            "Liquidity is currently within the lower bounds of our tolerance (105%). I have \
             initiated a tactical watch and am prepared to rebalance the cash sleeve if \
             redemption rates trend higher in Q2.",
            "Liquidity has breached the 100% threshold. I am executing a mandatory deleveraging \
             protocol to restore baseline stability and am reporting this as a Tier 1 governance \
             incident.",
        ),
        MetricDefinition::new(
            "capital",
            "Retirement Sufficiency",
            "Projected member income vs target replacement.",
            "Outcome projections show 85% of members on track for target sufficiency. My current \
             strategic allocation is delivering predictable real returns in line with 30-year \
             objectives.",
            "Sufficiency has dipped to 72% due to persistent CPI headwinds. I am reviewing the \
             growth-to-defensive ratio to ensure we are not sacrificing long-term purchasing \
             power for short-term stability.",
            "Outcome sufficiency has dropped below the 60% floor. I consider this a systemic \
             failure of the current mandate and am recommending an immediate board review of the \
             strategic asset allocation (SAA).",
        ),
        MetricDefinition::new(
            "esg",
            "Climate Transition Risk",
            "Portfolio exposure to high-carbon transition assets.",
            "Transition risk is well mitigated with 90% alignment to our Net Zero 2040 roadmap. \
             I have successfully rotated out of stranded asset risks without compromising yield.",
            "We are seeing marginal delay in transition benchmarks within the private equity \
             sleeve. I am engaging with fund managers to accelerate decarbonisation targets by \
             year-end.",
            "Transition risk exposure has spiked due to valuation shifts in the energy sector. \
             I am mandating an immediate divestment strategy to protect the long-term integrity \
             of the fund.",
        ),
    ]
}

/// Look up a published metric by id
pub fn board_metric(id: &str) -> Option<MetricDefinition> {
    board_metrics().into_iter().find(|m| m.id == id)
}

/// The published strategic regime shift decision tree
pub fn regime_shift_tree() -> DecisionNode {
    DecisionNode {
        label: "Strategic Regime Shift".to_string(),
        branches: vec![
            DecisionBranch {
                id: 1,
                label: "Aggressive Growth".to_string(),
                probability: 0.6,
                outcome: "High Yield / High Vol".to_string(),
                risk: RiskLevel::Severe,
                narrative: "I pivot the mandate towards emerging tech and private equity to \
                            capture the next super-cycle."
                    .to_string(),
                next: None,
            },
            DecisionBranch {
                id: 2,
                label: "Defensive Protection".to_string(),
                probability: 0.4,
                outcome: "Low Yield / Stability".to_string(),
                risk: RiskLevel::Minimal,
                narrative: "I prioritise purchasing power protection by increasing bond duration \
                            and cash buffers."
                    .to_string(),
                next: None,
            },
        ],
    }
}

/// Default controls of the policy shock sandbox
pub fn default_shock_scenario() -> ShockScenario {
    ShockScenario {
        initial_capital: 1_000_000.0,
        horizon_years: 30,
        annual_yield_pct: 5.0,
        shock_pct: 2.0,
        shock_onset_year: 5,
    }
}

/// Default controls of the member outcome sandbox
pub fn default_retirement_profile() -> RetirementProfile {
    RetirementProfile {
        current_age: 35,
        retire_age: 65,
        current_balance: 150_000.0,
        annual_contribution: 15_000.0,
        annual_return_pct: 7.0,
        desired_annual_income: 80_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision;
    use crate::narrative::{narrate, MetricStatus};
    use approx::assert_relative_eq;

    #[test]
    fn every_metric_narrates_every_status() {
        for metric in board_metrics() {
            for status in MetricStatus::ALL {
                assert!(narrate(&metric, status).is_ok(), "metric {}", metric.id);
            }
        }
    }

    #[test]
    fn metric_ids_are_unique() {
        let metrics = board_metrics();
        for metric in &metrics {
            assert_eq!(metrics.iter().filter(|m| m.id == metric.id).count(), 1);
        }
        assert!(board_metric("liquidity").is_some());
        assert!(board_metric("unknown").is_none());
    }

    #[test]
    fn regime_tree_weights_sum_to_one() {
        let tree = regime_shift_tree();
        assert_relative_eq!(decision::expected_value(&tree, |_| 1.0), 1.0);
    }

    #[test]
    fn regime_tree_branches_are_selectable() {
        let tree = regime_shift_tree();
        let growth = decision::select_branch(&tree, 1).unwrap();
        let defensive = decision::select_branch(&tree, 2).unwrap();

        assert_eq!(growth.risk, crate::decision::RiskLevel::Severe);
        assert_eq!(defensive.risk, crate::decision::RiskLevel::Minimal);
    }

    #[test]
    fn default_inputs_pass_validation() {
        assert!(default_shock_scenario().validate().is_ok());
        assert!(default_retirement_profile().validate().is_ok());
    }
}
