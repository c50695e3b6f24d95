//! Retirement outcome simulator
//!
//! Runs a single balance through two phases: accumulation from the current
//! age through the retirement age, then decumulation until the balance
//! depletes or the projection window closes. The decumulation phase uses a
//! return rate reduced by a fixed drag, modeling a more conservative
//! post-retirement allocation.

use serde::{Deserialize, Serialize};

use super::profile::RetirementProfile;
use super::timeline::{OutcomeTimeline, Phase, SecurityRating, TimelinePoint};
use crate::projection::growth;

/// Policy constants for a simulation run
///
/// Extracted into a config so the thresholds are auditable and testable in
/// isolation rather than buried in the projection loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Maximum number of decumulation years to project
    pub decumulation_window_years: u32,

    /// Percentage points shaved off the accumulation return after retirement
    pub post_retirement_return_drag_pct: f64,

    /// Funded-years threshold at or above which the outcome rates as stable
    pub stable_funded_years: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            decumulation_window_years: 40,
            post_retirement_return_drag_pct: 2.0,
            stable_funded_years: 25,
        }
    }
}

/// Main retirement outcome engine
#[derive(Debug, Clone, Default)]
pub struct OutcomeSimulator {
    config: SimulatorConfig,
}

impl OutcomeSimulator {
    /// Create a simulator with explicit policy constants
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run both phases over a single running balance.
    ///
    /// Accumulation emits one point per age from the current age through
    /// the retirement age inclusive, each showing the start-of-year balance
    /// before that year's growth and contribution. Decumulation emits one
    /// point per funded year showing the post-withdrawal, post-growth
    /// balance floored at 0, and stops without emitting once the balance
    /// is exhausted.
    pub fn simulate(&self, profile: &RetirementProfile) -> OutcomeTimeline {
        let years_to_retire = profile.retire_age.saturating_sub(profile.current_age);
        let window = self.config.decumulation_window_years;

        let mut points = Vec::with_capacity((years_to_retire + 1 + window) as usize);
        let mut balance = profile.current_balance;

        for offset in 0..=years_to_retire {
            points.push(TimelinePoint {
                age: profile.current_age + offset,
                balance: balance.round(),
                phase: Phase::Accumulation,
            });
            balance = growth::compound(balance, profile.annual_return_pct)
                + profile.annual_contribution;
        }

        let mut funded_years = 0;
        for year in 1..=window {
            if balance <= 0.0 {
                break;
            }
            funded_years += 1;
            balance = growth::compound_with_drag(
                (balance - profile.desired_annual_income).max(0.0),
                profile.annual_return_pct,
                self.config.post_retirement_return_drag_pct,
            );
            points.push(TimelinePoint {
                age: profile.retire_age + year,
                balance: balance.max(0.0).round(),
                phase: Phase::Decumulation,
            });
        }

        let rating = if funded_years >= self.config.stable_funded_years {
            SecurityRating::HorizonStable
        } else {
            SecurityRating::ActionRequired
        };

        OutcomeTimeline {
            points,
            funded_years,
            rating,
        }
    }
}

/// Run a simulation with the default policy constants
pub fn simulate(profile: &RetirementProfile) -> OutcomeTimeline {
    OutcomeSimulator::default().simulate(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn sample_profile() -> RetirementProfile {
        RetirementProfile {
            current_age: 35,
            retire_age: 65,
            current_balance: 150_000.0,
            annual_contribution: 15_000.0,
            annual_return_pct: 7.0,
            desired_annual_income: 80_000.0,
        }
    }

    #[test]
    fn sample_profile_fills_the_full_window() {
        let timeline = simulate(&sample_profile());

        assert_eq!(timeline.phase_points(Phase::Accumulation).count(), 31);
        assert_eq!(timeline.funded_years, 40);
        assert_eq!(timeline.rating, SecurityRating::HorizonStable);
        assert_eq!(timeline.points.len(), 31 + 40);
    }

    #[test]
    fn accumulation_ages_run_through_retirement_inclusive() {
        let timeline = simulate(&sample_profile());
        let ages: Vec<u32> = timeline
            .phase_points(Phase::Accumulation)
            .map(|p| p.age)
            .collect();

        assert_eq!(ages.first(), Some(&35));
        assert_eq!(ages.last(), Some(&65));
    }

    #[test]
    fn heavy_drawdown_depletes_before_the_window() {
        let profile = RetirementProfile {
            current_balance: 50_000.0,
            annual_contribution: 2_000.0,
            annual_return_pct: 3.0,
            desired_annual_income: 90_000.0,
            ..sample_profile()
        };
        let timeline = simulate(&profile);

        assert!(timeline.funded_years < 40);
        assert_eq!(timeline.rating, SecurityRating::ActionRequired);

        // The final decumulation point shows an exhausted balance.
        let last = timeline.phase_points(Phase::Decumulation).last().unwrap();
        assert_eq!(last.balance, 0.0);
    }

    #[test]
    fn zero_income_never_depletes() {
        let profile = RetirementProfile {
            desired_annual_income: 0.0,
            ..sample_profile()
        };
        let timeline = simulate(&profile);

        assert_eq!(timeline.funded_years, 40);
    }

    #[test]
    fn config_thresholds_drive_the_rating() {
        let strict = OutcomeSimulator::new(SimulatorConfig {
            stable_funded_years: 41,
            ..SimulatorConfig::default()
        });
        let timeline = strict.simulate(&sample_profile());

        // 40 funded years cannot satisfy a 41-year threshold.
        assert_eq!(timeline.rating, SecurityRating::ActionRequired);
    }

    #[test]
    fn shorter_window_caps_funded_years() {
        let short = OutcomeSimulator::new(SimulatorConfig {
            decumulation_window_years: 10,
            ..SimulatorConfig::default()
        });
        let timeline = short.simulate(&sample_profile());

        assert_eq!(timeline.funded_years, 10);
        assert_eq!(timeline.phase_points(Phase::Decumulation).count(), 10);
    }

    proptest! {
        #[test]
        fn prop_funded_years_bounded_by_window(
            current_age in 20u32..60,
            span in 1u32..40,
            balance in 0u32..2_000_000,
            contribution in 0u32..60_000,
            return_bp in -300i32..1500,
            income in 0u32..200_000,
        ) {
            let profile = RetirementProfile {
                current_age,
                retire_age: current_age + span,
                current_balance: balance as f64,
                annual_contribution: contribution as f64,
                annual_return_pct: return_bp as f64 / 100.0,
                desired_annual_income: income as f64,
            };
            let timeline = simulate(&profile);

            prop_assert!(timeline.funded_years <= 40);
            prop_assert_eq!(
                timeline.phase_points(Phase::Decumulation).count(),
                timeline.funded_years as usize
            );
            prop_assert_eq!(
                timeline.phase_points(Phase::Accumulation).count(),
                span as usize + 1
            );
        }

        #[test]
        fn prop_accumulation_is_monotone_for_positive_growth(
            balance in 0u32..2_000_000,
            contribution in 0u32..60_000,
            return_bp in 0u32..1500,
        ) {
            let profile = RetirementProfile {
                current_age: 30,
                retire_age: 60,
                current_balance: balance as f64,
                annual_contribution: contribution as f64,
                annual_return_pct: return_bp as f64 / 100.0,
                desired_annual_income: 50_000.0,
            };
            let timeline = simulate(&profile);

            let balances: Vec<f64> = timeline
                .phase_points(Phase::Accumulation)
                .map(|p| p.balance)
                .collect();
            for pair in balances.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
            }
        }

        #[test]
        fn prop_simulation_is_idempotent(
            balance in 0u32..2_000_000,
            contribution in 0u32..60_000,
            return_bp in -300i32..1500,
            income in 0u32..200_000,
        ) {
            let profile = RetirementProfile {
                current_age: 40,
                retire_age: 67,
                current_balance: balance as f64,
                annual_contribution: contribution as f64,
                annual_return_pct: return_bp as f64 / 100.0,
                desired_annual_income: income as f64,
            };
            prop_assert_eq!(simulate(&profile), simulate(&profile));
        }
    }
}
