//! Strategy Lab CLI
//!
//! Runs each sandbox engine from the command line with the same defaults
//! the interactive site ships with.

use clap::{Parser, Subcommand};

use strategy_lab::decision;
use strategy_lab::narrative::{self, MetricStatus};
use strategy_lab::presets;
use strategy_lab::projection::{self, ShockScenario};
use strategy_lab::retirement::{OutcomeSimulator, Phase, RetirementProfile, SimulatorConfig};
use strategy_lab::EngineError;

#[derive(Parser)]
#[command(name = "strategy_lab", version, about = "Deterministic strategy sandbox engines")]
struct Cli {
    /// Emit results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project base vs shocked capital paths
    Shock {
        #[arg(long, default_value_t = 1_000_000.0)]
        capital: f64,
        #[arg(long, default_value_t = 30)]
        horizon: u32,
        /// Annual yield in percentage points
        #[arg(long, default_value_t = 5.0)]
        yield_pct: f64,
        /// Sustained erosion shock in percentage points
        #[arg(long, default_value_t = 2.0)]
        shock_pct: f64,
        /// Year the shock starts applying
        #[arg(long, default_value_t = 5)]
        onset: u32,
    },
    /// Simulate accumulation and decumulation of a retirement balance
    Retire {
        #[arg(long, default_value_t = 35)]
        age: u32,
        #[arg(long, default_value_t = 65)]
        retire_age: u32,
        #[arg(long, default_value_t = 150_000.0)]
        balance: f64,
        #[arg(long, default_value_t = 15_000.0)]
        contribution: f64,
        /// Accumulation return in percentage points
        #[arg(long, default_value_t = 7.0)]
        return_pct: f64,
        #[arg(long, default_value_t = 80_000.0)]
        income: f64,
    },
    /// Resolve a decision path through the regime shift tree
    Tree {
        /// Branch ids, one per level; omit to list the available branches
        path: Vec<u32>,
    },
    /// Render the board narrative for a metric at a status
    Narrate {
        /// Metric id (liquidity, capital or esg)
        #[arg(long)]
        metric: String,
        /// Status: green, amber or red
        #[arg(long)]
        status: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EngineError> {
    match cli.command {
        Command::Shock {
            capital,
            horizon,
            yield_pct,
            shock_pct,
            onset,
        } => {
            let scenario = ShockScenario {
                initial_capital: capital,
                horizon_years: horizon,
                annual_yield_pct: yield_pct,
                shock_pct,
                shock_onset_year: onset,
            };
            scenario.validate()?;
            run_shock(&scenario, cli.json);
        }
        Command::Retire {
            age,
            retire_age,
            balance,
            contribution,
            return_pct,
            income,
        } => {
            let profile = RetirementProfile {
                current_age: age,
                retire_age,
                current_balance: balance,
                annual_contribution: contribution,
                annual_return_pct: return_pct,
                desired_annual_income: income,
            };
            profile.validate()?;
            run_retire(&profile, cli.json);
        }
        Command::Tree { path } => run_tree(&path, cli.json)?,
        Command::Narrate { metric, status } => run_narrate(&metric, &status, cli.json)?,
    }
    Ok(())
}

fn run_shock(scenario: &ShockScenario, json: bool) {
    log::debug!("projecting {} years", scenario.horizon_years);
    let result = projection::project(scenario);

    if json {
        println!("{}", serde_json::to_string_pretty(&result).expect("serializable result"));
        return;
    }

    println!("Capital projection ({} years):", scenario.horizon_years);
    println!("{:>5} {:>16} {:>16} {:>16}", "Year", "Base", "Shocked", "Delta");
    println!("{}", "-".repeat(56));
    for (base, shocked) in result.base.points().iter().zip(result.shocked.points()) {
        println!(
            "{:>5} {:>16.0} {:>16.0} {:>16.0}",
            base.period,
            base.value,
            shocked.value,
            shocked.value - base.value,
        );
    }
    println!("\nTerminal impact: {:.1}%", result.terminal_impact_pct());
}

fn run_retire(profile: &RetirementProfile, json: bool) {
    log::debug!(
        "simulating ages {}..{} plus decumulation",
        profile.current_age,
        profile.retire_age
    );
    let simulator = OutcomeSimulator::new(SimulatorConfig::default());
    let timeline = simulator.simulate(profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline).expect("serializable timeline"));
        return;
    }

    println!("Member outcome timeline:");
    println!("{:>5} {:>16} {:>14}", "Age", "Balance", "Phase");
    println!("{}", "-".repeat(38));
    for point in &timeline.points {
        let phase = match point.phase {
            Phase::Accumulation => "accumulation",
            Phase::Decumulation => "decumulation",
        };
        println!("{:>5} {:>16.0} {:>14}", point.age, point.balance, phase);
    }

    println!("\nSummary:");
    println!("  Funded Years: {}", timeline.funded_years);
    println!("  Security Rating: {}", timeline.rating);
    if let Some(at_retirement) = timeline.balance_at_retirement() {
        println!("  Balance At Retirement: ${:.0}", at_retirement);
    }
}

fn run_tree(path: &[u32], json: bool) -> Result<(), EngineError> {
    let tree = presets::regime_shift_tree();

    if path.is_empty() {
        println!("Decision: {}", tree.label);
        for branch in &tree.branches {
            println!(
                "  [{}] {} ({:.0}% prob, {:?} risk) -> {}",
                branch.id,
                branch.label,
                branch.probability * 100.0,
                branch.risk,
                branch.outcome,
            );
        }
        return Ok(());
    }

    let branch = decision::resolve_path(&tree, path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(branch).expect("serializable branch"));
        return Ok(());
    }

    println!("Path analysis: {}", branch.label);
    println!("  Probability: {:.0}%", branch.probability * 100.0);
    println!("  Expected Outcome: {}", branch.outcome);
    println!("  Tail Risk: {:?}", branch.risk);
    println!("  Rationale: {}", branch.narrative);
    Ok(())
}

fn run_narrate(metric_id: &str, status: &str, json: bool) -> Result<(), EngineError> {
    let status: MetricStatus = status
        .parse()
        .map_err(EngineError::InvalidInput)?;
    let metric = presets::board_metric(metric_id).ok_or_else(|| {
        EngineError::InvalidInput(format!(
            "unknown metric '{metric_id}' (expected liquidity, capital or esg)"
        ))
    })?;

    let text = narrative::narrate(&metric, status)?;
    if json {
        let payload = serde_json::json!({
            "metric": metric.id,
            "name": metric.name,
            "status": status,
            "narrative": text,
        });
        println!("{}", serde_json::to_string_pretty(&payload).expect("serializable payload"));
        return Ok(());
    }

    println!("{} [{}]", metric.name, status);
    println!("{}", "-".repeat(metric.name.len() + status.to_string().len() + 3));
    println!("{text}");
    Ok(())
}
