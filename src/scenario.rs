//! Scenario runner for batch projections
//!
//! Projections share no state, so a batch fans out across the rayon pool
//! and results come back in input order.

use crate::projection::{project, SimulationSummary};
use crate::simulation::{Scenario, SimulationInputs};
use log::{info, warn};
use rayon::prelude::*;

/// Headline totals for side-by-side comparison
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioComparison {
    pub name: String,
    pub total_months: u32,
    pub monthly_rate: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    pub total_amount: f64,
    /// Share of the final amount that came from interest
    pub interest_share: f64,
}

/// Batch runner over many sets of inputs
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Run sequentially instead of on the rayon pool
    sequential: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that never uses the thread pool
    pub fn sequential() -> Self {
        Self { sequential: true }
    }

    /// Run a single projection
    pub fn run(&self, inputs: &SimulationInputs) -> SimulationSummary {
        project(inputs)
    }

    /// Run projections for many inputs, preserving order
    pub fn run_batch(&self, inputs: &[SimulationInputs]) -> Vec<SimulationSummary> {
        if self.sequential {
            inputs.iter().map(project).collect()
        } else {
            inputs.par_iter().map(project).collect()
        }
    }

    /// Run named scenarios, pairing each name with its summary
    pub fn run_scenarios(&self, scenarios: &[Scenario]) -> Vec<(String, SimulationSummary)> {
        info!("running {} scenarios", scenarios.len());
        let inputs: Vec<SimulationInputs> = scenarios.iter().map(|s| s.inputs).collect();

        scenarios
            .iter()
            .zip(self.run_batch(&inputs))
            .map(|(scenario, summary)| {
                if !summary.is_finite() {
                    warn!("scenario '{}' produced non-finite values", scenario.name);
                }
                (scenario.name.clone(), summary)
            })
            .collect()
    }

    /// Headline totals for each scenario, without the monthly rows
    pub fn compare(&self, scenarios: &[Scenario]) -> Vec<ScenarioComparison> {
        Self::compare_results(scenarios, &self.run_scenarios(scenarios))
    }

    /// Headline totals from summaries already produced by [`Self::run_scenarios`]
    pub fn compare_results(
        scenarios: &[Scenario],
        results: &[(String, SimulationSummary)],
    ) -> Vec<ScenarioComparison> {
        scenarios
            .iter()
            .zip(results)
            .map(|(scenario, (name, summary))| ScenarioComparison {
                name: name.clone(),
                total_months: scenario.inputs.total_months(),
                monthly_rate: scenario.inputs.monthly_rate(),
                total_invested: summary.total_invested,
                total_interest: summary.total_interest,
                total_amount: summary.total_amount,
                interest_share: summary.interest_share(),
            })
            .collect()
    }
}
