//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// 0 = initial state
    pub month: u32,

    /// Interest earned during this month (0 for month 0)
    pub interest: f64,

    /// Cumulative principal, initial capital included
    pub total_invested: f64,

    /// Cumulative interest
    pub total_interest: f64,

    /// End-of-month balance
    pub total_amount: f64,
}

impl SimulationResult {
    /// Row describing the investment before any month has elapsed
    pub fn initial(initial_value: f64) -> Self {
        Self {
            month: 0,
            interest: 0.0,
            total_invested: initial_value,
            total_interest: 0.0,
            total_amount: initial_value,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.interest.is_finite()
            && self.total_invested.is_finite()
            && self.total_interest.is_finite()
            && self.total_amount.is_finite()
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Final balance
    pub total_amount: f64,

    /// Final principal contributed
    pub total_invested: f64,

    /// Final accumulated interest
    pub total_interest: f64,

    /// Every month from 0 to the horizon, in order
    pub results: Vec<SimulationResult>,
}

impl SimulationSummary {
    /// Build a summary whose headline totals mirror the last row
    pub fn from_rows(results: Vec<SimulationResult>) -> Self {
        let last = results.last().copied().unwrap_or(SimulationResult::initial(0.0));
        Self {
            total_amount: last.total_amount,
            total_invested: last.total_invested,
            total_interest: last.total_interest,
            results,
        }
    }

    /// Months projected (rows minus the initial state)
    pub fn total_months(&self) -> u32 {
        self.results.last().map(|r| r.month).unwrap_or(0)
    }

    /// False when overflow produced NaN or infinite values anywhere
    pub fn is_finite(&self) -> bool {
        self.total_amount.is_finite()
            && self.total_invested.is_finite()
            && self.total_interest.is_finite()
            && self.results.iter().all(SimulationResult::is_finite)
    }

    /// Share of the final balance that came from interest
    pub fn interest_share(&self) -> f64 {
        if self.total_amount == 0.0 {
            0.0
        } else {
            self.total_interest / self.total_amount
        }
    }
}
