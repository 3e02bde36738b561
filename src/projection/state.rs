//! Running balance tracked while projecting

use super::results::SimulationResult;
use crate::simulation::SimulationInputs;

/// State of the investment at the end of a month
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months elapsed (0 = initial state)
    pub month: u32,

    /// Balance after interest and contribution
    pub balance: f64,

    /// Principal contributed so far, initial capital included
    pub invested: f64,

    /// Interest accumulated so far
    pub accumulated_interest: f64,

    /// Decimal rate applied each month
    pub monthly_rate: f64,

    /// Contribution added at the end of each month
    pub monthly_value: f64,
}

impl ProjectionState {
    /// Initialize state at month 0
    pub fn from_inputs(inputs: &SimulationInputs) -> Self {
        Self {
            month: 0,
            balance: inputs.initial_value,
            invested: inputs.initial_value,
            accumulated_interest: 0.0,
            monthly_rate: inputs.monthly_rate(),
            monthly_value: inputs.monthly_value,
        }
    }

    /// Advance one month and return the interest earned in it.
    ///
    /// Interest accrues on the opening balance; the contribution lands
    /// afterwards and earns nothing until next month.
    pub fn advance_month(&mut self) -> f64 {
        let interest = self.balance * self.monthly_rate;

        self.month += 1;
        self.accumulated_interest += interest;
        self.invested += self.monthly_value;
        self.balance = self.balance + interest + self.monthly_value;

        interest
    }

    /// Snapshot the current state as an output row
    pub fn row(&self, interest: f64) -> SimulationResult {
        SimulationResult {
            month: self.month,
            interest,
            total_invested: self.invested,
            total_interest: self.accumulated_interest,
            total_amount: self.balance,
        }
    }
}
