//! Core projection engine for monthly compound interest schedules

use super::results::{SimulationResult, SimulationSummary};
use super::state::ProjectionState;
use crate::simulation::SimulationInputs;

/// Project the balance month by month.
///
/// The output always holds `total_months + 1` rows, month 0 being the
/// initial capital. No rounding is applied and overflow propagates as
/// NaN/infinity rather than panicking; see [`SimulationSummary::is_finite`].
pub fn project(inputs: &SimulationInputs) -> SimulationSummary {
    let total_months = inputs.total_months();
    let mut state = ProjectionState::from_inputs(inputs);

    let mut results = Vec::with_capacity(total_months as usize + 1);
    results.push(SimulationResult::initial(inputs.initial_value));

    for _month in 1..=total_months {
        let interest = state.advance_month();
        results.push(state.row(interest));
    }

    SimulationSummary {
        total_amount: state.balance,
        total_invested: state.invested,
        total_interest: state.accumulated_interest,
        results,
    }
}
