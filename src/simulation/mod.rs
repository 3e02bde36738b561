//! Simulation inputs, form coercion and scenario loading

mod data;
pub mod form;
pub mod loader;

pub use data::{PeriodType, RateType, SimulationInputs};
pub use form::{coerce_number, coerce_period, period_from_f64, SimulationForm};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
