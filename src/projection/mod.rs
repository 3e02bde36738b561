//! Projection engine for monthly compound interest schedules

mod state;
mod engine;
mod results;
pub mod downsample;

pub use state::ProjectionState;
pub use engine::project;
pub use results::{SimulationResult, SimulationSummary};
pub use downsample::{downsample, DEFAULT_MAX_CHART_POINTS};
