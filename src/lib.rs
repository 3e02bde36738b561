//! Compound Projection - month-by-month growth of an investment with
//! periodic contributions and compound interest
//!
//! This library provides:
//! - The projection engine (rate de-annualization and the monthly recurrence)
//! - Input coercion for form-driven front ends and CSV scenario loading
//! - Chart downsampling, currency formatting and CSV/JSON export
//! - A parallel batch runner for comparing scenarios

pub mod error;
pub mod simulation;
pub mod projection;
pub mod calculator;
pub mod config;
pub mod export;
pub mod format;
pub mod scenario;

// Re-export commonly used types
pub use error::{Result, SimulationError};
pub use simulation::{PeriodType, RateType, SimulationInputs};
pub use projection::{project, SimulationResult, SimulationSummary};
pub use calculator::Calculator;
pub use config::DisplayConfig;
pub use format::CurrencyFormat;
pub use scenario::ScenarioRunner;
