//! Load named scenarios from CSV
//!
//! Expected columns:
//! `name,initial_value,monthly_value,interest_rate,period,rate_type,period_type`

use super::{period_from_f64, PeriodType, RateType, SimulationInputs};
use crate::error::{Result, SimulationError};
use csv::Reader;
use log::debug;
use std::path::Path;

/// A labelled set of inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub inputs: SimulationInputs,
}

/// Raw CSV row; bases stay as text so errors can name the offending row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    initial_value: f64,
    monthly_value: f64,
    interest_rate: f64,
    /// Fractional periods truncate toward zero
    period: f64,
    rate_type: String,
    period_type: String,
}

impl CsvRow {
    fn into_scenario(self, row: usize) -> Result<Scenario> {
        let rate_type: RateType = self.rate_type.parse().map_err(|e: SimulationError| {
            SimulationError::InvalidRow { row, reason: e.to_string() }
        })?;
        let period_type: PeriodType = self.period_type.parse().map_err(|e: SimulationError| {
            SimulationError::InvalidRow { row, reason: e.to_string() }
        })?;

        Ok(Scenario {
            name: self.name,
            inputs: SimulationInputs {
                initial_value: self.initial_value,
                monthly_value: self.monthly_value,
                interest_rate: self.interest_rate,
                period: period_from_f64(self.period),
                rate_type,
                period_type,
            },
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    debug!("loading scenarios from {}", path.display());
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // 1-indexed data row, header excluded
        scenarios.push(row.into_scenario(idx + 1)?);
    }

    debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
