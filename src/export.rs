//! CSV and JSON writers for projection output

use crate::error::Result;
use crate::projection::{SimulationResult, SimulationSummary};
use serde::Serialize;
use std::io::Write;

/// Headline totals for one named scenario
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow<'a> {
    pub name: &'a str,
    pub months: u32,
    pub total_invested: f64,
    pub total_interest: f64,
    pub total_amount: f64,
}

/// Write every row, unrounded, with a header line
pub fn write_results_csv<W: Write>(writer: W, rows: &[SimulationResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the full summary as pretty JSON
pub fn write_summary_json<W: Write>(writer: W, summary: &SimulationSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

/// Write one headline row per scenario
pub fn write_batch_csv<W: Write>(writer: W, results: &[(String, SimulationSummary)]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (name, summary) in results {
        csv_writer.serialize(BatchRow {
            name,
            months: summary.total_months(),
            total_invested: summary.total_invested,
            total_interest: summary.total_interest,
            total_amount: summary.total_amount,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
