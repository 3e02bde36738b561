//! Calculator session state
//!
//! Holds the current inputs and the most recent summary between user
//! actions. The projection itself stays a pure function; each calculation
//! replaces the stored summary with a fresh one.

use crate::projection::{downsample, project, SimulationResult, SimulationSummary};
use crate::simulation::SimulationInputs;
use log::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    inputs: SimulationInputs,
    result: Option<SimulationSummary>,
    show_table: bool,
}

impl Calculator {
    pub fn new(inputs: SimulationInputs) -> Self {
        Self {
            inputs,
            result: None,
            show_table: false,
        }
    }

    pub fn inputs(&self) -> &SimulationInputs {
        &self.inputs
    }

    /// Replace the inputs; the previous result stays until the next calculation
    pub fn set_inputs(&mut self, inputs: SimulationInputs) {
        self.inputs = inputs;
    }

    /// Run the projection on the current inputs and store the summary
    pub fn calculate(&mut self) -> &SimulationSummary {
        let summary = project(&self.inputs);
        debug!(
            "calculated {} months: total {:.2}, invested {:.2}",
            summary.total_months(),
            summary.total_amount,
            summary.total_invested
        );
        if !summary.is_finite() {
            warn!("projection overflowed for inputs {:?}", self.inputs);
        }
        self.result.insert(summary)
    }

    /// Reset to cleared inputs and drop the result
    pub fn clear(&mut self) {
        self.inputs = SimulationInputs::cleared();
        self.result = None;
    }

    pub fn result(&self) -> Option<&SimulationSummary> {
        self.result.as_ref()
    }

    pub fn show_table(&self) -> bool {
        self.show_table
    }

    pub fn toggle_table(&mut self) -> bool {
        self.show_table = !self.show_table;
        self.show_table
    }

    /// Downsampled series for a chart (empty before the first calculation)
    pub fn chart_points(&self, max_points: usize) -> Vec<SimulationResult> {
        self.result
            .as_ref()
            .map(|summary| downsample(&summary.results, max_points))
            .unwrap_or_default()
    }

    /// Every row, for the full table
    pub fn table_rows(&self) -> &[SimulationResult] {
        self.result.as_ref().map(|s| s.results.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{PeriodType, RateType};

    #[test]
    fn test_no_result_before_calculate() {
        let calc = Calculator::default();
        assert!(calc.result().is_none());
        assert!(calc.chart_points(40).is_empty());
        assert!(calc.table_rows().is_empty());
    }

    #[test]
    fn test_calculate_stores_fresh_summary() {
        let mut calc = Calculator::default();
        let months = calc.calculate().total_months();
        assert_eq!(months, 120);
        assert_eq!(calc.table_rows().len(), 121);

        calc.set_inputs(SimulationInputs::new(0.0, 100.0, 1.0, RateType::Monthly, 6, PeriodType::Monthly));
        // Stale result kept until recalculated
        assert_eq!(calc.table_rows().len(), 121);

        calc.calculate();
        assert_eq!(calc.table_rows().len(), 7);
        assert_eq!(calc.result().unwrap().total_invested, 600.0);
    }

    #[test]
    fn test_clear() {
        let mut calc = Calculator::default();
        calc.calculate();
        calc.clear();

        assert!(calc.result().is_none());
        assert_eq!(*calc.inputs(), SimulationInputs::cleared());
    }

    #[test]
    fn test_chart_vs_table() {
        let mut calc = Calculator::new(SimulationInputs { period: 30, ..Default::default() });
        calc.calculate();

        let chart = calc.chart_points(40);
        assert!(chart.len() <= 41);
        assert_eq!(chart.last().unwrap().month, 360);
        assert_eq!(calc.table_rows().len(), 361);
    }

    #[test]
    fn test_toggle_table() {
        let mut calc = Calculator::default();
        assert!(!calc.show_table());
        assert!(calc.toggle_table());
        assert!(!calc.toggle_table());
    }
}
