//! Simulation input structures

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basis of the supplied interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    /// Rate is already per month
    #[serde(alias = "mensal")]
    Monthly,
    /// Rate is per year, de-annualized geometrically
    #[serde(alias = "anual")]
    Yearly,
}

impl RateType {
    /// Convert a percentage rate on this basis to a monthly decimal rate.
    ///
    /// A yearly rate uses the equivalent compound rate `(1 + r)^(1/12) - 1`,
    /// so 12% a year is ~0.9489% a month rather than 1%.
    pub fn monthly_rate(self, interest_rate: f64) -> f64 {
        match self {
            RateType::Yearly => (1.0 + interest_rate / 100.0).powf(1.0 / 12.0) - 1.0,
            RateType::Monthly => interest_rate / 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Monthly => "monthly",
            RateType::Yearly => "yearly",
        }
    }
}

/// Basis of the supplied duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[serde(alias = "mensal")]
    Monthly,
    #[serde(alias = "anual")]
    Yearly,
}

impl PeriodType {
    /// Number of months covered by `period` on this basis (saturates at `u32::MAX`)
    pub fn months(self, period: u32) -> u32 {
        match self {
            PeriodType::Yearly => period.saturating_mul(12),
            PeriodType::Monthly => period,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Monthly => "monthly",
            PeriodType::Yearly => "yearly",
        }
    }
}

fn parse_basis(s: &str) -> Result<bool, SimulationError> {
    // true = yearly
    match s.trim().to_ascii_lowercase().as_str() {
        "monthly" | "month" | "mensal" | "m" => Ok(false),
        "yearly" | "year" | "annual" | "anual" | "y" => Ok(true),
        _ => Err(SimulationError::UnknownBasis(s.trim().to_string())),
    }
}

impl FromStr for RateType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_basis(s)? { RateType::Yearly } else { RateType::Monthly })
    }
}

impl FromStr for PeriodType {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if parse_basis(s)? { PeriodType::Yearly } else { PeriodType::Monthly })
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a single projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Capital available at month 0
    pub initial_value: f64,

    /// Contribution added at the end of every month (negative models a withdrawal)
    pub monthly_value: f64,

    /// Interest rate as a percentage (12.0 means 12%)
    pub interest_rate: f64,

    /// Duration magnitude, interpreted through `period_type`
    pub period: u32,

    pub rate_type: RateType,

    pub period_type: PeriodType,
}

impl SimulationInputs {
    pub fn new(
        initial_value: f64,
        monthly_value: f64,
        interest_rate: f64,
        rate_type: RateType,
        period: u32,
        period_type: PeriodType,
    ) -> Self {
        Self {
            initial_value,
            monthly_value,
            interest_rate,
            period,
            rate_type,
            period_type,
        }
    }

    /// Inputs after the "clear" action: nothing invested, one year horizon
    pub fn cleared() -> Self {
        Self::new(0.0, 0.0, 0.0, RateType::Yearly, 1, PeriodType::Yearly)
    }

    /// Projection horizon in months
    pub fn total_months(&self) -> u32 {
        self.period_type.months(self.period)
    }

    /// Decimal rate applied each month
    pub fn monthly_rate(&self) -> f64 {
        self.rate_type.monthly_rate(self.interest_rate)
    }
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self::new(1000.0, 500.0, 12.0, RateType::Yearly, 10, PeriodType::Yearly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yearly_rate_is_geometric() {
        let rate = RateType::Yearly.monthly_rate(12.0);
        assert_relative_eq!(rate, 0.009488792934583046, epsilon = 1e-12);
        assert!((rate - 0.01).abs() > 1e-4);

        // Twelve monthly steps compound back to the annual rate
        assert_relative_eq!((1.0 + rate).powi(12), 1.12, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_rate_passthrough() {
        assert_eq!(RateType::Monthly.monthly_rate(1.0), 0.01);
        assert_eq!(RateType::Monthly.monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_period_months() {
        assert_eq!(PeriodType::Yearly.months(10), 120);
        assert_eq!(PeriodType::Monthly.months(10), 10);
        assert_eq!(PeriodType::Yearly.months(0), 0);
        assert_eq!(PeriodType::Yearly.months(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_basis_parsing() {
        assert_eq!("yearly".parse::<RateType>().unwrap(), RateType::Yearly);
        assert_eq!(" Monthly ".parse::<RateType>().unwrap(), RateType::Monthly);
        assert_eq!("anual".parse::<PeriodType>().unwrap(), PeriodType::Yearly);
        assert_eq!("mensal".parse::<PeriodType>().unwrap(), PeriodType::Monthly);
        assert!(matches!(
            "weekly".parse::<PeriodType>(),
            Err(SimulationError::UnknownBasis(label)) if label == "weekly"
        ));
    }

    #[test]
    fn test_basis_serde_lowercase() {
        let json = serde_json::to_string(&RateType::Yearly).unwrap();
        assert_eq!(json, "\"yearly\"");
        let parsed: PeriodType = serde_json::from_str("\"anual\"").unwrap();
        assert_eq!(parsed, PeriodType::Yearly);
    }

    #[test]
    fn test_defaults_and_cleared() {
        let inputs = SimulationInputs::default();
        assert_eq!(inputs.total_months(), 120);
        assert_eq!(inputs.initial_value, 1000.0);
        assert_eq!(inputs.monthly_value, 500.0);

        let cleared = SimulationInputs::cleared();
        assert_eq!(cleared.total_months(), 12);
        assert_eq!(cleared.monthly_rate(), 0.0);
        assert_eq!(cleared.initial_value, 0.0);
    }
}
