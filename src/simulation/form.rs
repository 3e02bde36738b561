//! Text form coercion
//!
//! Front ends collect raw text. Blank or unparsable numbers become 0 here
//! so the projection engine only ever sees numeric inputs.

use super::{PeriodType, RateType, SimulationInputs};

/// Parse a numeric field, coercing blank, invalid and non-finite text to 0
pub fn coerce_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a duration field. Fractional values truncate toward zero and
/// negative values clamp to 0.
pub fn coerce_period(text: &str) -> u32 {
    period_from_f64(coerce_number(text))
}

/// Truncate a numeric duration to whole units, clamping negative and
/// non-finite values to 0
pub fn period_from_f64(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let value = value.trunc();
    if value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Raw form state as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationForm {
    pub initial_value: String,
    pub monthly_value: String,
    pub interest_rate: String,
    pub period: String,
    pub rate_type: RateType,
    pub period_type: PeriodType,
}

impl SimulationForm {
    /// Prefill the form from existing inputs
    pub fn from_inputs(inputs: &SimulationInputs) -> Self {
        Self {
            initial_value: inputs.initial_value.to_string(),
            monthly_value: inputs.monthly_value.to_string(),
            interest_rate: inputs.interest_rate.to_string(),
            period: inputs.period.to_string(),
            rate_type: inputs.rate_type,
            period_type: inputs.period_type,
        }
    }

    /// Coerce every field into engine inputs
    pub fn to_inputs(&self) -> SimulationInputs {
        SimulationInputs {
            initial_value: coerce_number(&self.initial_value),
            monthly_value: coerce_number(&self.monthly_value),
            interest_rate: coerce_number(&self.interest_rate),
            period: coerce_period(&self.period),
            rate_type: self.rate_type,
            period_type: self.period_type,
        }
    }
}

impl Default for SimulationForm {
    fn default() -> Self {
        Self::from_inputs(&SimulationInputs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("1000"), 1000.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number("-250"), -250.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn test_coerce_period() {
        assert_eq!(coerce_period("10"), 10);
        assert_eq!(coerce_period("2.9"), 2);
        assert_eq!(coerce_period("-3"), 0);
        assert_eq!(coerce_period(""), 0);
        assert_eq!(coerce_period("1e12"), u32::MAX);
    }

    #[test]
    fn test_period_from_f64() {
        assert_eq!(period_from_f64(2.5), 2);
        assert_eq!(period_from_f64(-0.5), 0);
        assert_eq!(period_from_f64(f64::NAN), 0);
        assert_eq!(period_from_f64(f64::INFINITY), 0);
    }

    #[test]
    fn test_form_to_inputs() {
        let form = SimulationForm {
            initial_value: "".to_string(),
            monthly_value: "300".to_string(),
            interest_rate: "1".to_string(),
            period: "24".to_string(),
            rate_type: RateType::Monthly,
            period_type: PeriodType::Monthly,
        };

        let inputs = form.to_inputs();
        assert_eq!(inputs.initial_value, 0.0);
        assert_eq!(inputs.monthly_value, 300.0);
        assert_eq!(inputs.monthly_rate(), 0.01);
        assert_eq!(inputs.total_months(), 24);
    }

    #[test]
    fn test_default_form_matches_default_inputs() {
        assert_eq!(SimulationForm::default().to_inputs(), SimulationInputs::default());
    }
}
