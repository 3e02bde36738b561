//! Display configuration
//!
//! Loaded from JSON; every field falls back to its default so a partial
//! file like `{"max_chart_points": 60}` is valid.

use crate::error::Result;
use crate::format::CurrencyFormat;
use crate::projection::DEFAULT_MAX_CHART_POINTS;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency rendering (defaults to BRL)
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Cap on points sent to a chart
    #[serde(default = "default_max_chart_points")]
    pub max_chart_points: usize,
}

fn default_max_chart_points() -> usize { DEFAULT_MAX_CHART_POINTS }

impl DisplayConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        debug!("loading display config from {}", path.display());
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            max_chart_points: DEFAULT_MAX_CHART_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DisplayConfig::from_json_str("{}").unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_partial_currency_override() {
        let config = DisplayConfig::from_json_str(
            r#"{"currency": {"symbol": "€", "symbol_spacing": false}, "max_chart_points": 60}"#,
        )
        .unwrap();

        assert_eq!(config.max_chart_points, 60);
        assert_eq!(config.currency.symbol, "€");
        // Unspecified fields keep the BRL defaults
        assert_eq!(config.currency.decimal_separator, ',');
        assert_eq!(config.currency.format(1234.5), "€1.234,50");
    }

    #[test]
    fn test_invalid_json() {
        let err = DisplayConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SimulationError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DisplayConfig::from_json_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, SimulationError::Io(_)));
    }
}
