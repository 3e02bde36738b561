//! Currency and percentage formatting for display
//!
//! Amounts are only rounded here, never inside the projection.

use serde::{Deserialize, Serialize};

/// How to render a monetary amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount
    pub symbol: String,

    pub decimal_separator: char,

    pub thousands_separator: char,

    /// Digits after the decimal separator
    pub decimals: usize,

    /// Whether a space separates symbol and digits
    pub symbol_spacing: bool,
}

impl CurrencyFormat {
    /// Brazilian real, `R$ 1.234,56`
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
            decimals: 2,
            symbol_spacing: true,
        }
    }

    /// US dollar, `$1,234.56`
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            decimals: 2,
            symbol_spacing: false,
        }
    }

    fn prefix(&self, negative: bool) -> String {
        let sign = if negative { "-" } else { "" };
        let space = if self.symbol_spacing { " " } else { "" };
        format!("{}{}{}", sign, self.symbol, space)
    }

    /// Format an amount, e.g. `R$ 1.234,56` or `-R$ 10,00`
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return format!("{}NaN", self.prefix(false));
        }
        if value.is_infinite() {
            return format!("{}∞", self.prefix(value < 0.0));
        }

        let digits = format!("{:.*}", self.decimals, value.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = group_thousands(whole, self.thousands_separator);
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }

        // No "-R$ 0,00" for values that round to zero
        let negative = value < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0');
        format!("{}{}", self.prefix(negative), out)
    }

    /// Short axis label, e.g. `R$ 12k` or `R$ 1,5M`
    pub fn format_compact(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.format(value);
        }

        // Bucket on the rounded magnitude so 999.7 becomes 1k, not 1000
        let abs_value = value.abs();
        let body = if abs_value.round() < 1_000.0 {
            format!("{:.0}", abs_value)
        } else if (abs_value / 1_000.0).round() < 1_000.0 {
            format!("{:.0}k", abs_value / 1_000.0)
        } else {
            format!("{:.1}M", abs_value / 1_000_000.0)
        };
        let body = body.replace('.', &self.decimal_separator.to_string());

        let negative = value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
        format!("{}{}", self.prefix(negative), body)
    }

    /// Format a decimal rate as a percentage, e.g. `0.0094888` -> `0,95%`
    pub fn format_rate(&self, rate: f64) -> String {
        let pct = format!("{:.2}%", rate * 100.0);
        pct.replace('.', &self.decimal_separator.to_string())
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

/// Insert a separator every three digits from the right
fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brl() {
        let brl = CurrencyFormat::brl();
        assert_eq!(brl.format(0.0), "R$ 0,00");
        assert_eq!(brl.format(1234.56), "R$ 1.234,56");
        assert_eq!(brl.format(7443.248954176592), "R$ 7.443,25");
        assert_eq!(brl.format(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(brl.format(-10.0), "-R$ 10,00");
        assert_eq!(brl.format(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_usd() {
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.format(1234567.891), "$1,234,567.89");
        assert_eq!(usd.format(-0.5), "-$0.50");
    }

    #[test]
    fn test_rounds_to_zero_without_sign() {
        assert_eq!(CurrencyFormat::brl().format(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_non_finite() {
        let brl = CurrencyFormat::brl();
        assert_eq!(brl.format(f64::NAN), "R$ NaN");
        assert_eq!(brl.format(f64::INFINITY), "R$ ∞");
        assert_eq!(brl.format(f64::NEG_INFINITY), "-R$ ∞");
    }

    #[test]
    fn test_zero_decimals() {
        let fmt = CurrencyFormat { decimals: 0, ..CurrencyFormat::usd() };
        assert_eq!(fmt.format(1234.4), "$1,234");
    }

    #[test]
    fn test_compact() {
        let brl = CurrencyFormat::brl();
        assert_eq!(brl.format_compact(12_000.0), "R$ 12k");
        assert_eq!(brl.format_compact(1_500_000.0), "R$ 1,5M");
        assert_eq!(brl.format_compact(850.0), "R$ 850");
    }

    #[test]
    fn test_compact_bucket_boundaries() {
        let brl = CurrencyFormat::brl();
        assert_eq!(brl.format_compact(999_999.0), "R$ 1,0M");
        assert_eq!(brl.format_compact(999.7), "R$ 1k");
        assert_eq!(brl.format_compact(999.4), "R$ 999");
        assert_eq!(brl.format_compact(999_400.0), "R$ 999k");
        assert_eq!(brl.format_compact(-999_999.0), "-R$ 1,0M");
    }

    #[test]
    fn test_rate() {
        assert_eq!(CurrencyFormat::brl().format_rate(0.009488792934583046), "0,95%");
        assert_eq!(CurrencyFormat::usd().format_rate(0.01), "1.00%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", '.'), "1.234");
        assert_eq!(group_thousands("123456", ','), "123,456");
    }
}
