//! Evaluation results and number formatting

use serde::Serialize;

use super::any::AnyQuantity;

/// Decimal places shown unless the caller asks otherwise
pub const DEFAULT_PRECISION: usize = 6;

/// Result of evaluating one command line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outcome {
    /// A quantity (shown, converted, or the result of +/-)
    Quantity { quantity: AnyQuantity },
    /// Dimensionless ratio from a division
    Ratio { value: f64 },
    /// Result of an equality comparison
    Equality { equal: bool },
    /// Blank line or comment
    Empty,
}

impl Outcome {
    /// Check if outcome is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    /// Numeric part of the outcome, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Outcome::Quantity { quantity } => Some(quantity.value()),
            Outcome::Ratio { value } => Some(*value),
            Outcome::Equality { .. } | Outcome::Empty => None,
        }
    }

    /// Format with `precision` decimal places (trailing zeros trimmed)
    pub fn render(&self, precision: usize) -> String {
        match self {
            Outcome::Quantity { quantity } => format!(
                "{} {}",
                format_with_precision(quantity.value(), precision),
                quantity.unit().symbol()
            ),
            Outcome::Ratio { value } => format_with_precision(*value, precision),
            Outcome::Equality { equal: true } => "equal".to_string(),
            Outcome::Equality { equal: false } => "not equal".to_string(),
            Outcome::Empty => String::new(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_PRECISION))
    }
}

/// Format a number with the default precision
pub fn format_number(n: f64) -> String {
    format_with_precision(n, DEFAULT_PRECISION)
}

/// Round to `precision` decimals, dropping trailing zeros and a bare "-0"
pub fn format_with_precision(n: f64, precision: usize) -> String {
    let fixed = format!("{n:.precision$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
