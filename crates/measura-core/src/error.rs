//! Error type shared by every fallible measurement operation

use thiserror::Error;

use crate::types::{Category, Operation};

/// Convenience alias used throughout the crate
pub type Result<T, E = MeasureError> = std::result::Result<T, E>;

/// Everything that can go wrong while building or combining quantities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    /// NaN or an infinite value reached a constructor or the registry
    #[error("value must be a finite number, got {0}")]
    InvalidValue(f64),

    /// A unit code or name outside the category's closed set
    #[error("unknown {category} unit: {unit}")]
    InvalidUnit { category: Category, unit: String },

    /// A binary operation was called without its second quantity
    #[error("operation requires a second quantity")]
    InvalidOperand,

    /// The divisor resolves to zero in the base unit
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic on a category that has no physical meaning for it
    #[error("{operation} is not supported for {category} quantities")]
    UnsupportedOperation {
        operation: Operation,
        category: Category,
    },

    /// Operands or target unit from different categories
    #[error("cannot combine {left} with {right}")]
    IncompatibleCategories { left: Category, right: Category },

    /// A unit word that matches no catalog at all
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Malformed command line
    #[error("parse error: {0}")]
    Parse(String),
}

impl MeasureError {
    pub(crate) fn invalid_unit(category: Category, unit: impl ToString) -> Self {
        MeasureError::InvalidUnit {
            category,
            unit: unit.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MeasureError::InvalidValue(f64::NAN).to_string(),
            "value must be a finite number, got NaN"
        );
        assert_eq!(
            MeasureError::invalid_unit(Category::Length, 99).to_string(),
            "unknown length unit: 99"
        );
        assert_eq!(
            MeasureError::UnsupportedOperation {
                operation: Operation::Add,
                category: Category::Temperature,
            }
            .to_string(),
            "addition is not supported for temperature quantities"
        );
    }
}
