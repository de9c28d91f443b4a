//! Command evaluation

use crate::error::{MeasureError, Result};
use crate::parser::{BinaryOp, Command, Measure};
use crate::types::{AnyQuantity, AnyUnit, Outcome};

/// Evaluate a parsed command
pub fn evaluate(command: &Command) -> Result<Outcome> {
    match command {
        Command::Empty => Ok(Outcome::Empty),
        Command::Show(measure) => Ok(Outcome::Quantity {
            quantity: resolve(measure)?,
        }),
        Command::Convert { quantity, target } => {
            let quantity = resolve(quantity)?.convert_to(resolve_unit(target)?)?;
            Ok(Outcome::Quantity { quantity })
        }
        Command::Binary {
            op,
            left,
            right,
            target,
        } => {
            let (left, right) = (resolve(left)?, resolve(right)?);
            let target = target.as_deref().map(resolve_unit).transpose()?;
            eval_binary_op(*op, &left, &right, target)
        }
    }
}

fn eval_binary_op(
    op: BinaryOp,
    left: &AnyQuantity,
    right: &AnyQuantity,
    target: Option<AnyUnit>,
) -> Result<Outcome> {
    match op {
        BinaryOp::Add => Ok(Outcome::Quantity {
            quantity: left.add(right, target)?,
        }),
        BinaryOp::Subtract => Ok(Outcome::Quantity {
            quantity: left.subtract(right, target)?,
        }),
        BinaryOp::Divide => Ok(Outcome::Ratio {
            value: left.divide(right)?,
        }),
        BinaryOp::Compare => Ok(Outcome::Equality {
            equal: left.equals(right),
        }),
    }
}

fn resolve_unit(word: &str) -> Result<AnyUnit> {
    AnyUnit::parse(word).ok_or_else(|| MeasureError::UnknownUnit(word.to_string()))
}

fn resolve(measure: &Measure) -> Result<AnyQuantity> {
    AnyQuantity::new(measure.value, resolve_unit(&measure.unit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;
    use crate::types::Category;

    fn eval_str(input: &str) -> Result<Outcome> {
        evaluate(&parse_line(input)?)
    }

    #[test]
    fn test_convert() {
        let outcome = eval_str("1 ft in in").unwrap();
        assert!((outcome.as_f64().unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio() {
        let outcome = eval_str("1 ft / 6 in").unwrap();
        assert!(matches!(outcome, Outcome::Ratio { value } if (value - 2.0).abs() < 1e-9));
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            eval_str("-40 c == -40 f").unwrap(),
            Outcome::Equality { equal: true }
        );
        assert_eq!(
            eval_str("1 kg == 1 lb").unwrap(),
            Outcome::Equality { equal: false }
        );
    }

    #[test]
    fn test_compare_across_categories_is_unequal() {
        assert_eq!(
            eval_str("1 ft == 1 kg").unwrap(),
            Outcome::Equality { equal: false }
        );
    }

    #[test]
    fn test_add_across_categories() {
        assert_eq!(
            eval_str("1 ft + 1 kg"),
            Err(MeasureError::IncompatibleCategories {
                left: Category::Length,
                right: Category::Weight,
            })
        );
    }

    #[test]
    fn test_temperature_subtraction_unsupported() {
        assert!(matches!(
            eval_str("30 c - 10 c"),
            Err(MeasureError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            eval_str("3 parsecs"),
            Err(MeasureError::UnknownUnit("parsecs".to_string()))
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(eval_str("").unwrap(), Outcome::Empty);
    }
}
