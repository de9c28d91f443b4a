//! Command AST and its construction from pest pairs

use pest::iterators::{Pair, Pairs};

use super::Rule;
use crate::error::{MeasureError, Result};

/// A number with a unit word, before the unit is resolved
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: String,
}

/// One parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank line or comment
    Empty,
    /// Echo a quantity
    Show(Measure),
    /// `3 ft in cm`
    Convert { quantity: Measure, target: String },
    /// `a + b`, `a - b` (optional target), `a / b`, `a == b`
    Binary {
        op: BinaryOp,
        left: Measure,
        right: Measure,
        target: Option<String>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Divide,
    Compare,
}

/// Parse a number string, stripping comma separators (e.g., "1,234" -> 1234)
pub(super) fn parse_number_str(s: &str) -> Result<f64> {
    let cleaned = s.replace(',', "");
    cleaned
        .parse::<f64>()
        .map_err(|e| MeasureError::Parse(format!("invalid number '{s}': {e}")))
}

/// Build a command from the pairs of a successful `line` parse
pub fn build_command(pairs: Pairs<'_, Rule>) -> Result<Command> {
    for pair in pairs {
        if pair.as_rule() != Rule::line {
            continue;
        }
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::quantity => return Ok(Command::Show(build_measure(inner)?)),
                Rule::conversion => return build_conversion(inner),
                Rule::binary => return build_binary(inner),
                _ => {}
            }
        }
    }
    Ok(Command::Empty)
}

fn build_measure(pair: Pair<'_, Rule>) -> Result<Measure> {
    let mut value = None;
    let mut unit = None;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::number => value = Some(parse_number_str(p.as_str())?),
            Rule::unit => unit = Some(p.as_str().to_string()),
            _ => {}
        }
    }
    match (value, unit) {
        (Some(value), Some(unit)) => Ok(Measure { value, unit }),
        _ => Err(MeasureError::Parse("expected a number and a unit".to_string())),
    }
}

fn suffix_target(pair: Pair<'_, Rule>) -> Option<String> {
    pair.into_inner()
        .find(|p| p.as_rule() == Rule::unit)
        .map(|p| p.as_str().to_string())
}

fn build_conversion(pair: Pair<'_, Rule>) -> Result<Command> {
    let mut quantity = None;
    let mut target = None;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::quantity => quantity = Some(build_measure(p)?),
            Rule::conversion_suffix => target = suffix_target(p),
            _ => {}
        }
    }
    match (quantity, target) {
        (Some(quantity), Some(target)) => Ok(Command::Convert { quantity, target }),
        _ => Err(MeasureError::Parse("expected a conversion target".to_string())),
    }
}

fn build_binary(pair: Pair<'_, Rule>) -> Result<Command> {
    let mut operands = Vec::with_capacity(2);
    let mut op = None;
    let mut target = None;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::quantity => operands.push(build_measure(p)?),
            Rule::add => op = Some(BinaryOp::Add),
            Rule::subtract => op = Some(BinaryOp::Subtract),
            Rule::divide => op = Some(BinaryOp::Divide),
            Rule::compare => op = Some(BinaryOp::Compare),
            Rule::conversion_suffix => target = suffix_target(p),
            _ => {}
        }
    }

    let op = op.ok_or_else(|| MeasureError::Parse("expected an operator".to_string()))?;
    if target.is_some() && matches!(op, BinaryOp::Divide | BinaryOp::Compare) {
        return Err(MeasureError::Parse(
            "a target unit only applies to + and -".to_string(),
        ));
    }

    let mut operands = operands.into_iter();
    match (operands.next(), operands.next()) {
        (Some(left), Some(right)) => Ok(Command::Binary {
            op,
            left,
            right,
            target,
        }),
        _ => Err(MeasureError::Parse("expected two quantities".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_str() {
        assert_eq!(parse_number_str("1,234.5").unwrap(), 1234.5);
        assert_eq!(parse_number_str("-2.54").unwrap(), -2.54);
        assert_eq!(parse_number_str("1e3").unwrap(), 1000.0);
        assert!(parse_number_str("abc").is_err());
    }
}
