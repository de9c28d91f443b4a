//! Measurement service: the narrow surface front ends call into

use tracing::{debug, trace};

use crate::error::{MeasureError, Result};
use crate::eval;
use crate::parser::{parse_line, parse_number};
use crate::types::{AnyUnit, Arithmetic, Category, MeasurementUnit, Outcome, Quantity};

/// Façade over the registry and [`Quantity`] operations.
///
/// Binary operations accept absent operands so prompt-driven callers can pass
/// whatever they managed to collect; a missing operand is
/// [`MeasureError::InvalidOperand`] rather than a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementService;

impl MeasurementService {
    pub fn new() -> Self {
        Self
    }

    /// Convert a raw value between two units of the same category
    pub fn convert_value<U: MeasurementUnit>(&self, value: f64, source: U, target: U) -> Result<f64> {
        trace!(value, %source, %target, "convert_value");
        source.convert(target, value)
    }

    /// Convert a raw value between units given by catalog ordinal
    pub fn convert_value_by_ordinal<U: MeasurementUnit>(
        &self,
        value: f64,
        source: i64,
        target: i64,
    ) -> Result<f64> {
        let (source, target) = (U::from_ordinal(source)?, U::from_ordinal(target)?);
        self.convert_value(value, source, target)
    }

    /// Tolerance equality; `false` when either side is absent
    pub fn are_quantities_equal<U: MeasurementUnit>(
        &self,
        a: Option<&Quantity<U>>,
        b: Option<&Quantity<U>>,
    ) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.equals(b),
            _ => false,
        }
    }

    /// Sum in the first operand's unit
    pub fn add_quantities<U: Arithmetic>(
        &self,
        a: Option<&Quantity<U>>,
        b: Option<&Quantity<U>>,
    ) -> Result<Quantity<U>> {
        let (a, b) = operands(a, b)?;
        trace!(%a, %b, "add_quantities");
        a.add(b)
    }

    /// Sum in `target`
    pub fn add_quantities_with_target<U: Arithmetic>(
        &self,
        a: Option<&Quantity<U>>,
        b: Option<&Quantity<U>>,
        target: U,
    ) -> Result<Quantity<U>> {
        let (a, b) = operands(a, b)?;
        trace!(%a, %b, %target, "add_quantities_with_target");
        a.add_in(b, target)
    }

    /// Difference in the first operand's unit
    pub fn subtract_quantities<U: Arithmetic>(
        &self,
        a: Option<&Quantity<U>>,
        b: Option<&Quantity<U>>,
    ) -> Result<Quantity<U>> {
        let (a, b) = operands(a, b)?;
        trace!(%a, %b, "subtract_quantities");
        a.subtract(b)
    }

    /// Difference in `target`
    pub fn subtract_quantities_with_target<U: Arithmetic>(
        &self,
        a: Option<&Quantity<U>>,
        b: Option<&Quantity<U>>,
        target: U,
    ) -> Result<Quantity<U>> {
        let (a, b) = operands(a, b)?;
        trace!(%a, %b, %target, "subtract_quantities_with_target");
        a.subtract_in(b, target)
    }

    /// Dimensionless ratio `a / b`
    pub fn divide_quantities<U: Arithmetic>(
        &self,
        a: Option<&Quantity<U>>,
        b: Option<&Quantity<U>>,
    ) -> Result<f64> {
        let (a, b) = operands(a, b)?;
        trace!(%a, %b, "divide_quantities");
        a.divide(b)
    }

    /// Best-effort parse of prompt input.
    ///
    /// Returns `None` for blank, non-numeric or non-finite text instead of
    /// an error; malformed interactive input is routine.
    pub fn parse_input<U: MeasurementUnit>(&self, text: &str, unit: U) -> Option<Quantity<U>> {
        let parsed = parse_number(text.trim()).and_then(|value| Quantity::new(value, unit).ok());
        if parsed.is_none() {
            trace!(text, "input is not a usable number");
        }
        parsed
    }

    /// Parse and evaluate one command line
    ///
    /// ```
    /// use measura_core::MeasurementService;
    ///
    /// let service = MeasurementService::new();
    /// let outcome = service.evaluate("100 c in f").unwrap();
    /// assert_eq!(outcome.to_string(), "212 °F");
    /// ```
    pub fn evaluate(&self, input: &str) -> Result<Outcome> {
        let command = parse_line(input)?;
        debug!(input, ?command, "evaluating");
        let outcome = eval::evaluate(&command);
        if let Err(e) = &outcome {
            debug!(input, error = %e, "evaluation failed");
        }
        outcome
    }

    /// Unit catalog grouped by category, in declaration order
    pub fn catalog(&self) -> Vec<(Category, Vec<AnyUnit>)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let units = AnyUnit::all().filter(|u| u.category() == category).collect();
                (category, units)
            })
            .collect()
    }
}

fn operands<'a, U: MeasurementUnit>(
    a: Option<&'a Quantity<U>>,
    b: Option<&'a Quantity<U>>,
) -> Result<(&'a Quantity<U>, &'a Quantity<U>)> {
    match (a, b) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(MeasureError::InvalidOperand),
    }
}
