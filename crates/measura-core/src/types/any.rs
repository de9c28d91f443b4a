//! Runtime-category units and quantities
//!
//! The typed [`Quantity<U>`] API rejects category mixing at compile time.
//! Front ends that only learn the category from user input (a unit word typed
//! at a prompt) go through [`AnyUnit`] and [`AnyQuantity`] instead, which
//! perform the same checks at runtime.

use std::fmt;

use serde::Serialize;

use super::quantity::Quantity;
use super::unit::{Arithmetic, Category, MeasurementUnit, Operation};
use super::{LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};
use crate::error::{MeasureError, Result};

/// A unit from any category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", content = "unit", rename_all = "lowercase")]
pub enum AnyUnit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Volume(VolumeUnit),
    Temperature(TemperatureUnit),
}

impl AnyUnit {
    /// Resolve a unit word against every catalog
    pub fn parse(s: &str) -> Option<AnyUnit> {
        LengthUnit::parse(s)
            .map(AnyUnit::Length)
            .or_else(|| WeightUnit::parse(s).map(AnyUnit::Weight))
            .or_else(|| VolumeUnit::parse(s).map(AnyUnit::Volume))
            .or_else(|| TemperatureUnit::parse(s).map(AnyUnit::Temperature))
    }

    pub fn category(self) -> Category {
        match self {
            AnyUnit::Length(_) => Category::Length,
            AnyUnit::Weight(_) => Category::Weight,
            AnyUnit::Volume(_) => Category::Volume,
            AnyUnit::Temperature(_) => Category::Temperature,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AnyUnit::Length(u) => u.symbol(),
            AnyUnit::Weight(u) => u.symbol(),
            AnyUnit::Volume(u) => u.symbol(),
            AnyUnit::Temperature(u) => u.symbol(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnyUnit::Length(u) => u.name(),
            AnyUnit::Weight(u) => u.name(),
            AnyUnit::Volume(u) => u.name(),
            AnyUnit::Temperature(u) => u.name(),
        }
    }

    /// Every unit of every category, grouped by category
    pub fn all() -> impl Iterator<Item = AnyUnit> {
        LengthUnit::all()
            .map(AnyUnit::Length)
            .chain(WeightUnit::all().map(AnyUnit::Weight))
            .chain(VolumeUnit::all().map(AnyUnit::Volume))
            .chain(TemperatureUnit::all().map(AnyUnit::Temperature))
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

macro_rules! any_unit_from {
    ($unit:ty, $variant:ident) => {
        impl From<$unit> for AnyUnit {
            fn from(unit: $unit) -> Self {
                AnyUnit::$variant(unit)
            }
        }

        impl From<Quantity<$unit>> for AnyQuantity {
            fn from(quantity: Quantity<$unit>) -> Self {
                AnyQuantity::$variant(quantity)
            }
        }

        impl TryFrom<AnyUnit> for $unit {
            type Error = MeasureError;

            fn try_from(unit: AnyUnit) -> Result<Self> {
                match unit {
                    AnyUnit::$variant(u) => Ok(u),
                    other => Err(MeasureError::IncompatibleCategories {
                        left: <$unit as MeasurementUnit>::CATEGORY,
                        right: other.category(),
                    }),
                }
            }
        }
    };
}

any_unit_from!(LengthUnit, Length);
any_unit_from!(WeightUnit, Weight);
any_unit_from!(VolumeUnit, Volume);
any_unit_from!(TemperatureUnit, Temperature);

/// A quantity from any category
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum AnyQuantity {
    Length(Quantity<LengthUnit>),
    Weight(Quantity<WeightUnit>),
    Volume(Quantity<VolumeUnit>),
    Temperature(Quantity<TemperatureUnit>),
}

impl AnyQuantity {
    /// Build a quantity, validating the value
    pub fn new(value: f64, unit: AnyUnit) -> Result<Self> {
        Ok(match unit {
            AnyUnit::Length(u) => AnyQuantity::Length(Quantity::new(value, u)?),
            AnyUnit::Weight(u) => AnyQuantity::Weight(Quantity::new(value, u)?),
            AnyUnit::Volume(u) => AnyQuantity::Volume(Quantity::new(value, u)?),
            AnyUnit::Temperature(u) => AnyQuantity::Temperature(Quantity::new(value, u)?),
        })
    }

    pub fn value(&self) -> f64 {
        match self {
            AnyQuantity::Length(q) => q.value(),
            AnyQuantity::Weight(q) => q.value(),
            AnyQuantity::Volume(q) => q.value(),
            AnyQuantity::Temperature(q) => q.value(),
        }
    }

    pub fn unit(&self) -> AnyUnit {
        match self {
            AnyQuantity::Length(q) => q.unit().into(),
            AnyQuantity::Weight(q) => q.unit().into(),
            AnyQuantity::Volume(q) => q.unit().into(),
            AnyQuantity::Temperature(q) => q.unit().into(),
        }
    }

    pub fn category(&self) -> Category {
        self.unit().category()
    }

    pub fn convert_to(&self, target: AnyUnit) -> Result<AnyQuantity> {
        match self {
            AnyQuantity::Length(q) => Ok(q.convert_to(target.try_into()?)?.into()),
            AnyQuantity::Weight(q) => Ok(q.convert_to(target.try_into()?)?.into()),
            AnyQuantity::Volume(q) => Ok(q.convert_to(target.try_into()?)?.into()),
            AnyQuantity::Temperature(q) => Ok(q.convert_to(target.try_into()?)?.into()),
        }
    }

    /// Tolerance equality; quantities of different categories are never equal
    pub fn equals(&self, other: &AnyQuantity) -> bool {
        match (self, other) {
            (AnyQuantity::Length(a), AnyQuantity::Length(b)) => a.equals(b),
            (AnyQuantity::Weight(a), AnyQuantity::Weight(b)) => a.equals(b),
            (AnyQuantity::Volume(a), AnyQuantity::Volume(b)) => a.equals(b),
            (AnyQuantity::Temperature(a), AnyQuantity::Temperature(b)) => a.equals(b),
            _ => false,
        }
    }

    /// Sum, expressed in `target` or else in this quantity's unit
    pub fn add(&self, other: &AnyQuantity, target: Option<AnyUnit>) -> Result<AnyQuantity> {
        self.combine(other, target, Combine::Add)
    }

    /// Difference, expressed in `target` or else in this quantity's unit
    pub fn subtract(&self, other: &AnyQuantity, target: Option<AnyUnit>) -> Result<AnyQuantity> {
        self.combine(other, target, Combine::Subtract)
    }

    /// Dimensionless ratio of the base-unit magnitudes
    pub fn divide(&self, other: &AnyQuantity) -> Result<f64> {
        match (self, other) {
            (AnyQuantity::Length(a), AnyQuantity::Length(b)) => a.divide(b),
            (AnyQuantity::Weight(a), AnyQuantity::Weight(b)) => a.divide(b),
            (AnyQuantity::Volume(a), AnyQuantity::Volume(b)) => a.divide(b),
            _ => Err(self.arithmetic_error(other, Operation::Divide)),
        }
    }

    fn combine(
        &self,
        other: &AnyQuantity,
        target: Option<AnyUnit>,
        op: Combine,
    ) -> Result<AnyQuantity> {
        match (self, other) {
            (AnyQuantity::Length(a), AnyQuantity::Length(b)) => apply(a, b, target, op),
            (AnyQuantity::Weight(a), AnyQuantity::Weight(b)) => apply(a, b, target, op),
            (AnyQuantity::Volume(a), AnyQuantity::Volume(b)) => apply(a, b, target, op),
            _ => Err(self.arithmetic_error(other, op.operation())),
        }
    }

    /// Error for operand pairs the arithmetic arms don't cover
    fn arithmetic_error(&self, other: &AnyQuantity, operation: Operation) -> MeasureError {
        let (left, right) = (self.category(), other.category());
        if left != right {
            MeasureError::IncompatibleCategories { left, right }
        } else {
            MeasureError::UnsupportedOperation {
                operation,
                category: left,
            }
        }
    }
}

/// Operations that produce a quantity rather than a ratio
#[derive(Clone, Copy)]
enum Combine {
    Add,
    Subtract,
}

impl Combine {
    fn operation(self) -> Operation {
        match self {
            Combine::Add => Operation::Add,
            Combine::Subtract => Operation::Subtract,
        }
    }
}

fn apply<U>(
    a: &Quantity<U>,
    b: &Quantity<U>,
    target: Option<AnyUnit>,
    op: Combine,
) -> Result<AnyQuantity>
where
    U: Arithmetic + TryFrom<AnyUnit, Error = MeasureError>,
    AnyQuantity: From<Quantity<U>>,
{
    let target = match target {
        Some(t) => <U as TryFrom<AnyUnit>>::try_from(t)?,
        None => a.unit(),
    };
    let result = match op {
        Combine::Add => a.add_in(b, target)?,
        Combine::Subtract => a.subtract_in(b, target)?,
    };
    Ok(result.into())
}

impl PartialEq for AnyQuantity {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyQuantity::Length(q) => fmt::Display::fmt(q, f),
            AnyQuantity::Weight(q) => fmt::Display::fmt(q, f),
            AnyQuantity::Volume(q) => fmt::Display::fmt(q, f),
            AnyQuantity::Temperature(q) => fmt::Display::fmt(q, f),
        }
    }
}
