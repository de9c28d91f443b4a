//! Typed quantity: a finite value bound to a unit of one category

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::unit::{ensure_finite, Arithmetic, MeasurementUnit};
use super::value::format_number;
use crate::error::{MeasureError, Result};

/// Absolute tolerance used when comparing base-unit magnitudes
pub const EPSILON: f64 = 1e-6;

/// Scale used to round base values for hashing (6 decimal places)
const HASH_SCALE: f64 = 1e6;

/// A measured value in a unit of category `U`.
///
/// Quantities are immutable and always hold a finite value. Equality is
/// approximate: two quantities are equal when their base-unit magnitudes
/// differ by less than [`EPSILON`], whatever units they are written in.
///
/// `Hash` rounds the base-unit magnitude to six decimals. Two equal
/// quantities whose base values fall on opposite sides of a rounding step
/// (`x.xxxxxx5`) can therefore hash differently; keys that must collide in a
/// `HashSet` should be built from the same unit and value.
///
/// ```
/// use measura_core::{LengthUnit, Quantity};
///
/// let foot = Quantity::new(1.0, LengthUnit::Feet).unwrap();
/// let inches = Quantity::new(12.0, LengthUnit::Inch).unwrap();
/// assert_eq!(foot, inches);
///
/// let sum = foot.add(&inches).unwrap();
/// assert!((sum.value() - 2.0).abs() < 1e-9);
/// ```
///
/// Arithmetic only exists for categories implementing [`Arithmetic`]:
///
/// ```compile_fail
/// use measura_core::{Quantity, TemperatureUnit};
///
/// let a = Quantity::new(10.0, TemperatureUnit::Celsius).unwrap();
/// let b = Quantity::new(20.0, TemperatureUnit::Celsius).unwrap();
/// let _ = a.add(&b);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawQuantity<U>", bound(deserialize = ""))]
pub struct Quantity<U: MeasurementUnit> {
    value: f64,
    unit: U,
}

/// Unvalidated wire form of a [`Quantity`]
#[derive(Deserialize)]
struct RawQuantity<U> {
    value: f64,
    unit: U,
}

impl<U: MeasurementUnit> TryFrom<RawQuantity<U>> for Quantity<U> {
    type Error = MeasureError;

    fn try_from(raw: RawQuantity<U>) -> Result<Self> {
        Quantity::new(raw.value, raw.unit)
    }
}

impl<U: MeasurementUnit> Quantity<U> {
    /// Create a quantity, rejecting NaN and infinities.
    ///
    /// A finite value whose base-unit magnitude overflows (for example
    /// `f64::MAX` yards, which is three times `f64::MAX` feet) is rejected
    /// with [`MeasureError::InvalidValue`] as well.
    pub fn new(value: f64, unit: U) -> Result<Self> {
        unit.to_base(value)?;
        Ok(Self { value, unit })
    }

    /// Create a quantity from a unit ordinal (closed-set membership check)
    pub fn from_ordinal(value: f64, unit: i64) -> Result<Self> {
        let value = ensure_finite(value)?;
        Self::new(value, U::from_ordinal(unit)?)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Magnitude expressed in the category's base unit
    pub fn base_value(&self) -> f64 {
        self.unit.def().conversion.apply_to_base(self.value)
    }

    /// Same magnitude expressed in `target`
    pub fn convert_to(&self, target: U) -> Result<Self> {
        Self::new(self.unit.convert(target, self.value)?, target)
    }

    /// Tolerance equality on base-unit magnitudes
    pub fn equals(&self, other: &Self) -> bool {
        (self.base_value() - other.base_value()).abs() < EPSILON
    }

    fn from_base(base: f64, target: U) -> Result<Self> {
        Self::new(target.from_base(base)?, target)
    }
}

impl<U: Arithmetic> Quantity<U> {
    /// Sum expressed in this quantity's unit
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.add_in(other, self.unit)
    }

    /// Sum expressed in `target`
    pub fn add_in(&self, other: &Self, target: U) -> Result<Self> {
        let sum = ensure_finite(self.base_value() + other.base_value())?;
        Self::from_base(sum, target)
    }

    /// Difference expressed in this quantity's unit
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.subtract_in(other, self.unit)
    }

    /// Difference expressed in `target`
    pub fn subtract_in(&self, other: &Self, target: U) -> Result<Self> {
        let difference = ensure_finite(self.base_value() - other.base_value())?;
        Self::from_base(difference, target)
    }

    /// Dimensionless ratio of the two base-unit magnitudes
    pub fn divide(&self, other: &Self) -> Result<f64> {
        let divisor = other.base_value();
        if divisor == 0.0 {
            return Err(MeasureError::DivisionByZero);
        }
        ensure_finite(self.base_value() / divisor)
    }
}

impl<U: MeasurementUnit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<U: MeasurementUnit> Eq for Quantity<U> {}

impl<U: MeasurementUnit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // `as` saturates; +0 and -0 round to the same integer
        let rounded = (self.base_value() * HASH_SCALE).round() as i64;
        U::CATEGORY.hash(state);
        rounded.hash(state);
    }
}

impl<U: MeasurementUnit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            Quantity::new(f64::NAN, LengthUnit::Feet),
            Err(MeasureError::InvalidValue(_))
        ));
        assert_eq!(
            Quantity::new(f64::INFINITY, WeightUnit::Gram),
            Err(MeasureError::InvalidValue(f64::INFINITY))
        );
    }

    #[test]
    fn test_from_ordinal() {
        let q = Quantity::<LengthUnit>::from_ordinal(3.0, 2).unwrap();
        assert_eq!(q.unit(), LengthUnit::Yard);
        assert!(matches!(
            Quantity::<LengthUnit>::from_ordinal(3.0, 99),
            Err(MeasureError::InvalidUnit { .. })
        ));
        assert!(matches!(
            Quantity::<LengthUnit>::from_ordinal(f64::NAN, 99),
            Err(MeasureError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_convert_to() {
        let q = Quantity::new(100.0, TemperatureUnit::Celsius).unwrap();
        let f = q.convert_to(TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(f.value(), 212.0);
        assert_eq!(f.unit(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_equal_quantities_hash_alike() {
        let a = Quantity::new(1.0, LengthUnit::Feet).unwrap();
        let b = Quantity::new(12.0, LengthUnit::Inch).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let l = Quantity::new(1.0, VolumeUnit::Litre).unwrap();
        let ml = Quantity::new(1000.0, VolumeUnit::Millilitre).unwrap();
        assert_eq!(hash_of(&l), hash_of(&ml));
    }

    #[test]
    fn test_add_defaults_to_left_unit() {
        let a = Quantity::new(1.0, LengthUnit::Feet).unwrap();
        let b = Quantity::new(12.0, LengthUnit::Inch).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.unit(), LengthUnit::Feet);
        assert!((sum.value() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_subtract_in_target() {
        let a = Quantity::new(2.0, WeightUnit::Kilogram).unwrap();
        let b = Quantity::new(500.0, WeightUnit::Gram).unwrap();
        let diff = a.subtract_in(&b, WeightUnit::Gram).unwrap();
        assert_eq!(diff.unit(), WeightUnit::Gram);
        assert!((diff.value() - 1500.0).abs() < EPSILON);
    }

    #[test]
    fn test_divide_by_zero() {
        let a = Quantity::new(2.0, VolumeUnit::Litre).unwrap();
        let zero = Quantity::new(0.0, VolumeUnit::Gallon).unwrap();
        assert_eq!(a.divide(&zero), Err(MeasureError::DivisionByZero));
    }

    #[test]
    fn test_overflowing_sum_is_rejected() {
        let a = Quantity::new(f64::MAX, LengthUnit::Feet).unwrap();
        assert!(matches!(a.add(&a), Err(MeasureError::InvalidValue(_))));
        assert!(matches!(
            Quantity::new(f64::MAX, LengthUnit::Yard),
            Err(MeasureError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_display() {
        let q = Quantity::new(2.5, LengthUnit::Feet).unwrap();
        assert_eq!(q.to_string(), "2.5 ft");
        let t = Quantity::new(-40.0, TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(t.to_string(), "-40 °F");
    }
}
