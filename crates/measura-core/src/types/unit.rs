//! Unit registry: categories, unit metadata and conversions
//!
//! Every category is a closed enum of unit tags backed by a static table of
//! [`UnitDef`] entries, one per variant and in declaration order. To add a
//! unit, add the enum variant and its entry in the category's table; parsing,
//! display and the catalog pick it up automatically.

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, Result};

/// Categories of units. Quantities from different categories never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Volume,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Temperature,
    ];

    /// Whether add/subtract/divide are physically meaningful here
    pub fn supports_arithmetic(self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Temperature => "temperature",
        };
        f.write_str(name)
    }
}

/// Arithmetic operations that are opt-in per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Divide => "division",
        };
        f.write_str(name)
    }
}

/// How a unit maps onto its category's base unit
#[derive(Clone, Copy)]
pub enum Conversion {
    /// `base = value * factor`
    Linear(f64),
    /// Arbitrary affine transform, used by temperature scales
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

impl Conversion {
    pub(crate) fn apply_to_base(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => value * factor,
            Conversion::Affine { to_base, .. } => to_base(value),
        }
    }

    fn apply_from_base(&self, base: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => base / factor,
            Conversion::Affine { from_base, .. } => from_base(base),
        }
    }

    /// True for the identity mapping (the category's base unit)
    pub fn is_identity(&self) -> bool {
        matches!(self, Conversion::Linear(factor) if *factor == 1.0)
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Linear(factor) => f.debug_tuple("Linear").field(factor).finish(),
            Conversion::Affine { .. } => f.write_str("Affine"),
        }
    }
}

/// Unit metadata - single source of truth for each unit
#[derive(Debug)]
pub struct UnitDef<U: 'static> {
    /// The unit enum variant
    pub unit: U,
    /// Short display symbol (e.g., "ft", "kg")
    pub symbol: &'static str,
    /// Full display name (e.g., "feet")
    pub name: &'static str,
    /// Mapping to the category's base unit
    pub conversion: Conversion,
    /// All accepted aliases for parsing (lowercase)
    pub aliases: &'static [&'static str],
}

/// Implemented by every category's unit enum.
///
/// The required items describe the category; everything else is provided in
/// terms of the static [`UnitDef`] table.
pub trait MeasurementUnit:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Category this unit enum belongs to
    const CATEGORY: Category;

    /// The unit with identity conversion
    const BASE: Self;

    /// Registry table, ordered like the enum's variants
    fn definitions() -> &'static [UnitDef<Self>];

    /// Position of this variant in [`MeasurementUnit::definitions`]
    fn ordinal(self) -> usize;

    fn def(self) -> &'static UnitDef<Self> {
        &Self::definitions()[self.ordinal()]
    }

    fn symbol(self) -> &'static str {
        self.def().symbol
    }

    fn name(self) -> &'static str {
        self.def().name
    }

    /// Convert `value` expressed in this unit to the base unit
    fn to_base(self, value: f64) -> Result<f64> {
        let value = ensure_finite(value)?;
        ensure_finite(self.def().conversion.apply_to_base(value))
    }

    /// Convert a base-unit magnitude into this unit
    fn from_base(self, base: f64) -> Result<f64> {
        let base = ensure_finite(base)?;
        ensure_finite(self.def().conversion.apply_from_base(base))
    }

    /// Convert `value` from this unit into `target`.
    ///
    /// Same-unit conversion returns the input untouched.
    fn convert(self, target: Self, value: f64) -> Result<f64> {
        let value = ensure_finite(value)?;
        if self == target {
            return Ok(value);
        }
        target.from_base(self.to_base(value)?)
    }

    /// Look up a unit by its position in the catalog
    fn from_ordinal(ordinal: i64) -> Result<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::definitions().get(i))
            .map(|d| d.unit)
            .ok_or_else(|| MeasureError::invalid_unit(Self::CATEGORY, ordinal))
    }

    /// Parse a unit from its symbol, name or alias (case-insensitive)
    fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::definitions()
            .iter()
            .find(|d| {
                d.symbol.eq_ignore_ascii_case(&lower)
                    || d.name == lower
                    || d.aliases.iter().any(|a| *a == lower)
            })
            .map(|d| d.unit)
    }

    /// Iterator over all units of the category
    fn all() -> impl Iterator<Item = Self> {
        Self::definitions().iter().map(|d| d.unit)
    }
}

/// Capability marker: categories whose quantities can be added, subtracted
/// and divided. Temperature deliberately does not implement it.
pub trait Arithmetic: MeasurementUnit {}

pub(crate) fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeasureError::InvalidValue(value))
    }
}

/// Implements `Display` (symbol), `FromStr` and `TryFrom<i64>` for a unit enum
macro_rules! impl_unit_traits {
    ($unit:ty) => {
        impl ::std::fmt::Display for $unit {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::types::MeasurementUnit::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $unit {
            type Err = $crate::MeasureError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$unit as $crate::types::MeasurementUnit>::parse(s).ok_or_else(|| {
                    $crate::MeasureError::InvalidUnit {
                        category: <$unit as $crate::types::MeasurementUnit>::CATEGORY,
                        unit: s.to_string(),
                    }
                })
            }
        }

        impl ::std::convert::TryFrom<i64> for $unit {
            type Error = $crate::MeasureError;

            fn try_from(ordinal: i64) -> ::std::result::Result<Self, Self::Error> {
                <$unit as $crate::types::MeasurementUnit>::from_ordinal(ordinal)
            }
        }
    };
}

pub(crate) use impl_unit_traits;
