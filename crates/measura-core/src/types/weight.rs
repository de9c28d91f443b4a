//! Weight units (base: kilogram)

use serde::{Deserialize, Serialize};

use super::unit::{impl_unit_traits, Arithmetic, Category, Conversion, MeasurementUnit, UnitDef};

/// Pounds per kilogram
const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Supported weight units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
    Tonne,
}

/// Weight registry, ordered like [`WeightUnit`]
pub static WEIGHT_UNITS: &[UnitDef<WeightUnit>] = &[
    UnitDef {
        unit: WeightUnit::Kilogram,
        symbol: "kg",
        name: "kilogram",
        conversion: Conversion::Linear(1.0),
        aliases: &["kg", "kilo", "kilos", "kilogram", "kilograms"],
    },
    UnitDef {
        unit: WeightUnit::Gram,
        symbol: "g",
        name: "gram",
        conversion: Conversion::Linear(0.001),
        aliases: &["g", "gram", "grams"],
    },
    UnitDef {
        unit: WeightUnit::Pound,
        symbol: "lb",
        name: "pound",
        conversion: Conversion::Linear(1.0 / POUNDS_PER_KILOGRAM),
        aliases: &["lb", "lbs", "pound", "pounds"],
    },
    UnitDef {
        unit: WeightUnit::Ounce,
        symbol: "oz",
        name: "ounce",
        conversion: Conversion::Linear(1.0 / POUNDS_PER_KILOGRAM / 16.0),
        aliases: &["oz", "ounce", "ounces"],
    },
    UnitDef {
        unit: WeightUnit::Tonne,
        symbol: "t",
        name: "tonne",
        conversion: Conversion::Linear(1000.0),
        aliases: &["t", "tonne", "tonnes"],
    },
];

impl MeasurementUnit for WeightUnit {
    const CATEGORY: Category = Category::Weight;
    const BASE: Self = WeightUnit::Kilogram;

    fn definitions() -> &'static [UnitDef<Self>] {
        WEIGHT_UNITS
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Arithmetic for WeightUnit {}

impl_unit_traits!(WeightUnit);
