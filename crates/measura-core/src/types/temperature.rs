//! Temperature scales (base: Celsius)
//!
//! Conversions here are affine, so the category does not implement
//! [`Arithmetic`](super::Arithmetic).

use serde::{Deserialize, Serialize};

use super::unit::{impl_unit_traits, Category, Conversion, MeasurementUnit, UnitDef};

const KELVIN_OFFSET: f64 = 273.15;

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * (5.0 / 9.0)
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * (9.0 / 5.0) + 32.0
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

/// Temperature registry, ordered like [`TemperatureUnit`]
pub static TEMPERATURE_UNITS: &[UnitDef<TemperatureUnit>] = &[
    UnitDef {
        unit: TemperatureUnit::Celsius,
        symbol: "°C",
        name: "celsius",
        conversion: Conversion::Linear(1.0),
        aliases: &["c", "°c", "degc", "celsius"],
    },
    UnitDef {
        unit: TemperatureUnit::Fahrenheit,
        symbol: "°F",
        name: "fahrenheit",
        conversion: Conversion::Affine {
            to_base: fahrenheit_to_celsius,
            from_base: celsius_to_fahrenheit,
        },
        aliases: &["f", "°f", "degf", "fahrenheit"],
    },
    UnitDef {
        unit: TemperatureUnit::Kelvin,
        symbol: "K",
        name: "kelvin",
        conversion: Conversion::Affine {
            to_base: kelvin_to_celsius,
            from_base: celsius_to_kelvin,
        },
        aliases: &["k", "kelvin"],
    },
];

impl MeasurementUnit for TemperatureUnit {
    const CATEGORY: Category = Category::Temperature;
    const BASE: Self = TemperatureUnit::Celsius;

    fn definitions() -> &'static [UnitDef<Self>] {
        TEMPERATURE_UNITS
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl_unit_traits!(TemperatureUnit);
