//! Length units (base: feet)

use serde::{Deserialize, Serialize};

use super::unit::{impl_unit_traits, Arithmetic, Category, Conversion, MeasurementUnit, UnitDef};

/// Supported length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Feet,
    Inch,
    Yard,
    Centimeter,
}

/// Length registry, ordered like [`LengthUnit`]
pub static LENGTH_UNITS: &[UnitDef<LengthUnit>] = &[
    UnitDef {
        unit: LengthUnit::Feet,
        symbol: "ft",
        name: "feet",
        conversion: Conversion::Linear(1.0),
        aliases: &["ft", "foot", "feet"],
    },
    UnitDef {
        unit: LengthUnit::Inch,
        symbol: "in",
        name: "inch",
        conversion: Conversion::Linear(1.0 / 12.0),
        aliases: &["in", "inch", "inches"],
    },
    UnitDef {
        unit: LengthUnit::Yard,
        symbol: "yd",
        name: "yard",
        conversion: Conversion::Linear(3.0),
        aliases: &["yd", "yard", "yards"],
    },
    UnitDef {
        unit: LengthUnit::Centimeter,
        symbol: "cm",
        name: "centimeter",
        conversion: Conversion::Linear(1.0 / 30.48),
        aliases: &["cm", "centimeter", "centimeters", "centimetre", "centimetres"],
    },
];

impl MeasurementUnit for LengthUnit {
    const CATEGORY: Category = Category::Length;
    const BASE: Self = LengthUnit::Feet;

    fn definitions() -> &'static [UnitDef<Self>] {
        LENGTH_UNITS
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Arithmetic for LengthUnit {}

impl_unit_traits!(LengthUnit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, def) in LENGTH_UNITS.iter().enumerate() {
            assert_eq!(def.unit.ordinal(), i);
        }
    }

    #[test]
    fn test_feet_to_inches() {
        let inches = LengthUnit::Feet.convert(LengthUnit::Inch, 1.0).unwrap();
        assert!((inches - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_centimeters_to_inches() {
        let inches = LengthUnit::Centimeter.convert(LengthUnit::Inch, 2.54).unwrap();
        assert!((inches - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_yard_to_centimeters() {
        let cm = LengthUnit::Yard.convert(LengthUnit::Centimeter, 1.0).unwrap();
        assert!((cm - 91.44).abs() < 1e-6);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(LengthUnit::parse("ft"), Some(LengthUnit::Feet));
        assert_eq!(LengthUnit::parse("Inches"), Some(LengthUnit::Inch));
        assert_eq!(LengthUnit::parse("YD"), Some(LengthUnit::Yard));
        assert_eq!(LengthUnit::parse("centimetre"), Some(LengthUnit::Centimeter));
        assert_eq!(LengthUnit::parse("kg"), None);
        assert_eq!("cm".parse::<LengthUnit>(), Ok(LengthUnit::Centimeter));
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(LengthUnit::Yard.to_string(), "yd");
        assert_eq!(LengthUnit::Inch.name(), "inch");
    }
}
