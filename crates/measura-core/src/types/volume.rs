//! Volume units (base: litre)

use serde::{Deserialize, Serialize};

use super::unit::{impl_unit_traits, Arithmetic, Category, Conversion, MeasurementUnit, UnitDef};

/// Supported volume units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    Litre,
    Millilitre,
    Gallon,
}

/// Volume registry, ordered like [`VolumeUnit`]
pub static VOLUME_UNITS: &[UnitDef<VolumeUnit>] = &[
    UnitDef {
        unit: VolumeUnit::Litre,
        symbol: "L",
        name: "litre",
        conversion: Conversion::Linear(1.0),
        aliases: &["l", "litre", "litres", "liter", "liters"],
    },
    UnitDef {
        unit: VolumeUnit::Millilitre,
        symbol: "mL",
        name: "millilitre",
        conversion: Conversion::Linear(0.001),
        aliases: &["ml", "millilitre", "millilitres", "milliliter", "milliliters"],
    },
    UnitDef {
        unit: VolumeUnit::Gallon,
        symbol: "gal",
        name: "gallon",
        conversion: Conversion::Linear(3.78541),
        aliases: &["gal", "gallon", "gallons"],
    },
];

impl MeasurementUnit for VolumeUnit {
    const CATEGORY: Category = Category::Volume;
    const BASE: Self = VolumeUnit::Litre;

    fn definitions() -> &'static [UnitDef<Self>] {
        VOLUME_UNITS
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl Arithmetic for VolumeUnit {}

impl_unit_traits!(VolumeUnit);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, def) in VOLUME_UNITS.iter().enumerate() {
            assert_eq!(def.unit.ordinal(), i);
        }
    }

    #[test]
    fn test_litre_to_millilitres() {
        let ml = VolumeUnit::Litre.convert(VolumeUnit::Millilitre, 1.0).unwrap();
        assert!((ml - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_gallon_to_litres() {
        let l = VolumeUnit::Gallon.convert(VolumeUnit::Litre, 1.0).unwrap();
        assert_eq!(l, 3.78541);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(VolumeUnit::parse("ML"), Some(VolumeUnit::Millilitre));
        assert_eq!(VolumeUnit::parse("l"), Some(VolumeUnit::Litre));
        assert_eq!(VolumeUnit::parse("gallons"), Some(VolumeUnit::Gallon));
    }
}
