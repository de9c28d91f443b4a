//! measura-core: Core measurement engine for measura
//!
//! This crate provides unit conversion, tolerance-based comparison and
//! arithmetic for length, weight, volume and temperature quantities. It has no
//! UI dependencies and can be used from a CLI or any other front end.
//!
//! # Example
//!
//! ```
//! use measura_core::{LengthUnit, MeasurementService, MeasurementUnit, Quantity};
//!
//! // Registry conversions
//! let inches = LengthUnit::Feet.convert(LengthUnit::Inch, 1.0).unwrap();
//! assert!((inches - 12.0).abs() < 1e-9);
//!
//! // Typed quantities compare across units
//! let yard = Quantity::new(1.0, LengthUnit::Yard).unwrap();
//! let cm = Quantity::new(91.44, LengthUnit::Centimeter).unwrap();
//! assert_eq!(yard, cm);
//!
//! // Arithmetic with an explicit target unit
//! let foot = Quantity::new(1.0, LengthUnit::Feet).unwrap();
//! let twelve = Quantity::new(12.0, LengthUnit::Inch).unwrap();
//! let sum = foot.add_in(&twelve, LengthUnit::Yard).unwrap();
//! assert!((sum.value() - 2.0 / 3.0).abs() < 1e-6);
//!
//! // Command lines, as typed at a prompt
//! let service = MeasurementService::new();
//! assert_eq!(service.evaluate("1 ft / 6 in").unwrap().to_string(), "2");
//! ```

pub mod error;
pub mod eval;
pub mod parser;
pub mod service;
pub mod types;

pub use error::{MeasureError, Result};
pub use parser::{parse_line, BinaryOp, Command, Measure};
pub use service::MeasurementService;
pub use types::{
    format_number, format_with_precision, AnyQuantity, AnyUnit, Arithmetic, Category, Conversion,
    LengthUnit, MeasurementUnit, Operation, Outcome, Quantity, TemperatureUnit, UnitDef,
    VolumeUnit, WeightUnit, DEFAULT_PRECISION, EPSILON,
};
