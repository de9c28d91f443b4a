//! Unit registry and quantity types

pub mod unit;

mod any;
mod length;
mod quantity;
mod temperature;
mod value;
mod volume;
mod weight;

pub use any::{AnyQuantity, AnyUnit};
pub use length::{LengthUnit, LENGTH_UNITS};
pub use quantity::{Quantity, EPSILON};
pub use temperature::{TemperatureUnit, TEMPERATURE_UNITS};
pub use unit::{Arithmetic, Category, Conversion, MeasurementUnit, Operation, UnitDef};
pub use value::{format_number, format_with_precision, Outcome, DEFAULT_PRECISION};
pub use volume::{VolumeUnit, VOLUME_UNITS};
pub use weight::{WeightUnit, WEIGHT_UNITS};
