pub mod types;

pub use types::{Category, Ingredient, MeasurementUnit, UnitType};
