use crate::domains::core::convert::{parse_decimal, parse_enum, parse_timestamp};
use crate::errors::DomainResult;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use sqlx::FromRow;
use std::fmt;

/// What a measurement unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UnitType {
    Mass,
    Volume,
    Unit,
}

impl UnitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Mass => "mass",
            UnitType::Volume => "volume",
            UnitType::Unit => "unit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mass" => Some(UnitType::Mass),
            "volume" => Some(UnitType::Volume),
            "unit" => Some(UnitType::Unit),
            _ => None,
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ingredient category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
    pub category_created: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub category_id: i64,
    pub category_name: String,
    pub category_created: String,
}

impl CategoryRow {
    pub fn into_entity(self) -> DomainResult<Category> {
        Ok(Category {
            category_id: self.category_id,
            category_name: self.category_name,
            category_created: parse_timestamp(&self.category_created)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub ingredient_calories_per_unit: Decimal,
    pub ingredient_price_per_unit: Decimal,
    pub ingredient_created_date: DateTime<Utc>,
    pub ingredient_expiration_date: DateTime<Utc>,
    pub ingredient_description: String,
    pub category_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct IngredientRow {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub ingredient_calories_per_unit: String,
    pub ingredient_price_per_unit: String,
    pub ingredient_created_date: String,
    pub ingredient_expiration_date: String,
    pub ingredient_description: String,
    pub category_id: i64,
}

impl IngredientRow {
    pub fn into_entity(self) -> DomainResult<Ingredient> {
        Ok(Ingredient {
            ingredient_id: self.ingredient_id,
            ingredient_name: self.ingredient_name,
            ingredient_calories_per_unit: parse_decimal(&self.ingredient_calories_per_unit, "ingredient_calories_per_unit")?,
            ingredient_price_per_unit: parse_decimal(&self.ingredient_price_per_unit, "ingredient_price_per_unit")?,
            ingredient_created_date: parse_timestamp(&self.ingredient_created_date)?,
            ingredient_expiration_date: parse_timestamp(&self.ingredient_expiration_date)?,
            ingredient_description: self.ingredient_description,
            category_id: self.category_id,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementUnit {
    pub unit_id: i64,
    pub unit_name: String,
    /// Short form such as "kg"
    pub unit_abbreviation: String,
    pub unit_type: UnitType,
}

#[derive(Debug, Clone, FromRow)]
pub struct MeasurementUnitRow {
    pub unit_id: i64,
    pub unit_name: String,
    pub unit_abbreviation: String,
    pub unit_type: String,
}

impl MeasurementUnitRow {
    pub fn into_entity(self) -> DomainResult<MeasurementUnit> {
        Ok(MeasurementUnit {
            unit_id: self.unit_id,
            unit_name: self.unit_name,
            unit_abbreviation: self.unit_abbreviation,
            unit_type: parse_enum(&self.unit_type, "unit_type", UnitType::from_str)?,
        })
    }
}
