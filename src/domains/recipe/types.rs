use crate::domains::core::convert::{parse_decimal, parse_enum, parse_timestamp};
use crate::errors::DomainResult;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use sqlx::FromRow;
use std::fmt;

/// Recipe difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum RecipeDifficulty {
    Easy,
    Medium,
    Hard,
}

impl RecipeDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeDifficulty::Easy => "easy",
            RecipeDifficulty::Medium => "medium",
            RecipeDifficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(RecipeDifficulty::Easy),
            "medium" => Some(RecipeDifficulty::Medium),
            "hard" => Some(RecipeDifficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for RecipeDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recipe entity, owned by the user who wrote it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_id: i64,
    pub user_id: i64,
    pub recipe_name: String,
    pub recipe_description: String,
    /// Preparation time in minutes
    pub recipe_prepare_time: i64,
    pub recipe_difficulty: RecipeDifficulty,
    pub recipe_portions: i64,
    pub recipe_instructions: Option<String>,
    pub recipe_is_public: bool,
    pub recipe_created: DateTime<Utc>,
    pub recipe_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub recipe_id: i64,
    pub user_id: i64,
    pub recipe_name: String,
    pub recipe_description: String,
    pub recipe_prepare_time: i64,
    pub recipe_difficulty: String,
    pub recipe_portions: i64,
    pub recipe_instructions: Option<String>,
    pub recipe_is_public: bool,
    pub recipe_created: String,
    pub recipe_updated: String,
}

impl RecipeRow {
    pub fn into_entity(self) -> DomainResult<Recipe> {
        Ok(Recipe {
            recipe_id: self.recipe_id,
            user_id: self.user_id,
            recipe_name: self.recipe_name,
            recipe_description: self.recipe_description,
            recipe_prepare_time: self.recipe_prepare_time,
            recipe_difficulty: parse_enum(&self.recipe_difficulty, "recipe_difficulty", RecipeDifficulty::from_str)?,
            recipe_portions: self.recipe_portions,
            recipe_instructions: self.recipe_instructions,
            recipe_is_public: self.recipe_is_public,
            recipe_created: parse_timestamp(&self.recipe_created)?,
            recipe_updated: parse_timestamp(&self.recipe_updated)?,
        })
    }
}

/// Food type label (vegan, dessert, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodType {
    pub food_type_id: i64,
    pub food_type_name: String,
    pub food_type_created: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct FoodTypeRow {
    pub food_type_id: i64,
    pub food_type_name: String,
    pub food_type_created: String,
}

impl FoodTypeRow {
    pub fn into_entity(self) -> DomainResult<FoodType> {
        Ok(FoodType {
            food_type_id: self.food_type_id,
            food_type_name: self.food_type_name,
            food_type_created: parse_timestamp(&self.food_type_created)?,
        })
    }
}

/// Recipe ↔ food type link; keyed by (recipe_id, food_type_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RecipeFoodType {
    pub recipe_id: i64,
    pub food_type_id: i64,
}

/// Ingredient used by a recipe; keyed by (recipe_id, ingredient_id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub quantity: Decimal,
    pub measurement_unit_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct RecipeIngredientRow {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub quantity: String,
    pub measurement_unit_id: i64,
}

impl RecipeIngredientRow {
    pub fn into_entity(self) -> DomainResult<RecipeIngredient> {
        Ok(RecipeIngredient {
            recipe_id: self.recipe_id,
            ingredient_id: self.ingredient_id,
            quantity: parse_decimal(&self.quantity, "quantity")?,
            measurement_unit_id: self.measurement_unit_id,
        })
    }
}
