use crate::domains::core::convert::{parse_decimal, parse_timestamp};
use crate::errors::DomainResult;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use sqlx::FromRow;

/// Ingredient stock held in a user's pantry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryIngredient {
    pub pantries_ingredients_id: i64,
    pub ingredient_id: i64,
    pub pantry_ingredient_quantity: Decimal,
    pub pantry_ingredient_expiration_date: DateTime<Utc>,
    pub user_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct PantryIngredientRow {
    pub pantries_ingredients_id: i64,
    pub ingredient_id: i64,
    pub pantry_ingredient_quantity: String,
    pub pantry_ingredient_expiration_date: String,
    pub user_id: i64,
}

impl PantryIngredientRow {
    pub fn into_entity(self) -> DomainResult<PantryIngredient> {
        Ok(PantryIngredient {
            pantries_ingredients_id: self.pantries_ingredients_id,
            ingredient_id: self.ingredient_id,
            pantry_ingredient_quantity: parse_decimal(&self.pantry_ingredient_quantity, "pantry_ingredient_quantity")?,
            pantry_ingredient_expiration_date: parse_timestamp(&self.pantry_ingredient_expiration_date)?,
            user_id: self.user_id,
        })
    }
}

/// Line on the shopping list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopListItem {
    pub item_id: i64,
    pub item_ingredient_id: i64,
    pub item_quantity: Decimal,
    pub item_total_price: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct ShopListItemRow {
    pub item_id: i64,
    pub item_ingredient_id: i64,
    pub item_quantity: String,
    pub item_total_price: String,
}

impl ShopListItemRow {
    pub fn into_entity(self) -> DomainResult<ShopListItem> {
        Ok(ShopListItem {
            item_id: self.item_id,
            item_ingredient_id: self.item_ingredient_id,
            item_quantity: parse_decimal(&self.item_quantity, "item_quantity")?,
            item_total_price: parse_decimal(&self.item_total_price, "item_total_price")?,
        })
    }
}
