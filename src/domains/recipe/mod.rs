pub mod types;

pub use types::{FoodType, Recipe, RecipeDifficulty, RecipeFoodType, RecipeIngredient};
