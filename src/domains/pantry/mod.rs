pub mod types;

pub use types::{PantryIngredient, ShopListItem};
