pub mod types;

pub use types::{Menu, MenuGroup, MenuRecipe, MenuType};
