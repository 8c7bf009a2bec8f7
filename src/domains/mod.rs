pub mod core;
pub mod group;
pub mod ingredient;
pub mod menu;
pub mod notification;
pub mod pantry;
pub mod recipe;
pub mod user;
