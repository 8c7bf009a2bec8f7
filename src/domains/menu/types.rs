use crate::domains::core::convert::{parse_enum, parse_timestamp};
use crate::errors::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use sqlx::FromRow;
use std::fmt;

/// Meal a menu is planned for. Stored capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum MenuType {
    Breakfast,
    Lunch,
    Dinner,
    Other,
}

impl MenuType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuType::Breakfast => "Breakfast",
            MenuType::Lunch => "Lunch",
            MenuType::Dinner => "Dinner",
            MenuType::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Breakfast" => Some(MenuType::Breakfast),
            "Lunch" => Some(MenuType::Lunch),
            "Dinner" => Some(MenuType::Dinner),
            "Other" => Some(MenuType::Other),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<&'static str> {
        vec!["Breakfast", "Lunch", "Dinner", "Other"]
    }
}

impl fmt::Display for MenuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub menu_id: i64,
    pub user_id: i64,
    pub menu_created: DateTime<Utc>,
    pub menu_updated: DateTime<Utc>,
    pub menu_type: MenuType,
}

#[derive(Debug, Clone, FromRow)]
pub struct MenuRow {
    pub menu_id: i64,
    pub user_id: i64,
    pub menu_created: String,
    pub menu_updated: String,
    pub menu_type: String,
}

impl MenuRow {
    pub fn into_entity(self) -> DomainResult<Menu> {
        Ok(Menu {
            menu_id: self.menu_id,
            user_id: self.user_id,
            menu_created: parse_timestamp(&self.menu_created)?,
            menu_updated: parse_timestamp(&self.menu_updated)?,
            menu_type: parse_enum(&self.menu_type, "menu_type", MenuType::from_str)?,
        })
    }
}

/// Menu ↔ recipe link; keyed by (menu_id, recipe_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MenuRecipe {
    pub menu_id: i64,
    pub recipe_id: i64,
}

/// Menu shared with a group; keyed by (menu_id, group_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MenuGroup {
    pub menu_id: i64,
    pub group_id: i64,
}
