use crate::domains::core::convert::{parse_enum, parse_timestamp};
use crate::errors::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use sqlx::FromRow;
use std::fmt;

/// Notification kind. Stored values contain spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum NotificationType {
    #[serde(rename = "Purchase Reminder")]
    #[sqlx(rename = "Purchase Reminder")]
    PurchaseReminder,
    #[serde(rename = "Food Preparation")]
    #[sqlx(rename = "Food Preparation")]
    FoodPreparation,
    #[serde(rename = "Product Expiration")]
    #[sqlx(rename = "Product Expiration")]
    ProductExpiration,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::PurchaseReminder => "Purchase Reminder",
            NotificationType::FoodPreparation => "Food Preparation",
            NotificationType::ProductExpiration => "Product Expiration",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Purchase Reminder" => Some(NotificationType::PurchaseReminder),
            "Food Preparation" => Some(NotificationType::FoodPreparation),
            "Product Expiration" => Some(NotificationType::ProductExpiration),
            _ => None,
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: i64,
    pub user_id: i64,
    pub notification_type: NotificationType,
    pub notification_message: String,
    pub notification_created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct NotificationRow {
    pub notification_id: i64,
    pub user_id: i64,
    pub notification_type: String,
    pub notification_message: String,
    pub notification_created_date: String,
}

impl NotificationRow {
    pub fn into_entity(self) -> DomainResult<Notification> {
        Ok(Notification {
            notification_id: self.notification_id,
            user_id: self.user_id,
            notification_type: parse_enum(&self.notification_type, "notification_type", NotificationType::from_str)?,
            notification_message: self.notification_message,
            notification_created_date: parse_timestamp(&self.notification_created_date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_serializes_with_spaces() {
        let value = serde_json::to_value(NotificationType::ProductExpiration).unwrap();
        assert_eq!(value, "Product Expiration");
        assert_eq!(
            NotificationType::from_str("Purchase Reminder"),
            Some(NotificationType::PurchaseReminder)
        );
        assert_eq!(NotificationType::FoodPreparation.to_string(), "Food Preparation");
    }

    #[test]
    fn test_unknown_stored_type_is_rejected() {
        let row = NotificationRow {
            notification_id: 1,
            user_id: 1,
            notification_type: "Reminder".to_string(),
            notification_message: "buy milk".to_string(),
            notification_created_date: "2024-03-20T10:00:00Z".to_string(),
        };
        assert!(row.into_entity().is_err());
    }
}
