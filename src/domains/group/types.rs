use crate::domains::core::convert::{parse_enum, parse_timestamp};
use crate::errors::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use sqlx::FromRow;
use std::fmt;

/// Role of a user inside a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum GroupRole {
    Admin,
    Member,
}

impl GroupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupRole::Admin => "admin",
            GroupRole::Member => "member",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(GroupRole::Admin),
            "member" => Some(GroupRole::Member),
            _ => None,
        }
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A group of users sharing menus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub group_id: i64,
    pub groups_name: String,
    pub groups_description: Option<String>,
    pub group_created: DateTime<Utc>,
    pub group_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct GroupRow {
    pub group_id: i64,
    pub groups_name: String,
    pub groups_description: Option<String>,
    pub group_created: String,
    pub group_updated: String,
}

impl GroupRow {
    pub fn into_entity(self) -> DomainResult<Group> {
        Ok(Group {
            group_id: self.group_id,
            groups_name: self.groups_name,
            groups_description: self.groups_description,
            group_created: parse_timestamp(&self.group_created)?,
            group_updated: parse_timestamp(&self.group_updated)?,
        })
    }
}

/// Membership of a user in a group; keyed by (user_id, group_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub user_id: i64,
    pub group_id: i64,
    pub rol: GroupRole,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserGroupRow {
    pub user_id: i64,
    pub group_id: i64,
    pub rol: String,
}

impl UserGroupRow {
    pub fn into_entity(self) -> DomainResult<UserGroup> {
        Ok(UserGroup {
            user_id: self.user_id,
            group_id: self.group_id,
            rol: parse_enum(&self.rol, "rol", GroupRole::from_str)?,
        })
    }
}
