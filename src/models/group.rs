//! Group and membership models

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Group database model
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Group {
    pub id: i64,
    pub group_name: String,
    pub private: bool,
    #[serde(skip_serializing)]
    pub invitation_code: Option<String>,
    pub description: String,
    pub created_by_id: Option<i64>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// Membership of a user in a group
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserGroup {
    pub id: i64,
    pub user_id: i64,
    pub group_id: i64,
    pub is_registered: bool,
    pub is_group_manager: bool,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}
