//! User model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// Profile attached to a user account
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub real_name: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}
