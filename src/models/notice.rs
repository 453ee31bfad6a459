//! Notice model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Notice database model
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notice {
    pub id: i64,
    pub group_id: i64,
    pub created_by_id: Option<i64>,
    pub title: String,
    pub content: String,
    pub visible: bool,
    pub fixed: bool,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}
